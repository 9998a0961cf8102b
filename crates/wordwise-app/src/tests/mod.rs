
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use kanal::{AsyncReceiver, AsyncSender};
use tokio::task::JoinHandle;
use tokio::time::timeout;
use tokio_util::sync::CancellationToken;
use wordwise_completion::{ChatBackend, ChatRequest, CompletionClient, CompletionError};
use wordwise_config::Config;
use wordwise_store::{KeyValueStore, MemoryStore};
use wordwise_types::{AppEvent, UiEvent};

use crate::events::event_loop;
use crate::state::AppState;

/// Provider stand-in keyed on the quoted word in the prompt:
/// `"slow"` answers late, `"broken"` fails, sentences get a grammar fix.
struct FakeProvider;

#[async_trait]
impl ChatBackend for FakeProvider {
    async fn complete(&self, request: &ChatRequest) -> Result<String, CompletionError> {
        let prompt = &request.messages[1].content;

        if prompt.starts_with("Rewrite") {
            return Ok(
                r#"{"improved":"I want to go to school.","improvements":["grammar"]}"#.to_string(),
            );
        }

        if prompt.contains("\"slow\"") {
            tokio::time::sleep(Duration::from_millis(300)).await;
        }

        if prompt.contains("\"broken\"") {
            return Err(CompletionError::MissingContent);
        }

        Ok(r#"{"meaning":"a test meaning","example":"An example.","synonyms":["one","two"],"antonyms":["three"],"story":"Line one.\nLine two.\nLine three."}"#.to_string())
    }
}

pub(crate) fn test_state() -> Arc<AppState> {
    test_state_with(Box::new(MemoryStore::new()))
}

pub(crate) fn test_state_with(kv: Box<dyn KeyValueStore>) -> Arc<AppState> {
    let config = Config::default();
    let client = CompletionClient::new(Arc::new(FakeProvider), config.completion.clone());
    Arc::new(AppState::new(config, client, kv))
}

pub(crate) struct Harness {
    pub ui_tx: AsyncSender<UiEvent>,
    pub app_rx: AsyncReceiver<AppEvent>,
    pub handle: JoinHandle<anyhow::Result<()>>,
    pub cancel: CancellationToken,
}

impl Harness {
    /// Event loop running against `FakeProvider`, past `BackendReady`
    pub async fn start() -> Self {
        let (ui_tx, ui_rx) = kanal::bounded_async::<UiEvent>(16);
        let (app_tx, app_rx) = kanal::bounded_async::<AppEvent>(16);
        let cancel = CancellationToken::new();

        let handle = tokio::spawn(event_loop(test_state(), ui_rx, app_tx, cancel.clone()));

        let harness = Self {
            ui_tx,
            app_rx,
            handle,
            cancel,
        };
        assert!(matches!(harness.next().await, AppEvent::BackendReady));
        harness
    }

    pub async fn send(&self, event: UiEvent) {
        self.ui_tx.send(event).await.expect("send failed");
    }

    pub async fn next(&self) -> AppEvent {
        match timeout(Duration::from_secs(2), self.app_rx.recv()).await {
            Ok(Ok(event)) => event,
            Ok(Err(e)) => panic!("Channel error: {}", e),
            Err(_) => panic!("Timeout - event never arrived!"),
        }
    }

    /// Next event that is not a loading indicator
    pub async fn next_content(&self) -> AppEvent {
        loop {
            match self.next().await {
                AppEvent::Loading { .. } => continue,
                event => return event,
            }
        }
    }

    pub async fn assert_quiet(&self, wait: Duration) {
        if let Ok(Ok(event)) = timeout(wait, self.app_rx.recv()).await {
            panic!("unexpected event: {:?}", event);
        }
    }
}
