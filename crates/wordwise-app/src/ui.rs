use std::fmt::Write as _;
use std::io::Write as _;
use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::RwLock;
use tokio_util::sync::CancellationToken;
use wordwise_config::Config;
use wordwise_types::{AppEvent, ImprovementRecord, Operation, Outcome, UiEvent, WordRecord};

use crate::clipboard::{copy_target, copy_text};
use crate::practice::PracticeDeck;

const HELP: &str = "\
Type a word to look it up.
  :improve <sentence>   rewrite a sentence
  :copy                 copy the last rewrite to the clipboard
  :save                 add/remove the last word from favorites
  :favorites            list saved words
  :remove <word>        remove a saved word
  :practice             show the pronunciation card
  :next                 next pronunciation card
  :help                 show this help
  :quit                 leave";

/// What a line typed in the session turns into
#[derive(Debug)]
pub enum Input {
    Send(UiEvent),
    Copy,
    Practice,
    NextPractice,
    Help,
    Hint(&'static str),
    Nothing,
}

pub fn parse_input(line: &str, current: Option<&WordRecord>) -> Input {
    let line = line.trim();
    if line.is_empty() {
        return Input::Nothing;
    }

    let Some(command) = line.strip_prefix(':') else {
        return Input::Send(UiEvent::Search(line.to_string()));
    };

    let (name, rest) = command
        .split_once(char::is_whitespace)
        .map(|(name, rest)| (name, rest.trim()))
        .unwrap_or((command, ""));

    match name {
        "q" | "quit" | "exit" => Input::Send(UiEvent::Close),
        "h" | "help" => Input::Help,
        "improve" | "i" if rest.is_empty() => Input::Hint("Type a sentence after :improve"),
        "improve" | "i" => Input::Send(UiEvent::Improve(rest.to_string())),
        "copy" | "c" => Input::Copy,
        "practice" | "p" => Input::Practice,
        "next" | "n" => Input::NextPractice,
        "save" | "s" => match current {
            Some(record) => Input::Send(UiEvent::ToggleFavorite(record.clone())),
            None => Input::Hint("Look up a word first"),
        },
        "favorites" | "f" => Input::Send(UiEvent::ListFavorites),
        "remove" | "r" if rest.is_empty() => Input::Hint("Type a word after :remove"),
        "remove" | "r" => Input::Send(UiEvent::RemoveFavorite(rest.to_string())),
        _ => Input::Hint("Unknown command, try :help"),
    }
}

pub fn render_word(outcome: &Outcome<WordRecord>, is_favorite: bool, max_synonyms: usize) -> String {
    let record = outcome.get();
    let mut out = String::new();

    let star = if is_favorite { " ★" } else { "" };
    let _ = writeln!(out, "{}{}", record.word, star);
    if outcome.is_fallback() {
        let _ = writeln!(out, "(offline result)");
    }
    let _ = writeln!(out, "  Meaning:  {}", record.meaning);
    let _ = writeln!(out, "  Example:  {}", record.example);
    let _ = writeln!(
        out,
        "  Synonyms: {}",
        record.preview_synonyms(max_synonyms).join(", ")
    );
    let _ = writeln!(
        out,
        "  Antonyms: {}",
        record.preview_antonyms(max_synonyms).join(", ")
    );
    let _ = writeln!(out, "  Story:");
    for line in record.story.lines() {
        let _ = writeln!(out, "    {}", line.trim());
    }

    out
}

pub fn render_improvement(outcome: &Outcome<ImprovementRecord>) -> String {
    let record = outcome.get();
    let mut out = String::new();

    let _ = writeln!(out, "{}", record.improved);
    if !outcome.is_fallback() {
        let labels: Vec<&str> = record.improvements.iter().map(|kind| kind.label()).collect();
        let _ = writeln!(out, "  What was improved: {}", labels.join(" · "));
    }

    out
}

pub fn render_favorites(records: &[WordRecord]) -> String {
    if records.is_empty() {
        return "No favorites yet. Search for words and save them with :save\n".to_string();
    }

    let mut out = String::new();
    for record in records {
        let _ = writeln!(out, "{:<20} {}", record.word, record.meaning);
    }
    out
}

/// Terminal front-end: reads lines from stdin, prints backend events
pub async fn ui_loop(
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    ui_to_app_tx: AsyncSender<UiEvent>,
    config: Arc<RwLock<Config>>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let max_synonyms = config.read().await.ui.max_synonyms;
    let interactive = atty::is(atty::Stream::Stdin);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    // Last word shown, target of :save
    let mut current: Option<WordRecord> = None;
    // Last rewrite, target of :copy
    let mut improved: Option<String> = None;
    let mut deck = PracticeDeck::new();
    // Input is over; keep printing until the backend has finished
    let mut closing = false;

    loop {
        let prompting = interactive && !closing;

        // Results already queued are printed before honoring cancellation
        tokio::select! {
            biased;

            event = app_to_ui_rx.recv() => {
                let Ok(event) = event else { break };
                match event {
                    AppEvent::BackendReady => {
                        if interactive {
                            println!("{HELP}");
                            prompt();
                        }
                    }
                    AppEvent::Loading { operation, loading } => {
                        if loading {
                            match operation {
                                Operation::Lookup => println!("Looking up..."),
                                Operation::Improve => println!("Improving..."),
                            }
                        }
                    }
                    AppEvent::ShowWord { record, is_favorite } => {
                        print!("{}", render_word(&record, is_favorite, max_synonyms));
                        current = (!record.is_fallback()).then(|| record.into_inner());
                        prompt_if(prompting);
                    }
                    AppEvent::ShowImprovement(outcome) => {
                        print!("{}", render_improvement(&outcome));
                        improved = copy_target(&outcome).map(str::to_string);
                        prompt_if(prompting);
                    }
                    AppEvent::ShowFavorites(records) => {
                        print!("{}", render_favorites(&records));
                        prompt_if(prompting);
                    }
                    AppEvent::FavoriteToggled { word, saved } => {
                        if saved {
                            println!("Saved \"{word}\" to favorites");
                        } else {
                            println!("Removed \"{word}\" from favorites");
                        }
                        prompt_if(prompting);
                    }
                    AppEvent::Status(message) => {
                        println!("{message}");
                        prompt_if(prompting);
                    }
                }
            }
            _ = cancel.cancelled() => break,
            line = lines.next_line(), if !closing => {
                let Some(line) = line? else {
                    tracing::debug!("stdin closed, waiting for pending results");
                    ui_to_app_tx.send(UiEvent::Close).await?;
                    closing = true;
                    continue;
                };

                match parse_input(&line, current.as_ref()) {
                    Input::Send(event) => {
                        closing = matches!(event, UiEvent::Close);
                        ui_to_app_tx.send(event).await?;
                    }
                    Input::Copy => {
                        match improved.as_deref() {
                            Some(text) => match copy_text(text) {
                                Ok(()) => println!("Copied to clipboard"),
                                Err(e) => {
                                    tracing::warn!("{e:#}");
                                    println!("Couldn't copy: {e}");
                                }
                            },
                            None => println!("Improve a sentence first"),
                        }
                        prompt_if(interactive);
                    }
                    Input::Practice => {
                        println!("{}", deck.current());
                        prompt_if(interactive);
                    }
                    Input::NextPractice => {
                        println!("{}", deck.advance());
                        prompt_if(interactive);
                    }
                    Input::Help => {
                        println!("{HELP}");
                        prompt_if(interactive);
                    }
                    Input::Hint(hint) => {
                        println!("{hint}");
                        prompt_if(interactive);
                    }
                    Input::Nothing => prompt_if(interactive),
                }
            }
        }
    }

    Ok(())
}

fn prompt() {
    print!("> ");
    let _ = std::io::stdout().flush();
}

fn prompt_if(interactive: bool) {
    if interactive {
        prompt();
    }
}
