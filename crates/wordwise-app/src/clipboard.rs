use anyhow::Context;
use arboard::Clipboard;
use wordwise_types::{ImprovementRecord, Outcome};

/// Sentence worth copying: a fetched rewrite, never the fallback notice
pub fn copy_target(outcome: &Outcome<ImprovementRecord>) -> Option<&str> {
    match outcome {
        Outcome::Fetched(record) => Some(&record.improved),
        Outcome::Fallback(_) => None,
    }
}

pub fn copy_text(text: &str) -> anyhow::Result<()> {
    let mut clipboard = Clipboard::new().context("clipboard unavailable")?;
    clipboard
        .set_text(text.to_string())
        .context("failed to write to clipboard")?;
    tracing::debug!("Copied {} bytes to clipboard", text.len());
    Ok(())
}
