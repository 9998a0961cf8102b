use std::fmt;

use serde::{Deserialize, Serialize};

pub const NO_MEANING: &str = "No definition available";
pub const NO_EXAMPLE: &str = "No example available";
pub const NO_STORY: &str = "No story available";
pub const COULD_NOT_IMPROVE: &str = "Couldn't improve this sentence. Please try again.";

pub fn placeholder_synonyms() -> Vec<String> {
    vec!["synonym1".to_string(), "synonym2".to_string()]
}

pub fn placeholder_antonyms() -> Vec<String> {
    vec!["antonym1".to_string(), "antonym2".to_string()]
}

/// Normalized dictionary lookup result.
///
/// `word` is always the trimmed search term, whatever the provider echoed back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordRecord {
    pub word: String,
    pub meaning: String,
    pub example: String,
    pub synonyms: Vec<String>,
    pub antonyms: Vec<String>,
    pub story: String,
}

impl WordRecord {
    /// Record with every field set to its per-field placeholder
    pub fn placeholder(term: &str) -> Self {
        Self {
            word: term.trim().to_string(),
            meaning: NO_MEANING.to_string(),
            example: NO_EXAMPLE.to_string(),
            synonyms: placeholder_synonyms(),
            antonyms: placeholder_antonyms(),
            story: NO_STORY.to_string(),
        }
    }

    /// Deterministic record used when the provider could not be reached
    /// or answered with something unusable.
    pub fn fallback(term: &str) -> Self {
        let word = term.trim().to_string();
        Self {
            meaning: format!("Couldn't fetch definition for \"{word}\""),
            example: format!("Example using \"{word}\""),
            synonyms: placeholder_synonyms(),
            antonyms: placeholder_antonyms(),
            story: format!("A short story about \"{word}\""),
            word,
        }
    }

    pub fn preview_synonyms(&self, limit: usize) -> &[String] {
        &self.synonyms[..self.synonyms.len().min(limit)]
    }

    pub fn preview_antonyms(&self, limit: usize) -> &[String] {
        &self.antonyms[..self.antonyms.len().min(limit)]
    }
}

/// Closed set of edit categories a rewrite may report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImprovementKind {
    Vocabulary,
    Grammar,
    Style,
    Clarity,
    Conciseness,
    Tone,
    Other,
}

impl ImprovementKind {
    pub const ALL: [ImprovementKind; 7] = [
        ImprovementKind::Vocabulary,
        ImprovementKind::Grammar,
        ImprovementKind::Style,
        ImprovementKind::Clarity,
        ImprovementKind::Conciseness,
        ImprovementKind::Tone,
        ImprovementKind::Other,
    ];

    /// Case-insensitive parse; anything outside the vocabulary becomes `Other`
    pub fn parse_lenient(raw: &str) -> Self {
        let raw = raw.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(raw))
            .unwrap_or(ImprovementKind::Other)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ImprovementKind::Vocabulary => "vocabulary",
            ImprovementKind::Grammar => "grammar",
            ImprovementKind::Style => "style",
            ImprovementKind::Clarity => "clarity",
            ImprovementKind::Conciseness => "conciseness",
            ImprovementKind::Tone => "tone",
            ImprovementKind::Other => "other",
        }
    }

    /// Badge text shown next to an improved sentence
    pub fn label(&self) -> &'static str {
        match self {
            ImprovementKind::Vocabulary => "Vocabulary Enhanced",
            ImprovementKind::Grammar => "Grammar Corrected",
            ImprovementKind::Style => "Style Improved",
            ImprovementKind::Clarity => "Clarity Improved",
            ImprovementKind::Conciseness => "More Concise",
            ImprovementKind::Tone => "Tone Adjusted",
            ImprovementKind::Other => "General Improvement",
        }
    }
}

impl fmt::Display for ImprovementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalized sentence rewrite. `improvements` is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImprovementRecord {
    pub improved: String,
    pub improvements: Vec<ImprovementKind>,
}

impl ImprovementRecord {
    /// Collapses duplicate kinds (first occurrence wins) and substitutes
    /// `[Other]` for an empty list.
    pub fn new(improved: String, kinds: impl IntoIterator<Item = ImprovementKind>) -> Self {
        let mut improvements = Vec::new();
        for kind in kinds {
            if !improvements.contains(&kind) {
                improvements.push(kind);
            }
        }
        if improvements.is_empty() {
            improvements.push(ImprovementKind::Other);
        }

        Self {
            improved,
            improvements,
        }
    }

    pub fn fallback() -> Self {
        Self::new(COULD_NOT_IMPROVE.to_string(), [ImprovementKind::Other])
    }
}

/// Result of a completion operation. Both arms carry something renderable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    /// Normalized answer from the provider
    Fetched(T),
    /// Deterministic stand-in after a failed call
    Fallback(T),
}

impl<T> Outcome<T> {
    pub fn is_fallback(&self) -> bool {
        matches!(self, Outcome::Fallback(_))
    }

    pub fn get(&self) -> &T {
        match self {
            Outcome::Fetched(value) | Outcome::Fallback(value) => value,
        }
    }

    pub fn into_inner(self) -> T {
        match self {
            Outcome::Fetched(value) | Outcome::Fallback(value) => value,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Outcome::Fetched(value) => Outcome::Fetched(f(value)),
            Outcome::Fallback(value) => Outcome::Fallback(f(value)),
        }
    }
}
