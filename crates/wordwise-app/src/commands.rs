use std::fmt::Write as _;

use anyhow::bail;
use serde::Serialize;
use wordwise_types::{Outcome, WordRecord};

use crate::cli::FavoritesAction;
use crate::clipboard::{copy_target, copy_text};
use crate::practice::DECK;
use crate::state::AppState;
use crate::ui::{render_favorites, render_improvement, render_word};

/// JSON shape printed by `--json`
#[derive(Serialize)]
struct Tagged<'a, T: Serialize> {
    fallback: bool,
    record: &'a T,
}

fn tagged_json<T: Serialize>(outcome: &Outcome<T>) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(&Tagged {
        fallback: outcome.is_fallback(),
        record: outcome.get(),
    })?)
}

/// Favorite state of a looked-up word after `--save` was honored or refused
#[derive(Debug, PartialEq, Eq)]
struct SaveResult {
    is_favorite: bool,
    status: Option<String>,
}

fn apply_save(
    state: &AppState,
    outcome: &Outcome<WordRecord>,
    save: bool,
) -> anyhow::Result<SaveResult> {
    let word = &outcome.get().word;
    let is_favorite = state.with_favorites(|favorites| favorites.contains(word))?;

    if !save {
        return Ok(SaveResult {
            is_favorite,
            status: None,
        });
    }

    if outcome.is_fallback() {
        tracing::warn!("Not saving {:?}: the lookup fell back to placeholders", word);
        return Ok(SaveResult {
            is_favorite,
            status: Some(format!("Not saved: \"{word}\" is an offline result")),
        });
    }

    let record = outcome.get().clone();
    match state.with_favorites(|favorites| favorites.add(record))? {
        Ok(()) => Ok(SaveResult {
            is_favorite: true,
            status: Some(format!("Saved \"{word}\" to favorites")),
        }),
        // Already logged by the store
        Err(_) => Ok(SaveResult {
            is_favorite,
            status: Some(format!("Couldn't save \"{word}\" to favorites")),
        }),
    }
}

pub async fn lookup(state: &AppState, word: &str, save: bool, json: bool) -> anyhow::Result<()> {
    let term = word.trim();
    if term.is_empty() {
        bail!("nothing to look up");
    }

    let outcome = state.client.lookup_word(term).await;
    let saved = apply_save(state, &outcome, save)?;

    if json {
        println!("{}", tagged_json(&outcome)?);
    } else {
        let max_synonyms = state.config.read().await.ui.max_synonyms;
        print!("{}", render_word(&outcome, saved.is_favorite, max_synonyms));
    }

    // stderr keeps `--json` output parseable
    if let Some(status) = saved.status {
        eprintln!("{status}");
    }

    Ok(())
}

pub async fn improve(
    state: &AppState,
    sentence: &str,
    json: bool,
    copy: bool,
) -> anyhow::Result<()> {
    let sentence = sentence.trim();
    if sentence.is_empty() {
        bail!("nothing to improve");
    }

    let outcome = state.client.improve_sentence(sentence).await;

    if json {
        println!("{}", tagged_json(&outcome)?);
    } else {
        print!("{}", render_improvement(&outcome));
    }

    if copy {
        match copy_target(&outcome) {
            Some(text) => match copy_text(text) {
                Ok(()) => eprintln!("Copied to clipboard"),
                Err(e) => {
                    tracing::warn!("{e:#}");
                    eprintln!("Couldn't copy: {e}");
                }
            },
            None => eprintln!("Nothing copied: the sentence could not be improved"),
        }
    }

    Ok(())
}

pub fn practice() {
    print!("{}", render_deck());
}

fn render_deck() -> String {
    let mut out = String::new();
    for (position, card) in DECK.iter().enumerate() {
        let _ = writeln!(out, "{}. {}", position + 1, card);
    }
    out
}

pub fn favorites(state: &AppState, action: FavoritesAction) -> anyhow::Result<()> {
    print!("{}", favorites_report(state, action)?);
    Ok(())
}

fn favorites_report(state: &AppState, action: FavoritesAction) -> anyhow::Result<String> {
    let report = match action {
        FavoritesAction::List { json } => {
            let records = state.with_favorites(|favorites| favorites.load_all().to_vec())?;
            if json {
                format!("{}\n", serde_json::to_string_pretty(&records)?)
            } else {
                render_favorites(&records)
            }
        }
        FavoritesAction::Remove { word } => {
            if state.with_favorites(|favorites| favorites.remove(&word))?? {
                format!("Removed \"{word}\" from favorites\n")
            } else {
                format!("\"{word}\" is not in favorites\n")
            }
        }
        FavoritesAction::Clear => {
            state.with_favorites(|favorites| favorites.clear())??;
            "Favorites cleared\n".to_string()
        }
    };

    Ok(report)
}

#[cfg(test)]
mod tests {
    use serde_json::Value;
    use wordwise_store::{KeyValueStore, MemoryStore, StoreError};

    use super::*;
    use crate::tests::{test_state, test_state_with};

    /// Store whose writes always fail
    struct ReadOnlyStore(MemoryStore);

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
            self.0.get(key)
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only").into())
        }

        fn delete(&mut self, _key: &str) -> Result<(), StoreError> {
            Err(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only").into())
        }
    }

    fn serene() -> WordRecord {
        WordRecord {
            meaning: "calm".to_string(),
            ..WordRecord::placeholder("serene")
        }
    }

    #[test]
    fn save_adds_fetched_record() {
        let state = test_state();
        let result = apply_save(&state, &Outcome::Fetched(serene()), true).unwrap();

        assert!(result.is_favorite);
        assert_eq!(result.status.as_deref(), Some("Saved \"serene\" to favorites"));
        let saved = state
            .with_favorites(|favorites| favorites.get("serene").cloned())
            .unwrap();
        assert_eq!(saved.map(|record| record.meaning).as_deref(), Some("calm"));
    }

    #[test]
    fn fallback_record_is_not_saved() {
        let state = test_state();
        let outcome = Outcome::Fallback(WordRecord::fallback("serene"));
        let result = apply_save(&state, &outcome, true).unwrap();

        assert!(!result.is_favorite);
        assert!(result.status.unwrap().starts_with("Not saved"));
        assert!(state.with_favorites(|favorites| favorites.is_empty()).unwrap());
    }

    #[test]
    fn without_save_reports_existing_favorite() {
        let state = test_state();
        state
            .with_favorites(|favorites| favorites.add(serene()))
            .unwrap()
            .unwrap();

        let result = apply_save(&state, &Outcome::Fetched(serene()), false).unwrap();
        assert_eq!(
            result,
            SaveResult {
                is_favorite: true,
                status: None,
            }
        );
    }

    #[test]
    fn failed_save_is_reported() {
        let state = test_state_with(Box::new(ReadOnlyStore(MemoryStore::new())));
        let result = apply_save(&state, &Outcome::Fetched(serene()), true).unwrap();

        assert!(!result.is_favorite);
        assert_eq!(
            result.status.as_deref(),
            Some("Couldn't save \"serene\" to favorites")
        );
    }

    #[test]
    fn json_output_is_tagged() {
        let json = tagged_json(&Outcome::Fallback(WordRecord::fallback("serene"))).unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["fallback"], Value::Bool(true));
        assert_eq!(value["record"]["word"], "serene");
        assert!(value["record"]["synonyms"].is_array());
    }

    #[test]
    fn remove_and_clear_reports() {
        let state = test_state();
        for record in [serene(), WordRecord::placeholder("ephemeral")] {
            state
                .with_favorites(|favorites| favorites.add(record))
                .unwrap()
                .unwrap();
        }

        let remove = |word: &str| FavoritesAction::Remove {
            word: word.to_string(),
        };
        assert_eq!(
            favorites_report(&state, remove("serene")).unwrap(),
            "Removed \"serene\" from favorites\n"
        );
        assert_eq!(
            favorites_report(&state, remove("serene")).unwrap(),
            "\"serene\" is not in favorites\n"
        );

        let listing = favorites_report(&state, FavoritesAction::List { json: false }).unwrap();
        assert!(listing.starts_with("ephemeral"));

        assert_eq!(
            favorites_report(&state, FavoritesAction::Clear).unwrap(),
            "Favorites cleared\n"
        );
        let listing = favorites_report(&state, FavoritesAction::List { json: true }).unwrap();
        assert_eq!(listing, "[]\n");
    }

    #[test]
    fn removal_failure_is_an_error() {
        let mut kv = MemoryStore::new();
        let existing = serde_json::to_string(&vec![serene()]).unwrap();
        kv.set("@favorites", &existing).unwrap();
        let state = test_state_with(Box::new(ReadOnlyStore(kv)));

        let action = FavoritesAction::Remove {
            word: "serene".to_string(),
        };
        assert!(favorites_report(&state, action).is_err());
    }

    #[test]
    fn deck_is_listed_in_order() {
        let deck = render_deck();
        let firsts: Vec<&str> = deck
            .lines()
            .filter(|line| !line.starts_with(' '))
            .collect();

        assert_eq!(firsts.len(), 5);
        assert!(firsts[0].starts_with("1. Ephemeral"));
        assert!(firsts[4].starts_with("5. Squirrel"));
        assert!(deck.contains("  Type of sauce\n"));
    }
}
