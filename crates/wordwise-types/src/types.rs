use crate::record::{ImprovementRecord, Outcome, WordRecord};

/// Backend to front-end events
#[derive(Debug, Clone)]
pub enum AppEvent {
    BackendReady,
    Loading {
        operation: Operation,
        loading: bool,
    },
    ShowWord {
        record: Outcome<WordRecord>,
        is_favorite: bool,
    },
    ShowImprovement(Outcome<ImprovementRecord>),
    ShowFavorites(Vec<WordRecord>),
    FavoriteToggled {
        word: String,
        saved: bool,
    },
    Status(String),
}

/// Front-end to backend events
#[derive(Debug, Clone)]
pub enum UiEvent {
    Search(String),
    Improve(String),
    ToggleFavorite(WordRecord),
    RemoveFavorite(String),
    ListFavorites,
    Close,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Lookup,
    Improve,
}
