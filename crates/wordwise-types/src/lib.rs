pub mod record;
pub mod types;

pub use record::{ImprovementKind, ImprovementRecord, Outcome, WordRecord};
pub use types::{AppEvent, Operation, UiEvent};
