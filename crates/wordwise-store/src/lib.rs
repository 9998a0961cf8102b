pub mod error;
pub mod favorites;
pub mod kv;

pub use error::StoreError;
pub use favorites::FavoritesStore;
pub use kv::{FileStore, KeyValueStore, MemoryStore};
