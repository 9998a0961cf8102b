use wordwise_types::WordRecord;

use crate::error::StoreError;
use crate::kv::KeyValueStore;

/// Saved words, unique by `word` (exact, case-sensitive), in insertion order.
///
/// Owns the in-memory list and the backing store. Every mutation writes the
/// whole list back as one JSON array under `key`; when that write fails the
/// in-memory list is left as it was.
pub struct FavoritesStore<S: KeyValueStore> {
    kv: S,
    key: String,
    records: Vec<WordRecord>,
}

impl<S: KeyValueStore> FavoritesStore<S> {
    pub fn open(kv: S, key: impl Into<String>) -> Self {
        let mut store = Self {
            kv,
            key: key.into(),
            records: Vec::new(),
        };
        store.load_all();
        store
    }

    /// Re-read the persisted list. Absent or unreadable data is an empty list.
    pub fn load_all(&mut self) -> &[WordRecord] {
        self.records = match self.read() {
            Ok(records) => dedupe(records),
            Err(e) => {
                tracing::error!("Error loading favorites: {}", e);
                Vec::new()
            }
        };
        &self.records
    }

    pub fn records(&self) -> &[WordRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.records.iter().any(|record| record.word == word)
    }

    pub fn get(&self, word: &str) -> Option<&WordRecord> {
        self.records.iter().find(|record| record.word == word)
    }

    /// Replace the whole list with one write
    pub fn save(&mut self, records: Vec<WordRecord>) -> Result<(), StoreError> {
        let records = dedupe(records);
        let encoded = serde_json::to_string(&records)?;

        if let Err(e) = self.kv.set(&self.key, &encoded) {
            tracing::error!("Error saving favorites: {}", e);
            return Err(e);
        }

        self.records = records;
        Ok(())
    }

    /// Insert, or replace the entry with the same word in place
    pub fn add(&mut self, record: WordRecord) -> Result<(), StoreError> {
        self.load_all();

        let mut records = self.records.clone();
        match records.iter_mut().find(|existing| existing.word == record.word) {
            Some(existing) => *existing = record,
            None => records.push(record),
        }

        self.save(records)
    }

    /// Returns whether an entry was removed
    pub fn remove(&mut self, word: &str) -> Result<bool, StoreError> {
        self.load_all();

        if !self.contains(word) {
            return Ok(false);
        }

        let records = self
            .records
            .iter()
            .filter(|record| record.word != word)
            .cloned()
            .collect();
        self.save(records)?;
        Ok(true)
    }

    /// Add when absent, remove when present. Returns the new saved state.
    pub fn toggle(&mut self, record: WordRecord) -> Result<bool, StoreError> {
        self.load_all();

        if self.contains(&record.word) {
            self.remove(&record.word)?;
            Ok(false)
        } else {
            self.add(record)?;
            Ok(true)
        }
    }

    pub fn clear(&mut self) -> Result<(), StoreError> {
        if let Err(e) = self.kv.delete(&self.key) {
            tracing::error!("Error clearing favorites: {}", e);
            return Err(e);
        }
        self.records.clear();
        Ok(())
    }

    fn read(&self) -> Result<Vec<WordRecord>, StoreError> {
        match self.kv.get(&self.key)? {
            Some(data) => Ok(serde_json::from_str(&data)?),
            None => Ok(Vec::new()),
        }
    }
}

/// Later duplicates overwrite earlier ones but keep the first position
fn dedupe(records: Vec<WordRecord>) -> Vec<WordRecord> {
    let mut unique: Vec<WordRecord> = Vec::with_capacity(records.len());
    for record in records {
        match unique.iter_mut().find(|existing| existing.word == record.word) {
            Some(existing) => *existing = record,
            None => unique.push(record),
        }
    }
    unique
}
