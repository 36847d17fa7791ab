// SPDX-License-Identifier: MPL-2.0
//! Ordered, bounded history store.
//!
//! Invariants: newest entry at index 0, no duplicate ids, never more than
//! [`HISTORY_LIMIT`] entries. Order reflects creation recency; updating an
//! entry in place does not reorder. Every mutation persists synchronously;
//! with at most 20 small entries, simplicity wins over batching.

use super::storage::HistoryStorage;
use super::{GeneratedIcon, HISTORY_LIMIT};
use uuid::Uuid;

pub struct HistoryStore<S: HistoryStorage> {
    storage: S,
    icons: Vec<GeneratedIcon>,
}

impl<S: HistoryStorage> HistoryStore<S> {
    /// Loads the history from storage.
    ///
    /// A missing document yields an empty history. A document that fails to
    /// parse also yields an empty history, logged and never fatal: a corrupt
    /// cache must not keep the application from starting.
    pub fn load(storage: S) -> Self {
        let icons = match storage.read() {
            Ok(Some(document)) => match serde_json::from_str::<Vec<GeneratedIcon>>(&document) {
                Ok(mut icons) => {
                    icons.truncate(HISTORY_LIMIT);
                    icons
                }
                Err(e) => {
                    eprintln!("Failed to parse icon history, starting empty: {e}");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                eprintln!("Failed to read icon history, starting empty: {e}");
                Vec::new()
            }
        };

        Self { storage, icons }
    }

    /// The stored icons, newest first.
    #[must_use]
    pub fn icons(&self) -> &[GeneratedIcon] {
        &self.icons
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.icons.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }

    /// Looks up an entry by id.
    #[must_use]
    pub fn get(&self, id: Uuid) -> Option<&GeneratedIcon> {
        self.icons.iter().find(|icon| icon.id == id)
    }

    /// Prepends a new icon, evicting beyond the retention cap, and persists.
    pub fn append(&mut self, icon: GeneratedIcon) {
        self.icons.insert(0, icon);
        self.icons.truncate(HISTORY_LIMIT);
        self.persist();
    }

    /// Replaces the entry with a matching id in place and persists.
    ///
    /// Position is preserved: a mutation (background removal) is not a new
    /// creation. A missing id is a no-op.
    pub fn update(&mut self, icon: &GeneratedIcon) {
        if let Some(existing) = self.icons.iter_mut().find(|entry| entry.id == icon.id) {
            *existing = icon.clone();
            self.persist();
        }
    }

    /// Deletes the entry with a matching id and persists.
    ///
    /// Returns whether anything was removed; an absent id leaves the
    /// sequence (and storage) untouched.
    pub fn remove(&mut self, id: Uuid) -> bool {
        let before = self.icons.len();
        self.icons.retain(|icon| icon.id != id);
        let removed = self.icons.len() != before;
        if removed {
            self.persist();
        }
        removed
    }

    /// Empties the history and persists.
    pub fn clear(&mut self) {
        self.icons.clear();
        self.persist();
    }

    /// Writes the full sequence to storage.
    ///
    /// A write failure is logged and otherwise ignored: the in-memory state
    /// stays authoritative for this session.
    fn persist(&mut self) {
        match serde_json::to_string(&self.icons) {
            Ok(document) => {
                if let Err(e) = self.storage.write(&document) {
                    eprintln!("Failed to save icon history: {e}");
                }
            }
            Err(e) => eprintln!("Failed to serialize icon history: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::MemoryStorage;

    fn icon(label: &str) -> GeneratedIcon {
        GeneratedIcon::new(
            format!("data:image/png;base64,{label}"),
            format!("prompt {label}"),
            "Premium Flat".to_string(),
        )
    }

    fn store_with(count: usize) -> HistoryStore<MemoryStorage> {
        let mut store = HistoryStore::load(MemoryStorage::new());
        for i in 0..count {
            store.append(icon(&i.to_string()));
        }
        store
    }

    #[test]
    fn load_from_empty_storage_is_empty() {
        let store = HistoryStore::load(MemoryStorage::new());
        assert!(store.is_empty());
    }

    #[test]
    fn load_from_corrupt_document_is_empty() {
        let store = HistoryStore::load(MemoryStorage::with_document("not json"));
        assert!(store.is_empty());
    }

    #[test]
    fn append_puts_newest_first() {
        let mut store = HistoryStore::load(MemoryStorage::new());
        let first = icon("first");
        let second = icon("second");

        store.append(first.clone());
        store.append(second.clone());

        assert_eq!(store.icons()[0].id, second.id);
        assert_eq!(store.icons()[1].id, first.id);
    }

    #[test]
    fn append_never_exceeds_limit() {
        let store = store_with(HISTORY_LIMIT + 5);
        assert_eq!(store.len(), HISTORY_LIMIT);
    }

    #[test]
    fn twenty_first_append_evicts_oldest() {
        let mut store = HistoryStore::load(MemoryStorage::new());
        let oldest = icon("oldest");
        store.append(oldest.clone());
        for i in 0..HISTORY_LIMIT {
            store.append(icon(&i.to_string()));
        }

        assert_eq!(store.len(), HISTORY_LIMIT);
        assert!(store.get(oldest.id).is_none());
    }

    #[test]
    fn update_changes_url_in_place() {
        let mut store = store_with(3);
        let mut target = store.icons()[1].clone();
        let original_len = store.len();
        target.url = "data:image/png;base64,transparent".to_string();

        store.update(&target);

        assert_eq!(store.len(), original_len);
        assert_eq!(store.icons()[1].id, target.id);
        assert_eq!(store.icons()[1].url, target.url);
        // Order still reflects creation recency, not mutation.
        assert_ne!(store.icons()[0].id, target.id);
    }

    #[test]
    fn update_with_unknown_id_is_noop() {
        let mut store = store_with(2);
        let before: Vec<_> = store.icons().to_vec();

        store.update(&icon("stranger"));

        assert_eq!(store.icons(), before.as_slice());
    }

    #[test]
    fn remove_shrinks_by_exactly_one() {
        let mut store = store_with(4);
        let victim = store.icons()[2].id;

        assert!(store.remove(victim));
        assert_eq!(store.len(), 3);
        assert!(store.get(victim).is_none());
    }

    #[test]
    fn remove_unknown_id_is_noop() {
        let mut store = store_with(2);
        let before: Vec<_> = store.icons().to_vec();

        assert!(!store.remove(Uuid::new_v4()));
        assert_eq!(store.icons(), before.as_slice());
    }

    #[test]
    fn clear_empties_and_persists() {
        let mut store = store_with(5);
        store.clear();
        assert!(store.is_empty());
    }

    #[test]
    fn persisted_document_round_trips() {
        let mut store = HistoryStore::load(MemoryStorage::new());
        for i in 0..3 {
            store.append(icon(&i.to_string()));
        }
        let expected: Vec<_> = store.icons().to_vec();

        // Hand the written document to a fresh store, as a restart would.
        let document = serde_json::to_string(&expected).expect("serialize");
        let reloaded = HistoryStore::load(MemoryStorage::with_document(document));

        assert_eq!(reloaded.icons(), expected.as_slice());
    }

    #[test]
    fn load_truncates_oversized_documents() {
        let too_many: Vec<_> = (0..HISTORY_LIMIT + 3)
            .map(|i| icon(&i.to_string()))
            .collect();
        let document = serde_json::to_string(&too_many).expect("serialize");

        let store = HistoryStore::load(MemoryStorage::with_document(document));
        assert_eq!(store.len(), HISTORY_LIMIT);
    }
}
