//! Bookmark and blacklist flags, persisted per result id.

use std::collections::BTreeSet;

use crate::{
    key_value_store::KeyValueStore,
    search_const::{BLACKLIST_STORAGE_KEY, BOOKMARKS_STORAGE_KEY},
    search_result::Annotation,
};

/// Loaded once from the key/value store; every toggle writes its id-set back
/// immediately. Entries are never evicted.
#[derive(Debug, Clone)]
pub struct AnnotationStore<S> {
    store: S,
    bookmarked: BTreeSet<String>,
    blacklisted: BTreeSet<String>,
}

impl<S: KeyValueStore> AnnotationStore<S> {
    pub fn load(store: S) -> Self {
        let bookmarked = load_id_set(&store, BOOKMARKS_STORAGE_KEY);
        let blacklisted = load_id_set(&store, BLACKLIST_STORAGE_KEY);
        tracing::debug!("loaded {} bookmarks and {} blacklisted results", bookmarked.len(), blacklisted.len());
        Self { store, bookmarked, blacklisted }
    }

    pub fn get(&self, id: &str) -> Annotation {
        Annotation {
            bookmarked: self.bookmarked.contains(id),
            blacklisted: self.blacklisted.contains(id),
        }
    }

    /// Flips the bookmark flag and returns the new value.
    pub fn toggle_bookmark(&mut self, id: &str) -> bool {
        let now = flip(&mut self.bookmarked, id);
        persist_id_set(&self.store, BOOKMARKS_STORAGE_KEY, &self.bookmarked);
        now
    }

    /// Flips the blacklist flag and returns the new value.
    pub fn toggle_blacklist(&mut self, id: &str) -> bool {
        let now = flip(&mut self.blacklisted, id);
        persist_id_set(&self.store, BLACKLIST_STORAGE_KEY, &self.blacklisted);
        now
    }

    pub fn bookmarked_ids(&self) -> impl Iterator<Item = &str> {
        self.bookmarked.iter().map(String::as_str)
    }
}

fn flip(set: &mut BTreeSet<String>, id: &str) -> bool {
    if set.remove(id) {
        false
    } else {
        set.insert(id.to_string());
        true
    }
}

fn load_id_set(store: &impl KeyValueStore, key: &str) -> BTreeSet<String> {
    let Some(raw) = store.get(key) else {
        return BTreeSet::new();
    };
    match serde_json::from_str::<Vec<String>>(&raw) {
        Ok(ids) => ids.into_iter().collect(),
        Err(e) => {
            tracing::warn!("ignoring malformed {key} in storage: {e}");
            BTreeSet::new()
        }
    }
}

fn persist_id_set(store: &impl KeyValueStore, key: &str, ids: &BTreeSet<String>) {
    let json = match serde_json::to_string(ids) {
        Ok(json) => json,
        Err(e) => {
            tracing::warn!("could not serialize {key}: {e}");
            return;
        }
    };
    if let Err(e) = store.set(key, &json) {
        tracing::warn!("{e}");
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::key_value_store::{MemoryStore, StorageError};

    #[test]
    fn loads_persisted_id_sets() {
        let store = MemoryStore::new();
        store.set(BOOKMARKS_STORAGE_KEY, r#"["a","b"]"#).unwrap();
        store.set(BLACKLIST_STORAGE_KEY, r#"["b"]"#).unwrap();
        let annotations = AnnotationStore::load(store);
        assert_eq!(annotations.get("a"), Annotation { bookmarked: true, blacklisted: false });
        assert_eq!(annotations.get("b"), Annotation { bookmarked: true, blacklisted: true });
        assert_eq!(annotations.get("c"), Annotation::default());
    }

    #[test]
    fn malformed_storage_loads_empty() {
        let store = MemoryStore::new();
        store.set(BOOKMARKS_STORAGE_KEY, "{not json").unwrap();
        let annotations = AnnotationStore::load(store);
        assert_eq!(annotations.bookmarked_ids().count(), 0);
    }

    #[test]
    fn toggle_twice_restores_store() {
        let store = MemoryStore::new();
        let mut annotations = AnnotationStore::load(store.clone());
        let before = annotations.get("x");
        assert!(annotations.toggle_bookmark("x"));
        assert_eq!(store.get(BOOKMARKS_STORAGE_KEY).as_deref(), Some(r#"["x"]"#));
        assert!(!annotations.toggle_bookmark("x"));
        assert_eq!(annotations.get("x"), before);
        assert_eq!(store.get(BOOKMARKS_STORAGE_KEY).as_deref(), Some("[]"));
    }

    #[test]
    fn flags_are_independent() {
        let mut annotations = AnnotationStore::load(MemoryStore::new());
        annotations.toggle_bookmark("x");
        annotations.toggle_blacklist("x");
        assert_eq!(annotations.get("x"), Annotation { bookmarked: true, blacklisted: true });
        annotations.toggle_bookmark("x");
        assert_eq!(annotations.get("x"), Annotation { bookmarked: false, blacklisted: true });
    }

    #[test]
    fn toggles_survive_a_reload() {
        let store = MemoryStore::new();
        AnnotationStore::load(store.clone()).toggle_blacklist("x");
        assert!(AnnotationStore::load(store).get("x").blacklisted);
    }

    struct ReadOnlyStore;

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }

        fn set(&self, key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError { key: key.to_string(), reason: "quota exceeded".to_string() })
        }
    }

    #[test]
    fn failed_write_still_updates_memory() {
        let mut annotations = AnnotationStore::load(ReadOnlyStore);
        assert!(annotations.toggle_blacklist("x"));
        assert!(annotations.get("x").blacklisted);
    }
}
