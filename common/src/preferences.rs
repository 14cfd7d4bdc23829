//! User preferences kept next to the annotations: theme and search scope.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    key_value_store::{KeyValueStore, StorageError},
    search_const::{EXTERNAL_SEARCH_STORAGE_KEY, THEME_STORAGE_KEY},
    search_query::UnknownVariant,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeType {
    #[default]
    Light,
    Dark,
    Sepia,
}

impl ThemeType {
    pub const ALL: [ThemeType; 3] = [ThemeType::Light, ThemeType::Dark, ThemeType::Sepia];

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeType::Light => "light",
            ThemeType::Dark => "dark",
            ThemeType::Sepia => "sepia",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ThemeType::Light => "Light",
            ThemeType::Dark => "Dark",
            ThemeType::Sepia => "Sepia",
        }
    }
}

impl Display for ThemeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(ThemeType::Light),
            "dark" => Ok(ThemeType::Dark),
            "sepia" => Ok(ThemeType::Sepia),
            _ => Err(UnknownVariant { kind: "theme", value: s.to_string() }),
        }
    }
}


#[derive(Debug, Clone)]
pub struct Preferences<S> {
    store: S,
}

impl<S: KeyValueStore> Preferences<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Stored theme, light when nothing (or nothing valid) is stored.
    pub fn theme(&self) -> ThemeType {
        self.store
            .get(THEME_STORAGE_KEY)
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }

    pub fn set_theme(&self, theme: ThemeType) -> Result<(), StorageError> {
        self.store.set(THEME_STORAGE_KEY, theme.as_str())
    }

    pub fn allow_external_search(&self) -> bool {
        self.store
            .get(EXTERNAL_SEARCH_STORAGE_KEY)
            .is_some_and(|s| s.trim() == "true")
    }

    pub fn set_allow_external_search(&self, allow: bool) -> Result<(), StorageError> {
        self.store.set(EXTERNAL_SEARCH_STORAGE_KEY, if allow { "true" } else { "false" })
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::key_value_store::MemoryStore;

    #[test]
    fn defaults_when_store_is_empty() {
        let prefs = Preferences::new(MemoryStore::new());
        assert_eq!(prefs.theme(), ThemeType::Light);
        assert!(!prefs.allow_external_search());
    }

    #[test]
    fn round_trips_through_the_store() {
        let store = MemoryStore::new();
        let prefs = Preferences::new(store.clone());
        prefs.set_theme(ThemeType::Sepia).unwrap();
        prefs.set_allow_external_search(true).unwrap();
        assert_eq!(store.get(THEME_STORAGE_KEY).as_deref(), Some("sepia"));
        let reloaded = Preferences::new(store);
        assert_eq!(reloaded.theme(), ThemeType::Sepia);
        assert!(reloaded.allow_external_search());
    }

    #[test]
    fn unknown_theme_falls_back_to_light() {
        let store = MemoryStore::new();
        store.set(THEME_STORAGE_KEY, "neon").unwrap();
        assert_eq!(Preferences::new(store).theme(), ThemeType::Light);
    }
}
