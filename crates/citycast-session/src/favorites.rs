//! User-curated list of saved city names.

use crate::store::{KeyValueStore, StoreError, SAVED_CITIES_KEY};

/// Ordered set of city names: insertion order is kept, duplicates are refused.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Favorites {
    names: Vec<String>,
}

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a list, dropping repeated names after their first occurrence.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut favorites = Self::new();
        for name in names {
            favorites.insert(name.into());
        }
        favorites
    }

    /// Read the saved list from the store. Absent or malformed data yields an empty set.
    pub fn load(store: &dyn KeyValueStore) -> Self {
        let Some(raw) = store.get(SAVED_CITIES_KEY) else {
            return Self::new();
        };

        match serde_json::from_str::<Vec<String>>(&raw) {
            Ok(names) => Self::from_names(names),
            Err(e) => {
                tracing::warn!("Ignoring malformed {}: {}", SAVED_CITIES_KEY, e);
                Self::new()
            }
        }
    }

    /// Write the full list to the store.
    pub fn persist(&self, store: &dyn KeyValueStore) -> Result<(), StoreError> {
        let json = serde_json::to_string(&self.names)?;
        store.set(SAVED_CITIES_KEY, &json)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Append a name; returns false if it was already present.
    pub fn insert(&mut self, name: String) -> bool {
        if self.contains(&name) {
            return false;
        }
        self.names.push(name);
        true
    }

    /// Remove by exact match; returns false if absent.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.names.len();
        self.names.retain(|n| n != name);
        self.names.len() != before
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
