//! Locally persisted favorite recipes.
//!
//! The whole list lives as one JSON array in a single key-value slot. Every
//! operation re-reads that slot; there is no in-memory cache and no locking,
//! so concurrent writers can lose updates (last write wins).

use std::path::Path;

use recipe_api::types::Recipe;
use serde::{Deserialize, Serialize};

use crate::db::{Db, DbError};
use crate::error::RecipeExplorerError;
use crate::storage::KeyValueStore;

/// Storage slot holding the favorites array.
pub const FAVORITES_KEY: &str = "recipe-explorer:favorites";

/// The part of a [`Recipe`] kept in favorites. Ingredients and instructions
/// are left out to keep the stored payload small.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct FavoriteEntry {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl From<&Recipe> for FavoriteEntry {
    fn from(recipe: &Recipe) -> Self {
        Self {
            id: recipe.id.clone(),
            title: recipe.title.clone(),
            image: recipe.image.clone(),
            description: recipe.description.clone(),
        }
    }
}

/// Favorites list over any [`KeyValueStore`].
///
/// Reads never fail: a missing, unparseable or non-array payload reads as an
/// empty list (without rewriting storage). Write failures are logged and
/// dropped.
pub struct FavoritesStore<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> FavoritesStore<S> {
    pub fn new(store: S) -> Self {
        Self::with_key(store, FAVORITES_KEY)
    }

    /// Uses a custom slot name instead of [`FAVORITES_KEY`].
    pub fn with_key(store: S, key: &str) -> Self {
        Self {
            store,
            key: key.to_string(),
        }
    }

    fn read(&self) -> Vec<FavoriteEntry> {
        let raw = match self.store.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!("Failed to read favorites: {}", e);
                return Vec::new();
            }
        };
        parse_entries(&raw)
    }

    fn write(&self, entries: &[FavoriteEntry]) {
        if let Err(e) = self.try_write(entries) {
            tracing::warn!("Failed to save favorites: {}", e);
        }
    }

    fn try_write(&self, entries: &[FavoriteEntry]) -> Result<(), DbError> {
        let json = serde_json::to_string(entries)?;
        self.store.set(&self.key, &json)
    }

    /// All favorites in the order they were saved.
    pub fn get_all(&self) -> Vec<FavoriteEntry> {
        self.read()
    }

    /// Appends `entry` unless one with the same id is already saved.
    pub fn save(&self, entry: &FavoriteEntry) {
        let mut entries = self.read();
        if !entries.iter().any(|e| e.id == entry.id) {
            entries.push(entry.clone());
            self.write(&entries);
        }
    }

    /// Removes the favorite with `id`, if present.
    pub fn remove(&self, id: &str) {
        let entries: Vec<FavoriteEntry> =
            self.read().into_iter().filter(|e| e.id != id).collect();
        self.write(&entries);
    }

    pub fn contains(&self, id: &str) -> bool {
        self.read().iter().any(|e| e.id == id)
    }

    /// Removes `entry` if saved, saves it otherwise. Returns whether it is saved afterwards.
    pub fn toggle(&self, entry: &FavoriteEntry) -> bool {
        if self.contains(&entry.id) {
            self.remove(&entry.id);
            false
        } else {
            self.save(entry);
            true
        }
    }

    /// Drops the whole favorites slot.
    pub fn clear(&self) {
        if let Err(e) = self.store.remove(&self.key) {
            tracing::warn!("Failed to clear favorites: {}", e);
        }
    }
}

impl FavoritesStore<Db> {
    /// Opens the SQLite database at `path`, creating the schema if needed.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, RecipeExplorerError> {
        let db = Db::open(path)?;
        db.init()?;
        Ok(Self::new(db))
    }
}

/// Decodes a stored payload. Anything but a JSON array yields an empty list;
/// array elements that are not valid entries are skipped.
fn parse_entries(raw: &str) -> Vec<FavoriteEntry> {
    match serde_json::from_str::<serde_json::Value>(raw) {
        Ok(serde_json::Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        Ok(_) => {
            tracing::debug!("Favorites payload is not an array, treating as empty");
            Vec::new()
        }
        Err(e) => {
            tracing::debug!("Favorites payload is corrupt ({}), treating as empty", e);
            Vec::new()
        }
    }
}
