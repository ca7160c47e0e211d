//! Library layer for Recipe Explorer: fallback-aware recipe client, mock
//! dataset, favorites persistence, and input validation.
//!
//! Wraps the `recipe_api` crate so that callers always get data back: when the
//! remote API is unconfigured or misbehaves, listings and lookups are served
//! from an in-process fallback dataset instead.

pub mod client;
pub mod config;
pub mod db;
pub mod error;
pub mod favorites;
pub mod mock;
pub mod pagination;
pub mod search;
pub mod storage;
pub mod validation;

pub use recipe_api;
pub use recipe_api::types;
pub use recipe_api::{Query, RecipeQuery, DEFAULT_PAGE_SIZE};

pub use client::{DataSource, RecipeClient, Sourced};
pub use config::ApiConfig;
pub use db::{Db, DbError};
pub use error::RecipeExplorerError;
pub use favorites::{FavoriteEntry, FavoritesStore, FAVORITES_KEY};
pub use mock::{mock_recipes, FallbackSource, MockDataset};
pub use pagination::PageInfo;
pub use storage::{KeyValueStore, MemoryStore};
