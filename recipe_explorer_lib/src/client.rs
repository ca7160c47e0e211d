//! Recipe client that prefers the remote API and falls back to local data.

use recipe_api::types::{PagedRecipes, Recipe};
use recipe_api::{Client, Query, RecipeQuery};
use serde::Serialize;

use crate::config::ApiConfig;
use crate::mock::{FallbackSource, MockDataset};
use crate::search::{normalize_paging, search_recipes};

/// Which provider answered a request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
    /// The configured remote API.
    Remote,
    /// The local fallback dataset.
    Mock,
}

/// A result tagged with the provider that produced it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Sourced<T> {
    pub source: DataSource,
    pub data: T,
}

impl<T> Sourced<T> {
    fn remote(data: T) -> Self {
        Self {
            source: DataSource::Remote,
            data,
        }
    }

    fn mock(data: T) -> Self {
        Self {
            source: DataSource::Mock,
            data,
        }
    }

    pub fn is_mock(&self) -> bool {
        self.source == DataSource::Mock
    }

    pub fn into_inner(self) -> T {
        self.data
    }
}

/// Resolves recipe listings and lookups without ever failing.
///
/// When a remote base URL is configured, every call makes exactly one request
/// to it. An unconfigured base, a transport error, a non-2xx status or an
/// unparseable body all fall through to the fallback dataset, silently from
/// the caller's point of view. The `*_sourced` variants report which provider
/// answered; the plain variants discard that tag.
pub struct RecipeClient {
    remote: Option<Client>,
    fallback: Box<dyn FallbackSource + Send + Sync>,
}

impl Default for RecipeClient {
    fn default() -> Self {
        Self::mock_only()
    }
}

impl RecipeClient {
    /// Creates a client from configuration, using the built-in mock dataset as fallback.
    pub fn new(config: &ApiConfig) -> Self {
        let remote = config
            .base_url
            .as_deref()
            .map(|base| Client::with_base_url(base).with_timeout(config.timeout));
        Self {
            remote,
            fallback: Box::new(MockDataset::default()),
        }
    }

    /// Creates a client that never contacts a remote API.
    pub fn mock_only() -> Self {
        Self::new(&ApiConfig::default())
    }

    /// Creates a client against a specific base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Self {
        Self::new(&ApiConfig::default().with_base_url(base_url))
    }

    /// Replaces the fallback dataset.
    pub fn with_fallback<S>(mut self, fallback: S) -> Self
    where
        S: FallbackSource + Send + Sync + 'static,
    {
        self.fallback = Box::new(fallback);
        self
    }

    /// True when no remote API is configured, so every answer comes from the fallback.
    pub fn is_mock_mode(&self) -> bool {
        self.remote.is_none()
    }

    /// Returns one page of recipes matching `query` (empty means no filter).
    pub async fn list_recipes(&self, query: &str, page: i64, page_size: i64) -> PagedRecipes {
        self.list_recipes_sourced(query, page, page_size)
            .await
            .into_inner()
    }

    /// Like [`list_recipes`](Self::list_recipes), tagged with the provider that answered.
    pub async fn list_recipes_sourced(
        &self,
        query: &str,
        page: i64,
        page_size: i64,
    ) -> Sourced<PagedRecipes> {
        let (page, page_size) = normalize_paging(page, page_size);

        if let Some(remote) = &self.remote {
            let api_query = RecipeQuery::default()
                .with_search(query)
                .with_page(page)
                .with_page_size(page_size);
            match remote.list_recipes(&api_query).await {
                Ok(resp) => return Sourced::remote(resp),
                Err(e) => {
                    tracing::warn!("Recipe listing unavailable ({}), serving fallback data", e)
                }
            }
        } else {
            tracing::debug!("No recipe API configured, serving fallback data");
        }

        Sourced::mock(search_recipes(
            self.fallback.recipes(),
            query,
            page,
            page_size,
        ))
    }

    /// Looks up a recipe by id. `None` means neither provider knows it.
    pub async fn get_recipe_by_id(&self, id: &str) -> Option<Recipe> {
        self.get_recipe_by_id_sourced(id).await.into_inner()
    }

    /// Like [`get_recipe_by_id`](Self::get_recipe_by_id), tagged with the provider that answered.
    pub async fn get_recipe_by_id_sourced(&self, id: &str) -> Sourced<Option<Recipe>> {
        if let Some(remote) = &self.remote {
            match remote.get_recipe(id).await {
                Ok(recipe) => return Sourced::remote(Some(recipe)),
                Err(e) if e.is_not_found() => {
                    tracing::debug!("Recipe {} not found remotely, checking fallback data", id)
                }
                Err(e) => {
                    tracing::warn!("Recipe {} unavailable ({}), checking fallback data", id, e)
                }
            }
        }

        Sourced::mock(self.fallback.find(id).cloned())
    }
}
