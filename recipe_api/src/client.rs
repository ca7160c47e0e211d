//! HTTP client for the Recipe Explorer REST API.

use std::time::Duration;

use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    query::{Query, RecipeQuery},
    types::{PagedRecipes, Recipe},
    Error,
};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the Recipe Explorer REST API.
///
/// Each request builds a fresh `reqwest::Client` with the configured timeout
/// (30 seconds unless overridden). Failures are reported as [`Error`]; deciding
/// what to do about them is left to the caller.
#[derive(Clone, Debug)]
pub struct Client {
    /// Base URL for the API, without trailing slashes.
    base_api_url: String,
    timeout: Duration,
}

impl Client {
    /// Creates a client for the API rooted at `base_url`, e.g. `https://api.example.com/v1`.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_api_url: base_url.trim().trim_end_matches('/').to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Overrides the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Builds `{base}/{segments...}`, percent-escaping each segment.
    fn get_url(&self, segments: &[&str]) -> Result<Url, Error> {
        let mut url = Url::parse(&self.base_api_url).map_err(|e| {
            tracing::error!("Invalid base URL {:?}: {}", self.base_api_url, e);
            Error::InvalidBaseUrl(self.base_api_url.clone())
        })?;
        url.path_segments_mut()
            .map_err(|_| {
                tracing::error!("Base URL cannot carry a path: {}", self.base_api_url);
                Error::InvalidBaseUrl(self.base_api_url.clone())
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get<T>(&self, url: Url) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::RequestFailed
            })?;
        let resp = client
            .get(url)
            .header("content-type", "application/json")
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to get resource: {}", e);
                Error::RequestFailed
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::RequestFailed
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("Request failed with status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        let parsed = serde_json::from_str::<T>(&body).map_err(|e| {
            let snippet = truncate_body(&body);
            tracing::error!("Failed to parse resource: {} | body: {}", e, snippet);
            Error::RequestFailed
        })?;

        Ok(parsed)
    }

    /// Fetches one page of recipes matching the given query.
    ///
    /// The server is trusted to have applied the search and pagination.
    pub async fn list_recipes(&self, query: &RecipeQuery) -> Result<PagedRecipes, Error> {
        let url = query.add_to_url(&self.get_url(&["recipes"])?);
        self.get::<PagedRecipes>(url).await
    }

    /// Fetches a single recipe by its identifier.
    pub async fn get_recipe(&self, id: &str) -> Result<Recipe, Error> {
        let url = self.get_url(&["recipes", id])?;
        self.get::<Recipe>(url).await
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}
