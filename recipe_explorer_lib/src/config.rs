//! Remote API configuration read from the environment.

use std::time::Duration;

/// Primary variable naming the remote API base address.
pub const API_BASE_VAR: &str = "RECIPE_API_BASE";
/// Secondary variable consulted when [`API_BASE_VAR`] is unset or blank.
pub const BACKEND_URL_VAR: &str = "RECIPE_BACKEND_URL";
/// Per-request timeout in whole seconds.
pub const TIMEOUT_VAR: &str = "RECIPE_API_TIMEOUT_SECS";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Where (and whether) to reach the remote recipe API.
///
/// `base_url == None` is a supported state: the recipe client then serves
/// everything from its fallback dataset.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: Option<String>,
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ApiConfig {
    /// Reads the configuration from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = [API_BASE_VAR, BACKEND_URL_VAR]
            .iter()
            .filter_map(|key| lookup(*key))
            .map(|val| val.trim().to_string())
            .find(|val| !val.is_empty());
        let timeout_secs = lookup(TIMEOUT_VAR)
            .and_then(|val| val.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        Self {
            base_url,
            timeout: Duration::from_secs(timeout_secs),
        }
    }

    /// Sets the base address explicitly. Blank strings mean "unconfigured".
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        let trimmed = base_url.trim();
        self.base_url = (!trimmed.is_empty()).then(|| trimmed.to_string());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn is_configured(&self) -> bool {
        self.base_url.is_some()
    }
}
