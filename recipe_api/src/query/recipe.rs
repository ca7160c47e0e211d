use url::Url;

use super::{common::QueryCommon, Query};

/// Query for the `/recipes` listing endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecipeQuery {
    pub common: QueryCommon,
    /// Free-text search. Empty or `None` means no filter and is not sent.
    pub search: Option<String>,
}

impl Query for RecipeQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }

    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        if let Some(search) = self.search_term() {
            url.query_pairs_mut().append_pair("q", search);
        };
        self.common.add_to_url(&url)
    }
}

impl RecipeQuery {
    pub fn with_search(mut self, search: &str) -> Self {
        self.search = Some(search.to_string());
        self
    }

    /// The search term, if one is set and non-empty.
    pub fn search_term(&self) -> Option<&str> {
        self.search.as_deref().filter(|s| !s.is_empty())
    }
}
