use serde::{Deserialize, Serialize};

use super::Recipe;

/// One page of recipes plus the total number of matches across all pages.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PagedRecipes {
    pub items: Vec<Recipe>,
    /// Matches across all pages, not the number of pages.
    pub total: i64,
    /// 1-based page number.
    pub page: i64,
    pub page_size: i64,
}
