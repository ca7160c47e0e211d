//! In-process search and pagination over a fallback dataset.

use recipe_api::types::{PagedRecipes, Recipe};
use recipe_api::DEFAULT_PAGE_SIZE;

/// True when `query` is empty, or occurs case-insensitively in the recipe's
/// title or description. A missing description never matches a non-empty query.
pub fn matches_query(recipe: &Recipe, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    recipe.title.to_lowercase().contains(&needle)
        || recipe
            .description
            .as_deref()
            .unwrap_or_default()
            .to_lowercase()
            .contains(&needle)
}

/// Clamps paging inputs into range: `page < 1` becomes 1, `page_size < 1`
/// becomes [`DEFAULT_PAGE_SIZE`].
pub fn normalize_paging(page: i64, page_size: i64) -> (i64, i64) {
    let page = page.max(1);
    let page_size = if page_size < 1 {
        DEFAULT_PAGE_SIZE
    } else {
        page_size
    };
    (page, page_size)
}

/// Filters `recipes` by `query`, then cuts out page `page` of size `page_size`.
///
/// `total` is the number of matches before pagination.
pub fn search_recipes(recipes: &[Recipe], query: &str, page: i64, page_size: i64) -> PagedRecipes {
    let (page, page_size) = normalize_paging(page, page_size);
    let filtered: Vec<&Recipe> = recipes.iter().filter(|r| matches_query(r, query)).collect();

    let start = usize::try_from((page - 1).saturating_mul(page_size)).unwrap_or(usize::MAX);
    let take = usize::try_from(page_size).unwrap_or(usize::MAX);
    let items = filtered
        .iter()
        .skip(start)
        .take(take)
        .map(|r| (*r).clone())
        .collect();

    PagedRecipes {
        items,
        total: filtered.len() as i64,
        page,
        page_size,
    }
}
