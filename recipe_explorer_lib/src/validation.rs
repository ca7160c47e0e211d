use crate::error::RecipeExplorerError;

pub const MAX_SEARCH_LENGTH: usize = 100;
pub const MAX_ID_LENGTH: usize = 100;
pub const MAX_PAGE_SIZE: i64 = 100;

/// Strip ASCII control characters (0x00-0x1F except space 0x20), trim whitespace,
/// and enforce a byte-length limit. The result may be empty.
pub fn sanitize_text(input: &str, max_len: usize) -> Result<String, RecipeExplorerError> {
    if input.len() > max_len {
        return Err(RecipeExplorerError::InvalidInput(format!(
            "input exceeds maximum length of {} bytes",
            max_len
        )));
    }
    Ok(input
        .chars()
        .filter(|c| !c.is_ascii_control() || *c == ' ')
        .collect::<String>()
        .trim()
        .to_string())
}

/// Validate a search string. An empty result means "no filter".
pub fn validate_search(input: &str) -> Result<String, RecipeExplorerError> {
    sanitize_text(input, MAX_SEARCH_LENGTH)
}

/// Validate a recipe id: trimmed, non-empty, bounded length.
pub fn validate_recipe_id(input: &str) -> Result<String, RecipeExplorerError> {
    let id = sanitize_text(input, MAX_ID_LENGTH)?;
    if id.is_empty() {
        return Err(RecipeExplorerError::InvalidInput(
            "recipe id must not be empty".to_string(),
        ));
    }
    Ok(id)
}

/// Interpret a raw page parameter the lenient way navigation links need:
/// missing, unparseable or non-positive values all mean page 1.
pub fn normalize_page(raw: Option<&str>) -> i64 {
    raw.and_then(|s| s.trim().parse::<i64>().ok())
        .filter(|page| *page >= 1)
        .unwrap_or(1)
}

/// Validate page size (must be 1..=100).
pub fn validate_page_size(page_size: i64) -> Result<i64, RecipeExplorerError> {
    if !(1..=MAX_PAGE_SIZE).contains(&page_size) {
        return Err(RecipeExplorerError::InvalidInput(format!(
            "page_size must be between 1 and {}",
            MAX_PAGE_SIZE
        )));
    }
    Ok(page_size)
}
