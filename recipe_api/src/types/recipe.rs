//! Recipe records served by the `/recipes` endpoints.

use serde::{Deserialize, Serialize};

/// Stable string identifier for a recipe.
pub type RecipeID = String;

/// Full recipe record.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Recipe {
    /// Unique, stable recipe identifier.
    pub id: RecipeID,

    pub title: String,

    /// Absolute image URL, if the recipe has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<Vec<String>>,

    /// Preparation steps, in order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<Vec<String>>,
}

impl Recipe {
    /// Ingredients, or an empty slice when none are listed.
    pub fn ingredients(&self) -> &[String] {
        self.ingredients.as_deref().unwrap_or_default()
    }

    /// Instructions, or an empty slice when none are provided.
    pub fn instructions(&self) -> &[String] {
        self.instructions.as_deref().unwrap_or_default()
    }
}
