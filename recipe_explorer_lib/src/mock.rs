//! Fallback data providers used when the remote API cannot answer.

use recipe_api::types::Recipe;

/// A static set of recipes to serve when the remote API is unconfigured or failing.
///
/// Search and pagination are applied on top of whatever the provider returns,
/// so tests can swap in deterministic fixtures without touching that logic.
pub trait FallbackSource {
    /// All recipes known to this provider, in display order.
    fn recipes(&self) -> &[Recipe];

    /// Looks up a recipe by exact id.
    fn find(&self, id: &str) -> Option<&Recipe> {
        self.recipes().iter().find(|r| r.id == id)
    }
}

impl FallbackSource for Vec<Recipe> {
    fn recipes(&self) -> &[Recipe] {
        self
    }
}

/// The built-in demo dataset.
#[derive(Clone, Debug)]
pub struct MockDataset {
    recipes: Vec<Recipe>,
}

impl Default for MockDataset {
    fn default() -> Self {
        Self {
            recipes: mock_recipes(),
        }
    }
}

impl FallbackSource for MockDataset {
    fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Returns the demo recipes served in mock mode.
pub fn mock_recipes() -> Vec<Recipe> {
    vec![
        Recipe {
            id: "1".to_string(),
            title: "Lemon Garlic Salmon".to_string(),
            image: Some(
                "https://images.unsplash.com/photo-1504674900247-0877df9cc836?q=80&w=1200&auto=format&fit=crop"
                    .to_string(),
            ),
            description: Some(
                "Succulent salmon fillets with a bright lemon garlic butter sauce.".to_string(),
            ),
            ingredients: Some(strings(&[
                "2 salmon fillets",
                "2 tbsp butter",
                "2 cloves garlic, minced",
                "1 lemon (zest & juice)",
                "Salt & pepper",
                "Fresh parsley",
            ])),
            instructions: Some(strings(&[
                "Season salmon with salt and pepper.",
                "Sear salmon in butter until golden.",
                "Add garlic, cook briefly.",
                "Add lemon juice & zest, baste the salmon.",
                "Top with parsley and serve.",
            ])),
        },
        Recipe {
            id: "2".to_string(),
            title: "Creamy Mushroom Pasta".to_string(),
            image: Some(
                "https://images.unsplash.com/photo-1523986371872-9d3ba2e2f642?q=80&w=1200&auto=format&fit=crop"
                    .to_string(),
            ),
            description: Some(
                "Al dente pasta tossed in a creamy garlic mushroom sauce with parmesan."
                    .to_string(),
            ),
            ingredients: Some(strings(&[
                "200g pasta",
                "250g mushrooms, sliced",
                "2 cloves garlic, minced",
                "1 cup cream",
                "1/2 cup parmesan, grated",
                "Olive oil, salt & pepper",
            ])),
            instructions: Some(strings(&[
                "Cook pasta until al dente.",
                "Sauté mushrooms in olive oil until golden.",
                "Add garlic, cook until fragrant.",
                "Stir in cream and simmer.",
                "Toss with pasta and parmesan.",
            ])),
        },
        Recipe {
            id: "3".to_string(),
            title: "Grilled Chicken Salad".to_string(),
            image: Some(
                "https://images.unsplash.com/photo-1550547660-d9450f859349?q=80&w=1200&auto=format&fit=crop"
                    .to_string(),
            ),
            description: Some(
                "Fresh greens topped with juicy grilled chicken and a tangy vinaigrette."
                    .to_string(),
            ),
            ingredients: Some(strings(&[
                "2 chicken breasts",
                "Mixed greens",
                "Cherry tomatoes",
                "Cucumber",
                "Red onion",
                "Vinaigrette",
            ])),
            instructions: Some(strings(&[
                "Season and grill chicken, then slice.",
                "Assemble greens and vegetables.",
                "Top with chicken and drizzle vinaigrette.",
            ])),
        },
    ]
}
