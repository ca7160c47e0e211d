mod meta;
pub use self::meta::PagedRecipes;

mod recipe;
pub use self::recipe::{Recipe, RecipeID};
