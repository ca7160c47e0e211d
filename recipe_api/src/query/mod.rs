mod common;
pub use self::common::{Query, QueryCommon, DEFAULT_PAGE_SIZE};

mod recipe;
pub use self::recipe::RecipeQuery;
