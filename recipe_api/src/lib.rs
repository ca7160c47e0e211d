//! Typed HTTP client for the Recipe Explorer REST API.

mod client;
mod errors;
mod query;
pub mod types;
pub use self::client::Client;
pub use self::errors::Error;
pub use self::query::{Query, QueryCommon, RecipeQuery, DEFAULT_PAGE_SIZE};
