//! CLI subcommand implementations.

pub mod favorites;
pub mod recipe;
pub mod recipes;
