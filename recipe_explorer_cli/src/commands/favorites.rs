//! The `favorites` subcommand: list and edit locally saved recipes.

use anyhow::{bail, Result};
use clap::{Args, Subcommand};
use recipe_explorer_lib::{
    validation, FavoriteEntry, FavoritesStore, KeyValueStore, RecipeClient,
};
use serde_json::json;

use crate::output::{
    print_favorites_csv, print_favorites_markdown, print_favorites_table, print_json,
    OutputFormat,
};

#[derive(Args)]
pub struct FavoritesArgs {
    #[command(subcommand)]
    pub action: FavoritesAction,
}

#[derive(Subcommand)]
pub enum FavoritesAction {
    /// List saved recipes
    List,
    /// Save a recipe by id
    Add { id: String },
    /// Remove a saved recipe by id
    Remove { id: String },
    /// Report whether a recipe is saved
    Check { id: String },
    /// Save the recipe if it is not saved, remove it otherwise
    Toggle { id: String },
    /// Remove every saved recipe
    Clear,
}

pub async fn run<S: KeyValueStore>(
    args: &FavoritesArgs,
    client: &RecipeClient,
    favorites: &FavoritesStore<S>,
    format: &OutputFormat,
) -> Result<()> {
    match &args.action {
        FavoritesAction::List => {
            let entries = favorites.get_all();
            if entries.is_empty() && !matches!(format, OutputFormat::Json) {
                eprintln!("You don't have any favorites yet. Browse with `recipe-explorer recipes` and save some you like.");
                return Ok(());
            }
            match format {
                OutputFormat::Table => print_favorites_table(&entries),
                OutputFormat::Json => print_json(&entries),
                OutputFormat::Csv => print_favorites_csv(&entries)?,
                OutputFormat::Markdown => print_favorites_markdown(&entries),
            }
        }
        FavoritesAction::Add { id } => {
            let id = validation::validate_recipe_id(id)?;
            if favorites.contains(&id) {
                eprintln!("Already saved: {}", id);
            } else {
                let entry = lookup_entry(client, &id).await?;
                favorites.save(&entry);
                eprintln!("Saved: {}", entry.title);
            }
        }
        FavoritesAction::Remove { id } => {
            let id = validation::validate_recipe_id(id)?;
            if favorites.contains(&id) {
                favorites.remove(&id);
                eprintln!("Removed: {}", id);
            } else {
                eprintln!("Not in favorites: {}", id);
            }
        }
        FavoritesAction::Check { id } => {
            let id = validation::validate_recipe_id(id)?;
            let saved = favorites.contains(&id);
            match format {
                OutputFormat::Json => print_json(&json!({ "id": id, "saved": saved })),
                _ => println!("{}", if saved { "Saved" } else { "Not saved" }),
            }
        }
        FavoritesAction::Toggle { id } => {
            let id = validation::validate_recipe_id(id)?;
            // A saved entry is removed as stored, even if the recipe is gone upstream.
            let entry = match favorites.get_all().into_iter().find(|e| e.id == id) {
                Some(saved) => saved,
                None => lookup_entry(client, &id).await?,
            };
            let saved = favorites.toggle(&entry);
            eprintln!("{}: {}", if saved { "Saved" } else { "Removed" }, entry.title);
        }
        FavoritesAction::Clear => {
            favorites.clear();
            eprintln!("Cleared favorites");
        }
    }

    Ok(())
}

/// Resolves `id` through the recipe client and projects it to a favorite entry.
///
/// The entry must carry the requested id, otherwise it could never be removed by it.
async fn lookup_entry(client: &RecipeClient, id: &str) -> Result<FavoriteEntry> {
    let Some(recipe) = client.get_recipe_by_id(id).await else {
        bail!("Recipe not found: {}", id);
    };
    if recipe.id != id {
        bail!("Recipe API returned id {} for requested id {}", recipe.id, id);
    }
    Ok(FavoriteEntry::from(&recipe))
}
