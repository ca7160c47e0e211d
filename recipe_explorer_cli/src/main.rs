mod commands;
mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use recipe_explorer_lib::{ApiConfig, FavoritesStore, RecipeClient};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "recipe-explorer")]
#[command(about = "Browse, search, and save recipes")]
struct Cli {
    /// Output format: table, json, csv, or markdown
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// SQLite database holding favorites
    #[arg(long, default_value = "recipe-explorer.db", global = true)]
    db: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List or search recipes
    Recipes(commands::recipes::RecipesArgs),
    /// Show a single recipe
    Recipe(commands::recipe::RecipeArgs),
    /// Manage saved favorites
    Favorites(commands::favorites::FavoritesArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Loaded before the subscriber so `.env` can set RUST_LOG.
    let dotenv = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("recipe_explorer=info".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Some(e) = dotenv_problem(&dotenv) {
        tracing::debug!("Ignoring unreadable .env file: {}", e);
    }

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        "csv" => OutputFormat::Csv,
        "markdown" | "md" => OutputFormat::Markdown,
        _ => OutputFormat::Table,
    };

    let client = RecipeClient::new(&ApiConfig::from_env());

    match &cli.command {
        Commands::Recipes(args) => commands::recipes::run(args, &client, &format).await?,
        Commands::Recipe(args) => commands::recipe::run(args, &client, &format).await?,
        Commands::Favorites(args) => {
            let favorites = FavoritesStore::open(&cli.db)?;
            commands::favorites::run(args, &client, &favorites, &format).await?
        }
    }

    Ok(())
}

/// A `.env` load failure worth reporting. A missing file is the normal case.
fn dotenv_problem(result: &Result<PathBuf, dotenvy::Error>) -> Option<&dotenvy::Error> {
    match result {
        Err(e) if !e.not_found() => Some(e),
        _ => None,
    }
}
