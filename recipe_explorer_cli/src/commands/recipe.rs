use anyhow::{bail, Result};
use clap::Args;
use recipe_explorer_lib::{validation, RecipeClient};

use crate::output::{
    print_json, print_recipe_detail, print_recipe_markdown, print_recipes_csv, OutputFormat,
};

#[derive(Args)]
pub struct RecipeArgs {
    /// Recipe id
    pub id: String,
}

pub async fn run(args: &RecipeArgs, client: &RecipeClient, format: &OutputFormat) -> Result<()> {
    let id = validation::validate_recipe_id(&args.id)?;

    let Some(recipe) = client.get_recipe_by_id(&id).await else {
        bail!("Recipe not found: {}", id);
    };

    match format {
        OutputFormat::Table => print_recipe_detail(&recipe),
        OutputFormat::Json => print_json(&recipe),
        OutputFormat::Csv => print_recipes_csv(std::slice::from_ref(&recipe))?,
        OutputFormat::Markdown => print_recipe_markdown(&recipe),
    }

    Ok(())
}
