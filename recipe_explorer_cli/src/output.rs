use anyhow::Result;
use recipe_explorer_lib::types::Recipe;
use recipe_explorer_lib::FavoriteEntry;
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
}

const DESCRIPTION_WIDTH: usize = 60;

#[derive(Tabled, Serialize)]
struct RecipeRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: String,
    #[tabled(rename = "Title")]
    #[serde(rename = "Title")]
    title: String,
    #[tabled(rename = "Description")]
    #[serde(rename = "Description")]
    description: String,
    #[tabled(rename = "Ingredients")]
    #[serde(rename = "Ingredients")]
    ingredients: usize,
    #[tabled(rename = "Steps")]
    #[serde(rename = "Steps")]
    steps: usize,
}

#[derive(Tabled, Serialize)]
struct FavoriteRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: String,
    #[tabled(rename = "Title")]
    #[serde(rename = "Title")]
    title: String,
    #[tabled(rename = "Description")]
    #[serde(rename = "Description")]
    description: String,
    #[tabled(rename = "Image")]
    #[serde(rename = "Image")]
    image: String,
}

// -- Row builders --

fn build_recipe_rows(recipes: &[Recipe]) -> Vec<RecipeRow> {
    recipes
        .iter()
        .map(|r| RecipeRow {
            id: r.id.clone(),
            title: r.title.clone(),
            description: truncate(r.description.as_deref().unwrap_or_default(), DESCRIPTION_WIDTH),
            ingredients: r.ingredients().len(),
            steps: r.instructions().len(),
        })
        .collect()
}

fn build_favorite_rows(entries: &[FavoriteEntry]) -> Vec<FavoriteRow> {
    entries
        .iter()
        .map(|e| FavoriteRow {
            id: e.id.clone(),
            title: e.title.clone(),
            description: truncate(e.description.as_deref().unwrap_or_default(), DESCRIPTION_WIDTH),
            image: e.image.clone().unwrap_or_default(),
        })
        .collect()
}

// -- Table output --

pub fn print_recipes_table(recipes: &[Recipe]) {
    println!("{}", Table::new(build_recipe_rows(recipes)));
}

pub fn print_favorites_table(entries: &[FavoriteEntry]) {
    println!("{}", Table::new(build_favorite_rows(entries)));
}

// -- Markdown output --

pub fn print_recipes_markdown(recipes: &[Recipe]) {
    let mut table = Table::new(build_recipe_rows(recipes));
    table.with(Style::markdown());
    println!("{}", table);
}

pub fn print_favorites_markdown(entries: &[FavoriteEntry]) {
    let mut table = Table::new(build_favorite_rows(entries));
    table.with(Style::markdown());
    println!("{}", table);
}

// -- CSV output --

pub fn print_recipes_csv(recipes: &[Recipe]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for row in build_recipe_rows(recipes) {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn print_favorites_csv(entries: &[FavoriteEntry]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for row in build_favorite_rows(entries) {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

// -- Detail output --

fn render_recipe_detail(recipe: &Recipe) -> String {
    let mut out = String::new();
    out.push_str(&recipe.title);
    out.push('\n');
    if let Some(description) = &recipe.description {
        out.push_str(description);
        out.push('\n');
    }
    if let Some(image) = &recipe.image {
        out.push_str(&format!("Image: {}\n", image));
    }

    out.push_str("\nIngredients\n");
    if recipe.ingredients().is_empty() {
        out.push_str("  No ingredients listed.\n");
    } else {
        for ingredient in recipe.ingredients() {
            out.push_str(&format!("  - {}\n", ingredient));
        }
    }

    out.push_str("\nInstructions\n");
    if recipe.instructions().is_empty() {
        out.push_str("  No instructions provided.\n");
    } else {
        for (i, step) in recipe.instructions().iter().enumerate() {
            out.push_str(&format!("  {}. {}\n", i + 1, step));
        }
    }
    out
}

fn render_recipe_markdown(recipe: &Recipe) -> String {
    let mut out = format!("# {}\n\n", recipe.title);
    if let Some(description) = &recipe.description {
        out.push_str(&format!("{}\n\n", description));
    }
    if let Some(image) = &recipe.image {
        out.push_str(&format!("![{}]({})\n\n", recipe.title, image));
    }

    out.push_str("## Ingredients\n\n");
    if recipe.ingredients().is_empty() {
        out.push_str("No ingredients listed.\n");
    } else {
        for ingredient in recipe.ingredients() {
            out.push_str(&format!("- {}\n", ingredient));
        }
    }

    out.push_str("\n## Instructions\n\n");
    if recipe.instructions().is_empty() {
        out.push_str("No instructions provided.\n");
    } else {
        for (i, step) in recipe.instructions().iter().enumerate() {
            out.push_str(&format!("{}. {}\n", i + 1, step));
        }
    }
    out
}

pub fn print_recipe_detail(recipe: &Recipe) {
    print!("{}", render_recipe_detail(recipe));
}

pub fn print_recipe_markdown(recipe: &Recipe) {
    print!("{}", render_recipe_markdown(recipe));
}

// -- JSON output --

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", cut.trim_end())
    }
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
