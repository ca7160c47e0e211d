use anyhow::Result;
use clap::Args;
use recipe_explorer_lib::config::{API_BASE_VAR, BACKEND_URL_VAR};
use recipe_explorer_lib::{validation, PageInfo, RecipeClient, DEFAULT_PAGE_SIZE};

use crate::output::{
    print_json, print_recipes_csv, print_recipes_markdown, print_recipes_table, OutputFormat,
};

#[derive(Args)]
pub struct RecipesArgs {
    /// Search by ingredient, dish, or cuisine (matches title and description)
    #[arg(long, short = 'q')]
    pub search: Option<String>,

    /// Page number; anything that is not a positive integer means page 1
    #[arg(long)]
    pub page: Option<String>,

    /// Results per page
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
    pub page_size: i64,
}

pub async fn run(args: &RecipesArgs, client: &RecipeClient, format: &OutputFormat) -> Result<()> {
    let search = match &args.search {
        Some(search) => validation::validate_search(search)?,
        None => String::new(),
    };
    let page = validation::normalize_page(args.page.as_deref());
    let page_size = validation::validate_page_size(args.page_size)?;

    let result = client.list_recipes_sourced(&search, page, page_size).await;
    let info = PageInfo::from(&result.data);

    if client.is_mock_mode() {
        eprintln!(
            "Using mock data. Set {} or {} to enable the live API.",
            API_BASE_VAR, BACKEND_URL_VAR
        );
    } else if result.is_mock() {
        eprintln!("Recipe API unavailable, showing built-in recipes.");
    }

    eprintln!(
        "Page {} of {} ({} total recipes)",
        info.page, info.total_pages, info.total
    );

    let recipes = &result.data.items;
    match format {
        OutputFormat::Table => print_recipes_table(recipes),
        OutputFormat::Json => print_json(&result.data),
        OutputFormat::Csv => print_recipes_csv(recipes)?,
        OutputFormat::Markdown => print_recipes_markdown(recipes),
    }

    if info.is_paginated() && matches!(format, OutputFormat::Table | OutputFormat::Markdown) {
        let mut hints = Vec::new();
        if info.has_previous() {
            hints.push(format!("previous: --page {}", info.previous));
        }
        if info.has_next() {
            hints.push(format!("next: --page {}", info.next));
        }
        eprintln!("{}", hints.join(", "));
    }

    Ok(())
}
