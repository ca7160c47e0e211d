use super::*;
use recipe_explorer_lib::mock_recipes;

fn bare_recipe() -> Recipe {
    Recipe {
        id: "9".to_string(),
        title: "Plain Rice".to_string(),
        image: None,
        description: None,
        ingredients: None,
        instructions: None,
    }
}

// -- truncate tests --

#[test]
fn test_truncate_short_text_untouched() {
    assert_eq!(truncate("Short", 10), "Short");
}

#[test]
fn test_truncate_long_text() {
    let out = truncate("abcdefghijklmnop", 10);
    assert_eq!(out, "abcdefg...");
    assert_eq!(out.chars().count(), 10);
}

#[test]
fn test_truncate_multibyte() {
    let out = truncate("Sauté mushrooms in olive oil", 8);
    assert_eq!(out, "Sauté...");
}

// -- row builder tests --

#[test]
fn test_recipe_rows() {
    let rows = build_recipe_rows(&mock_recipes());
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].id, "1");
    assert_eq!(rows[0].title, "Lemon Garlic Salmon");
    assert_eq!(rows[0].ingredients, 6);
    assert_eq!(rows[0].steps, 5);
    assert!(rows[1].description.chars().count() <= DESCRIPTION_WIDTH);
}

#[test]
fn test_recipe_rows_missing_fields() {
    let rows = build_recipe_rows(&[bare_recipe()]);
    assert_eq!(rows[0].description, "");
    assert_eq!(rows[0].ingredients, 0);
    assert_eq!(rows[0].steps, 0);
}

#[test]
fn test_favorite_rows() {
    let entries: Vec<FavoriteEntry> = mock_recipes().iter().map(FavoriteEntry::from).collect();
    let rows = build_favorite_rows(&entries);
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[2].title, "Grilled Chicken Salad");
    assert!(rows[2].image.starts_with("https://"));
}

// -- detail rendering tests --

#[test]
fn test_detail_numbers_steps() {
    let out = render_recipe_detail(&mock_recipes()[2]);
    assert!(out.starts_with("Grilled Chicken Salad\n"));
    assert!(out.contains("  - Cucumber\n"));
    assert!(out.contains("  1. Season and grill chicken, then slice.\n"));
    assert!(out.contains("  3. Top with chicken and drizzle vinaigrette.\n"));
}

#[test]
fn test_detail_placeholders() {
    let out = render_recipe_detail(&bare_recipe());
    assert!(out.contains("No ingredients listed."));
    assert!(out.contains("No instructions provided."));
    assert!(!out.contains("Image:"));
}

#[test]
fn test_markdown_detail() {
    let out = render_recipe_markdown(&mock_recipes()[0]);
    assert!(out.starts_with("# Lemon Garlic Salmon\n"));
    assert!(out.contains("## Ingredients"));
    assert!(out.contains("5. Top with parsley and serve.\n"));
}

#[test]
fn test_recipe_table_has_headers() {
    let rendered = Table::new(build_recipe_rows(&mock_recipes())).to_string();
    let lines: Vec<&str> = rendered.lines().collect();
    assert!(lines.iter().any(|l| l.contains("Title") && l.contains("Steps")));
    assert!(rendered.contains("Creamy Mushroom Pasta"));
}

#[test]
fn test_recipe_csv_headers() {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    for row in build_recipe_rows(&mock_recipes()) {
        wtr.serialize(row).unwrap();
    }
    let data = String::from_utf8(wtr.into_inner().unwrap()).unwrap();
    let first = data.lines().next().unwrap();
    assert_eq!(first, "ID,Title,Description,Ingredients,Steps");
}
