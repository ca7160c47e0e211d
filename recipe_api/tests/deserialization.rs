use recipe_api::types::{PagedRecipes, Recipe};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[test]
fn deserialize_recipes_page() {
    let json = load_fixture("recipes.json");
    let resp: PagedRecipes = serde_json::from_str(&json).unwrap();
    assert_eq!(resp.items.len(), 2);
    assert_eq!(resp.total, 14);
    assert_eq!(resp.page, 2);
    assert_eq!(resp.page_size, 2);

    let shakshuka = &resp.items[0];
    assert_eq!(shakshuka.id, "101");
    assert_eq!(
        shakshuka.image.as_deref(),
        Some("https://images.example.com/shakshuka.jpg")
    );
    assert_eq!(shakshuka.ingredients().len(), 4);
    assert_eq!(shakshuka.instructions()[0], "Soften the pepper in olive oil.");

    let miso = &resp.items[1];
    assert_eq!(miso.title, "Miso Soup");
    assert!(miso.image.is_none());
    assert!(miso.description.is_none());
    assert!(miso.ingredients().is_empty());
    assert!(miso.instructions().is_empty());
}

#[test]
fn deserialize_recipes_empty() {
    let json = load_fixture("recipes_empty.json");
    let resp: PagedRecipes = serde_json::from_str(&json).unwrap();
    assert!(resp.items.is_empty());
    assert_eq!(resp.total, 0);
}

#[test]
fn deserialize_recipe_ignores_unknown_fields() {
    let json = load_fixture("recipe.json");
    let recipe: Recipe = serde_json::from_str(&json).unwrap();
    assert_eq!(recipe.id, "101");
    assert_eq!(recipe.instructions().len(), 3);
}

#[test]
fn recipe_without_title_is_rejected() {
    let result = serde_json::from_str::<Recipe>(r#"{"id":"1"}"#);
    assert!(result.is_err());
}

#[test]
fn serialize_omits_missing_fields() {
    let recipe = Recipe {
        id: "7".to_string(),
        title: "Toast".to_string(),
        image: None,
        description: None,
        ingredients: None,
        instructions: None,
    };
    let json = serde_json::to_value(&recipe).unwrap();
    assert_eq!(json, serde_json::json!({"id": "7", "title": "Toast"}));
}

#[test]
fn serialize_page_uses_camel_case() {
    let page = PagedRecipes {
        items: Vec::new(),
        total: 0,
        page: 1,
        page_size: 9,
    };
    let json = serde_json::to_value(&page).unwrap();
    assert_eq!(json["pageSize"], 9);
    assert_eq!(json["page"], 1);
}
