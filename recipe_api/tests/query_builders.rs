use recipe_api::{Query, RecipeQuery, DEFAULT_PAGE_SIZE};
use url::Url;

fn base_url() -> Url {
    Url::parse("https://example.com/recipes").unwrap()
}

#[test]
fn recipe_query_defaults() {
    let query = RecipeQuery::default();
    assert_eq!(query.common.page, 1);
    assert_eq!(query.common.page_size, DEFAULT_PAGE_SIZE);

    let url = query.add_to_url(&base_url());
    let qs = url.query().unwrap();
    assert!(qs.contains("page=1"));
    assert!(qs.contains("pageSize=9"));
    assert!(!qs.contains("q="));
}

#[test]
fn recipe_query_encodes_search() {
    let url = RecipeQuery::default()
        .with_search("mac & cheese")
        .add_to_url(&base_url());
    let qs = url.query().unwrap();
    assert!(qs.contains("q=mac+%26+cheese"));
}

#[test]
fn recipe_query_pagination() {
    let url = RecipeQuery::default()
        .with_page(4)
        .with_page_size(12)
        .add_to_url(&base_url());
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    assert_eq!(
        pairs,
        vec![
            ("page".to_string(), "4".to_string()),
            ("pageSize".to_string(), "12".to_string()),
        ]
    );
}
