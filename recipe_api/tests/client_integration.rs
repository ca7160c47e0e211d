use recipe_api::{Client, Error, Query, RecipeQuery};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[tokio::test]
async fn list_recipes_success() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("recipes.json");

    Mock::given(method("GET"))
        .and(path("/recipes"))
        .and(query_param("q", "egg"))
        .and(query_param("page", "2"))
        .and(query_param("pageSize", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let query = RecipeQuery::default()
        .with_search("egg")
        .with_page(2)
        .with_page_size(2);
    let result = client.list_recipes(&query).await;
    assert!(result.is_ok());

    let resp = result.unwrap();
    assert_eq!(resp.items.len(), 2);
    assert_eq!(resp.items[0].id, "101");
    assert_eq!(resp.total, 14);
    assert_eq!(resp.page, 2);
    assert_eq!(resp.page_size, 2);
}

#[tokio::test]
async fn list_recipes_under_base_path() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("recipes_empty.json");

    Mock::given(method("GET"))
        .and(path("/api/recipes"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&format!("{}/api//", mock_server.uri()));
    let resp = client.list_recipes(&RecipeQuery::default()).await.unwrap();
    assert!(resp.items.is_empty());
    assert_eq!(resp.total, 0);
}

#[tokio::test]
async fn list_recipes_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/recipes"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let result = client.list_recipes(&RecipeQuery::default()).await;
    match result {
        Err(Error::HttpStatus { status, body }) => {
            assert_eq!(status, 500);
            assert_eq!(body, "Internal Server Error");
        }
        _ => panic!("expected HttpStatus error"),
    }
}

#[tokio::test]
async fn list_recipes_malformed_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/recipes"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not valid json}"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let result = client.list_recipes(&RecipeQuery::default()).await;
    assert!(matches!(result, Err(Error::RequestFailed)));
}

#[tokio::test]
async fn list_recipes_wrong_shape() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/recipes"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"[{"id":"1","title":"x"}]"#))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let result = client.list_recipes(&RecipeQuery::default()).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn get_recipe_success() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("recipe.json");

    Mock::given(method("GET"))
        .and(path("/recipes/101"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let recipe = client.get_recipe("101").await.unwrap();
    assert_eq!(recipe.title, "Shakshuka");
    assert_eq!(recipe.instructions().len(), 3);
}

#[tokio::test]
async fn get_recipe_escapes_id() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("recipe.json");

    Mock::given(method("GET"))
        .and(path("/recipes/green%20curry"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    assert!(client.get_recipe("green curry").await.is_ok());
}

#[tokio::test]
async fn get_recipe_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/recipes/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let err = client.get_recipe("missing").await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn unreachable_server_is_request_failure() {
    let client = Client::with_base_url("http://127.0.0.1:1");
    let result = client.get_recipe("1").await;
    assert!(matches!(result, Err(Error::RequestFailed)));
}
