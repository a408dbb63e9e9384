//! Tests for deck actions.

mod common;

use common::{client_for, mock_json, setup_mock_server};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, Request};

#[tokio::test]
async fn test_list_decks() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/decks"))
        .respond_with(mock_json(serde_json::json!({
            "docs": [
                {"id": "d1", "name": "Japanese"},
                {"id": "d2", "name": "Chemistry", "archived?": true}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let page = client.decks().list(None).await.unwrap();

    assert_eq!(page.docs.len(), 2);
    assert_eq!(page.docs[0].id, "d1");
    assert_eq!(page.docs[1].name, "Chemistry");
    assert!(page.docs[1].archived);
    assert!(!page.has_more());
}

#[tokio::test]
async fn test_list_decks_without_bookmark_sends_no_query() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/decks"))
        .and(|req: &Request| req.url.query().is_none())
        .respond_with(mock_json(serde_json::json!({"docs": []})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let page = client.decks().list(None).await.unwrap();
    assert!(page.docs.is_empty());
}

#[tokio::test]
async fn test_list_decks_with_bookmark() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/decks"))
        .and(query_param("bookmark", "g1AAAA+x/y="))
        .respond_with(mock_json(serde_json::json!({
            "docs": [{"id": "d3", "name": "Third"}],
            "bookmark": "b3"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let page = client.decks().list(Some("g1AAAA+x/y=")).await.unwrap();

    assert_eq!(page.docs[0].id, "d3");
    assert_eq!(page.next_bookmark(), Some("b3"));
}
