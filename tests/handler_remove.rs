mod common;

use infinity_shortener::domain::repositories::UrlRepository;
use serde_json::{Value, json};

#[tokio::test]
async fn test_remove_existing_alias() {
    let (server, repo) = common::create_memory_server();
    repo.save_url("https://www.google.com/", "test_alias")
        .await
        .unwrap();

    let response = server.delete("/url/test_alias").await;

    assert_eq!(response.status_code(), 204);
    assert!(response.as_bytes().is_empty());
    assert!(repo.is_empty());
}

#[tokio::test]
async fn test_remove_twice() {
    let (server, repo) = common::create_memory_server();
    repo.save_url("https://www.google.com/", "test_alias")
        .await
        .unwrap();

    let first = server.delete("/test_alias").await;
    assert_eq!(first.status_code(), 204);

    let second = server.delete("/test_alias").await;
    second.assert_status_not_found();
    assert_eq!(
        second.json::<Value>(),
        json!({ "status": "Error", "error": "not found" })
    );
}

#[tokio::test]
async fn test_remove_non_existent_alias() {
    let (server, _repo) = common::create_memory_server();

    let response = server.delete("/url/non_existent_alias").await;

    response.assert_status_not_found();
    assert_eq!(response.json::<Value>()["error"], "not found");
}

#[tokio::test]
async fn test_remove_storage_error() {
    let (server, repo) = common::create_failing_server();

    let response = server.delete("/url/test_alias").await;

    assert_eq!(response.status_code(), 500);
    assert_eq!(
        response.json::<Value>(),
        json!({ "status": "Error", "error": "internal error" })
    );
    assert_eq!(repo.calls(), 1);
}

#[tokio::test]
async fn test_remove_empty_alias() {
    let (server, repo) = common::create_failing_server();

    for path in ["/", "/url"] {
        let response = server.delete(path).await;

        response.assert_status_bad_request();
        assert_eq!(response.json::<Value>()["error"], "invalid request");
    }

    assert_eq!(repo.calls(), 0);
}
