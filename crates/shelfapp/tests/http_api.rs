//! HTTP adapter integration tests.
//!
//! Starts an axum server on an ephemeral port and exercises it with reqwest.

use std::sync::Arc;

use serde_json::{json, Value};
use shelfapp::api::ShelfApi;
use shelfapp::http;
use shelfapp::store::fs::FileStore;
use tempfile::TempDir;

/// Bind to port 0 and return the base URL. The TempDir must outlive the server.
async fn start_server() -> (TempDir, String) {
    let dir = TempDir::new().unwrap();
    let api = Arc::new(ShelfApi::new(FileStore::new_fs(dir.path().join("media.json"))));
    let app = http::router(api);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (dir, format!("http://{addr}"))
}

async fn add(client: &reqwest::Client, base: &str, body: Value) -> Value {
    let resp = client
        .post(format!("{base}/api/books"))
        .json(&body)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 201);
    resp.json().await.unwrap()
}

async fn list(client: &reqwest::Client, url: String) -> Vec<Value> {
    let resp = client.get(url).send().await.unwrap();
    assert_eq!(resp.status(), 200);
    resp.json().await.unwrap()
}

#[tokio::test]
async fn get_books_empty() {
    let (_dir, base) = start_server().await;
    let client = reqwest::Client::new();

    let books = list(&client, format!("{base}/api/books")).await;
    assert!(books.is_empty());
}

#[tokio::test]
async fn add_and_delete_book() {
    let (_dir, base) = start_server().await;
    let client = reqwest::Client::new();

    let body = add(
        &client,
        &base,
        json!({ "name": "Test Book", "author": "Tester", "date": 2025, "category": "Novel" }),
    )
    .await;
    assert_eq!(body["success"], true);
    assert_eq!(body["book"]["name"], "Test Book");
    assert_eq!(body["book"]["id"], 1);
    let id = body["book"]["id"].as_u64().unwrap();

    let books = list(&client, format!("{base}/api/books")).await;
    assert!(books.iter().any(|b| b["id"] == id));

    let resp = client
        .delete(format!("{base}/api/books/{id}"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "success": true }));

    let books = list(&client, format!("{base}/api/books")).await;
    assert!(books.iter().all(|b| b["id"] != id));
}

#[tokio::test]
async fn delete_missing_id_still_succeeds() {
    let (_dir, base) = start_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .delete(format!("{base}/api/books/99"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
}

#[tokio::test]
async fn search_books() {
    let (_dir, base) = start_server().await;
    let client = reqwest::Client::new();

    add(
        &client,
        &base,
        json!({ "name": "UniqueSearchTitle", "author": "SearchAuthor", "date": 2020, "category": "Poetry" }),
    )
    .await;

    let resp = client
        .post(format!("{base}/api/books/search"))
        .json(&json!({ "name": "uniquesearch" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let results: Vec<Value> = resp.json().await.unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["name"], "UniqueSearchTitle");
}

#[tokio::test]
async fn add_coerces_input() {
    let (_dir, base) = start_server().await;
    let client = reqwest::Client::new();

    let body = add(
        &client,
        &base,
        json!({ "name": "X", "author": "Y", "date": "not-a-number", "category": "" }),
    )
    .await;
    assert_eq!(body["book"]["date"], 0);
    assert_eq!(body["book"]["category"], "Novel");
}

#[tokio::test]
async fn filter_by_category_and_erase() {
    let (_dir, base) = start_server().await;
    let client = reqwest::Client::new();

    add(&client, &base, json!({ "name": "A", "author": "a", "category": "Poetry" })).await;
    add(&client, &base, json!({ "name": "B", "author": "b", "category": "Novel" })).await;

    let poetry = list(&client, format!("{base}/api/books?category=Poetry")).await;
    assert_eq!(poetry.len(), 1);
    assert_eq!(poetry[0]["name"], "A");

    let all = list(&client, format!("{base}/api/books?category=All")).await;
    assert_eq!(all.len(), 2);

    let categories: Vec<String> = client
        .get(format!("{base}/api/categories"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(categories, vec!["Novel", "Poetry"]);

    let resp = client
        .post(format!("{base}/api/books/erase"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let books = list(&client, format!("{base}/api/books")).await;
    assert!(books.is_empty());
}

#[tokio::test]
async fn summary_counts() {
    let (_dir, base) = start_server().await;
    let client = reqwest::Client::new();

    add(&client, &base, json!({ "name": "A", "author": "a", "category": "Poetry" })).await;
    add(&client, &base, json!({ "name": "B", "author": "b" })).await;

    let summary: Value = client
        .get(format!("{base}/api/summary"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(summary["total_books"], 2);
    assert_eq!(summary["categories"]["Novel"], 1);
    assert_eq!(summary["categories"]["Poetry"], 1);
    assert!(summary["timestamp"].is_string());
}

#[tokio::test]
async fn write_failure_is_500() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, "x").unwrap();
    let api = Arc::new(ShelfApi::new(FileStore::new_fs(blocker.join("media.json"))));
    let app = http::router(api);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let client = reqwest::Client::new();
    let resp = client
        .post(format!("http://{addr}/api/books"))
        .json(&json!({ "name": "A", "author": "B" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 500);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["success"], false);
}
