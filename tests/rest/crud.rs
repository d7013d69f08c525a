//! Happy-path CRUD behavior, including the full demo scenario.

use std::sync::Arc;

use commstyles::BookStore;
use serde_json::json;

use crate::support::{start_seeded, start_server};

#[tokio::test]
async fn empty_collection_lists_as_empty_mapping() {
    let base = start_server(Arc::new(BookStore::new())).await;
    let client = reqwest::Client::new();

    let resp = client.get(format!("{base}/books")).send().await.unwrap();
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body, json!({}));
}

#[tokio::test]
async fn seeded_list_returns_exactly_two_records() {
    let base = start_seeded().await;
    let client = reqwest::Client::new();

    let resp = client.get(format!("{base}/books")).send().await.unwrap();
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(
        body,
        json!({
            "1": { "title": "Distributed Systems", "author": "Tanenbaum", "price": 50.0 },
            "2": { "title": "Clean Code", "author": "Robert C. Martin", "price": 45.0 },
        })
    );
}

#[tokio::test]
async fn get_one_book() {
    let base = start_seeded().await;
    let client = reqwest::Client::new();

    let resp = client.get(format!("{base}/books/2")).send().await.unwrap();
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(
        body,
        json!({ "2": { "title": "Clean Code", "author": "Robert C. Martin", "price": 45.0 } })
    );
}

#[tokio::test]
async fn get_unknown_id_is_404() {
    let base = start_seeded().await;
    let client = reqwest::Client::new();

    let resp = client.get(format!("{base}/books/99")).send().await.unwrap();
    assert_eq!(resp.status(), 404);
    assert_eq!(resp.text().await.unwrap(), "");
}

#[tokio::test]
async fn create_returns_created_and_get_reflects_fields() {
    let base = start_seeded().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/books"))
        .json(&json!({ "title": "X", "author": "Y", "price": 9.5 }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 201);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "message": "Book added", "id": 3 }));

    let resp = client.get(format!("{base}/books/3")).send().await.unwrap();
    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "3": { "title": "X", "author": "Y", "price": 9.5 } }));
}

#[tokio::test]
async fn created_ids_strictly_increase() {
    let base = start_seeded().await;
    let client = reqwest::Client::new();

    let mut last_id = 0u64;
    for n in 0..3 {
        let resp = client
            .post(format!("{base}/books"))
            .json(&json!({ "title": format!("Book {n}"), "author": "A", "price": 1.0 }))
            .send()
            .await
            .unwrap();
        let body: serde_json::Value = resp.json().await.unwrap();
        let id = body["id"].as_u64().unwrap();
        assert!(id > last_id);
        last_id = id;
    }
}

#[tokio::test]
async fn deleted_id_is_gone_and_never_reissued() {
    let base = start_seeded().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/books"))
        .json(&json!({ "title": "Doomed", "author": "A", "price": 1.0 }))
        .send()
        .await
        .unwrap();
    let body: serde_json::Value = resp.json().await.unwrap();
    let id = body["id"].as_u64().unwrap();
    assert_eq!(id, 3);

    let resp = client
        .delete(format!("{base}/books/{id}"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "message": "Book deleted", "id": 3 }));

    let resp = client.get(format!("{base}/books/{id}")).send().await.unwrap();
    assert_eq!(resp.status(), 404);

    // The allocator moves on; 3 is never handed out again.
    let resp = client
        .post(format!("{base}/books"))
        .json(&json!({ "title": "Next", "author": "A", "price": 1.0 }))
        .send()
        .await
        .unwrap();
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["id"], json!(4));
}

#[tokio::test]
async fn full_scenario() {
    let base = start_seeded().await;
    let client = reqwest::Client::new();

    // POST -> 201 with id 3
    let resp = client
        .post(format!("{base}/books"))
        .json(&json!({ "title": "X", "author": "Y", "price": 9.5 }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 201);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "message": "Book added", "id": 3 }));

    // GET -> the submitted fields
    let resp = client.get(format!("{base}/books/3")).send().await.unwrap();
    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "3": { "title": "X", "author": "Y", "price": 9.5 } }));

    // PUT price only -> 200
    let resp = client
        .put(format!("{base}/books/3"))
        .json(&json!({ "price": 7.0 }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "message": "Book updated", "id": 3 }));

    // GET -> price changed, title/author untouched
    let resp = client.get(format!("{base}/books/3")).send().await.unwrap();
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "3": { "title": "X", "author": "Y", "price": 7.0 } }));

    // DELETE -> 200, then GET -> 404
    let resp = client
        .delete(format!("{base}/books/3"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let resp = client.get(format!("{base}/books/3")).send().await.unwrap();
    assert_eq!(resp.status(), 404);
}
