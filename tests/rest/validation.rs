//! Error-class behavior: bad bodies, missing fields, unknown ids.

use serde_json::json;

use crate::support::start_seeded;

#[tokio::test]
async fn create_missing_author_is_400_and_leaves_collection_alone() {
    let base = start_seeded().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/books"))
        .json(&json!({ "title": "X", "price": 1.0 }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    assert_eq!(resp.text().await.unwrap(), "");

    let resp = client.get(format!("{base}/books")).send().await.unwrap();
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body.as_object().unwrap().len(), 2);
}

#[tokio::test]
async fn create_with_unparseable_body_is_400() {
    let base = start_seeded().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/books"))
        .body("{not json")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
}

#[tokio::test]
async fn create_with_no_body_is_400() {
    let base = start_seeded().await;
    let client = reqwest::Client::new();

    let resp = client.post(format!("{base}/books")).send().await.unwrap();
    assert_eq!(resp.status(), 400);
}

#[tokio::test]
async fn create_with_non_numeric_price_is_422() {
    let base = start_seeded().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/books"))
        .json(&json!({ "title": "X", "author": "Y", "price": "a lot" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 422);

    let resp = client.get(format!("{base}/books")).send().await.unwrap();
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body.as_object().unwrap().len(), 2);
}

#[tokio::test]
async fn create_coerces_numeric_string_price() {
    let base = start_seeded().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/books"))
        .json(&json!({ "title": "X", "author": "Y", "price": "12.5" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 201);

    let resp = client.get(format!("{base}/books/3")).send().await.unwrap();
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["3"]["price"], json!(12.5));
}

#[tokio::test]
async fn update_unknown_id_is_404_even_with_wellformed_body() {
    let base = start_seeded().await;
    let client = reqwest::Client::new();

    let resp = client
        .put(format!("{base}/books/99"))
        .json(&json!({ "price": 1.0 }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn update_unknown_id_is_checked_before_the_body() {
    let base = start_seeded().await;
    let client = reqwest::Client::new();

    // Empty body would be a 400 on a known id; the unknown id wins.
    let resp = client.put(format!("{base}/books/99")).send().await.unwrap();
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn update_with_empty_body_is_400() {
    let base = start_seeded().await;
    let client = reqwest::Client::new();

    let resp = client.put(format!("{base}/books/1")).send().await.unwrap();
    assert_eq!(resp.status(), 400);

    let resp = client
        .put(format!("{base}/books/1"))
        .json(&json!({}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
}

#[tokio::test]
async fn update_changes_only_named_fields() {
    let base = start_seeded().await;
    let client = reqwest::Client::new();

    let resp = client
        .put(format!("{base}/books/1"))
        .json(&json!({ "author": "Z" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let resp = client.get(format!("{base}/books/1")).send().await.unwrap();
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(
        body,
        json!({ "1": { "title": "Distributed Systems", "author": "Z", "price": 50.0 } })
    );
}

#[tokio::test]
async fn update_with_non_string_title_is_400() {
    let base = start_seeded().await;
    let client = reqwest::Client::new();

    let resp = client
        .put(format!("{base}/books/1"))
        .json(&json!({ "title": 42 }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
}

#[tokio::test]
async fn delete_unknown_id_is_404() {
    let base = start_seeded().await;
    let client = reqwest::Client::new();

    let resp = client
        .delete(format!("{base}/books/99"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
    assert_eq!(resp.text().await.unwrap(), "");
}
