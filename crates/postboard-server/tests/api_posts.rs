mod common;

use axum::http::StatusCode;
use common::setup_app;
use serde_json::json;

#[tokio::test]
async fn test_create_and_fetch_post() {
    let app = setup_app();

    let payload = json!({"title": "First", "content": "Hello there", "user_id": 1});
    let (status, created) = app.send("POST", "/posts/", Some(payload)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        created,
        json!({"id": 1, "title": "First", "content": "Hello there", "user_id": 1})
    );

    let (status, fetched) = app.send("GET", "/posts/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_post_author_is_not_checked() {
    let app = setup_app();

    let payload = json!({"title": "Orphan", "content": "nobody wrote this", "user_id": 777});
    let (status, body) = app.send("POST", "/posts/", Some(payload)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["user_id"], 777);

    let (status, _) = app.send("GET", "/users/777", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_missing_post() {
    let app = setup_app();

    let (status, body) = app.send("GET", "/posts/42", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"detail": "Post not found"}));
}

#[tokio::test]
async fn test_list_posts() {
    let app = setup_app();

    for i in 1..=4 {
        let payload = json!({"title": format!("post {i}"), "content": "body", "user_id": i});
        let (status, _) = app.send("POST", "/posts/", Some(payload)).await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, body) = app.send("GET", "/posts/", None).await;
    assert_eq!(status, StatusCode::OK);
    let posts = body.as_array().unwrap();
    assert_eq!(posts.len(), 4);
    assert_eq!(posts[3]["title"], "post 4");
    assert_eq!(posts[3]["user_id"], 4);
}

#[tokio::test]
async fn test_delete_post() {
    let app = setup_app();

    let payload = json!({"title": "Doomed", "content": "short-lived", "user_id": 2});
    let (_, created) = app.send("POST", "/posts/", Some(payload)).await;

    let (status, deleted) = app.send("DELETE", "/posts/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted, created);

    let (status, _) = app.send("GET", "/posts/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = app.send("GET", "/posts/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_delete_missing_post() {
    let app = setup_app();

    let (status, body) = app.send("DELETE", "/posts/5", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Post not found");
}

#[tokio::test]
async fn test_create_post_rejects_bad_payloads() {
    let app = setup_app();

    let (status, _) = app
        .send("POST", "/posts/", Some(json!({"title": "t", "content": "c"})))
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let too_long = json!({"title": "t", "content": "x".repeat(281), "user_id": 1});
    let (status, body) = app.send("POST", "/posts/", Some(too_long)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        body["detail"],
        "content must be at most 280 characters (got 281)"
    );

    let (_, body) = app.send("GET", "/posts/", None).await;
    assert_eq!(body, json!([]));
}
