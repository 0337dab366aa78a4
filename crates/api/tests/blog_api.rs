//! HTTP-level tests for blogs, likes and comments.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete_auth, get_auth, post_auth, post_json_auth, put_json_auth};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn publish_derives_excerpt_and_normalizes_tags(pool: PgPool) {
    let app = common::build_test_app(pool);
    let sarah = common::register_talent(app.clone(), "sarah@example.com", "actor").await;

    let response = post_json_auth(
        app,
        "/api/v1/blogs",
        json!({
            "title": "My first audition",
            "content": "It was   nerve-wracking\n\nbut fun.",
            "tags": [" acting ", "Acting", "tips", ""],
        }),
        &sarah.token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let blog = body_json(response).await["data"].clone();
    assert_eq!(blog["excerpt"], "It was nerve-wracking but fun.");
    assert_eq!(blog["tags"], json!(["acting", "tips"]));
    assert_eq!(blog["visibility"], "public");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn private_posts_are_hidden_from_others(pool: PgPool) {
    let app = common::build_test_app(pool);
    let sarah = common::register_talent(app.clone(), "sarah@example.com", "actor").await;
    let raj = common::register_talent(app.clone(), "raj@example.com", "singer").await;

    let response = post_json_auth(
        app.clone(),
        "/api/v1/blogs",
        json!({ "title": "Diary", "content": "Private notes", "visibility": "private" }),
        &sarah.token,
    )
    .await;
    let blog_id = body_json(response).await["data"]["id"].as_i64().unwrap();
    let uri = format!("/api/v1/blogs/{blog_id}");

    let response = get_auth(app.clone(), &uri, &raj.token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let response = post_auth(app.clone(), &format!("{uri}/like"), &raj.token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = get_auth(app.clone(), "/api/v1/blogs", &raj.token).await;
    assert!(body_json(response).await["data"].as_array().unwrap().is_empty());

    let response = get_auth(app, &uri, &sarah.token).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn likes_toggle_and_comments_can_be_moderated(pool: PgPool) {
    let app = common::build_test_app(pool);
    let sarah = common::register_talent(app.clone(), "sarah@example.com", "actor").await;
    let raj = common::register_talent(app.clone(), "raj@example.com", "singer").await;
    let priya = common::register_talent(app.clone(), "priya@example.com", "dancer").await;

    let response = post_json_auth(
        app.clone(),
        "/api/v1/blogs",
        json!({ "title": "Voice warmups", "content": "Hum first." }),
        &sarah.token,
    )
    .await;
    let blog_id = body_json(response).await["data"]["id"].as_i64().unwrap();
    let uri = format!("/api/v1/blogs/{blog_id}");

    let like = body_json(post_auth(app.clone(), &format!("{uri}/like"), &raj.token).await).await;
    assert_eq!(like["data"]["liked"], true);
    assert_eq!(like["data"]["like_count"], 1);
    let like = body_json(post_auth(app.clone(), &format!("{uri}/like"), &raj.token).await).await;
    assert_eq!(like["data"]["liked"], false);
    assert_eq!(like["data"]["like_count"], 0);

    let response = post_json_auth(
        app.clone(),
        &format!("{uri}/comments"),
        json!({ "content": "   " }),
        &raj.token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = post_json_auth(
        app.clone(),
        &format!("{uri}/comments"),
        json!({ "content": "  Thanks!  " }),
        &raj.token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let comment = body_json(response).await["data"].clone();
    assert_eq!(comment["content"], "Thanks!");
    assert_eq!(comment["author_name"], "raj");
    let comment_uri = format!("/api/v1/blogs/comments/{}", comment["id"]);

    // A bystander cannot remove it; the post author can.
    let response = delete_auth(app.clone(), &comment_uri, &priya.token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let response = delete_auth(app.clone(), &comment_uri, &sarah.token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get_auth(app, &format!("{uri}/comments"), &raj.token).await;
    assert!(body_json(response).await["data"].as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn only_the_author_edits_a_post(pool: PgPool) {
    let app = common::build_test_app(pool);
    let sarah = common::register_talent(app.clone(), "sarah@example.com", "actor").await;
    let raj = common::register_talent(app.clone(), "raj@example.com", "singer").await;

    let response = post_json_auth(
        app.clone(),
        "/api/v1/blogs",
        json!({ "title": "Draft", "content": "Old text" }),
        &sarah.token,
    )
    .await;
    let blog_id = body_json(response).await["data"]["id"].as_i64().unwrap();
    let uri = format!("/api/v1/blogs/{blog_id}");

    let response = put_json_auth(app.clone(), &uri, json!({ "title": "Mine now" }), &raj.token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response =
        put_json_auth(app.clone(), &uri, json!({ "content": "New text" }), &sarah.token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let blog = body_json(response).await["data"].clone();
    assert_eq!(blog["excerpt"], "New text");
    assert_eq!(blog["title"], "Draft");

    let response = delete_auth(app.clone(), &uri, &raj.token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let response = delete_auth(app, &uri, &sarah.token).await;
    assert_eq!(response.status(), StatusCode::OK);
}
