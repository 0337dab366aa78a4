#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use sqlx::PgPool;
use tower::ServiceExt;

use stageconnect_api::auth::jwt::JwtConfig;
use stageconnect_api::config::ServerConfig;
use stageconnect_api::router::build_app_router;
use stageconnect_api::state::AppState;

pub const TEST_PASSWORD: &str = "correct-horse-battery";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3001".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hs256".to_string(),
            access_token_expiry_mins: 15,
            refresh_token_expiry_days: 7,
        },
    }
}

/// Build the full application router, middleware included, over `pool`.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(t) = token {
        builder = builder.header("Authorization", format!("Bearer {t}"));
    }
    let request = match body {
        Some(b) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(serde_json::to_vec(&b).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::GET, uri, Some(token), None).await
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send(app, Method::POST, uri, None, Some(body)).await
}

pub async fn post_json_auth(app: Router, uri: &str, body: Value, token: &str) -> Response<Body> {
    send(app, Method::POST, uri, Some(token), Some(body)).await
}

pub async fn post_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::POST, uri, Some(token), None).await
}

pub async fn put_json_auth(app: Router, uri: &str, body: Value, token: &str) -> Response<Body> {
    send(app, Method::PUT, uri, Some(token), Some(body)).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, Some(token), None).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Account helpers
// ---------------------------------------------------------------------------

/// A registered account: its user id and access token.
pub struct TestAccount {
    pub user_id: i64,
    pub token: String,
}

/// Register through the API and return the new account.
pub async fn register(app: Router, email: &str, role: &str, extra: Value) -> TestAccount {
    let mut body = json!({
        "email": email,
        "password": TEST_PASSWORD,
        "name": email.split('@').next().unwrap(),
        "role": role,
    });
    if let (Some(obj), Some(extra)) = (body.as_object_mut(), extra.as_object()) {
        obj.extend(extra.clone());
    }

    let response = post_json(app, "/api/v1/auth/register", body).await;
    assert_eq!(response.status(), 201, "registration of {email} should succeed");
    let json = body_json(response).await;
    TestAccount {
        user_id: json["data"]["user"]["id"].as_i64().unwrap(),
        token: json["data"]["access_token"].as_str().unwrap().to_string(),
    }
}

pub async fn register_talent(app: Router, email: &str, category: &str) -> TestAccount {
    register(app, email, "talent", json!({ "category": category })).await
}

pub async fn register_employer(app: Router, email: &str) -> TestAccount {
    register(app, email, "employer", json!({})).await
}

/// Post an active job as `employer` and return its id.
pub async fn post_job(app: Router, employer: &TestAccount, title: &str, category: &str) -> i64 {
    let body = json!({
        "title": title,
        "description": "Casting for a feature film",
        "talent_category": category,
        "job_type": "contract",
        "location_type": "on_site",
        "city": "Mumbai",
        "compensation_min": 1000.0,
        "compensation_max": 5000.0,
    });
    let response = post_json_auth(app, "/api/v1/jobs", body, &employer.token).await;
    assert_eq!(response.status(), 201);
    body_json(response).await["data"]["id"].as_i64().unwrap()
}
