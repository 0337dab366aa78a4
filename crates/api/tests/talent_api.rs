//! HTTP-level tests for talent browsing, profiles and portfolios.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, delete_auth, get_auth, post_json_auth, put_json_auth, TestAccount,
};
use serde_json::{json, Value};
use sqlx::PgPool;

/// Sarah: actor in Mumbai, 25, with one featured portfolio item.
/// Raj: singer in Delhi, 34, no portfolio.
async fn seed(app: axum::Router) -> (TestAccount, TestAccount, TestAccount) {
    let sarah = common::register_talent(app.clone(), "sarah@example.com", "actor").await;
    let raj = common::register_talent(app.clone(), "raj@example.com", "singer").await;
    let employer = common::register_employer(app.clone(), "casting@example.com").await;

    let response = put_json_auth(
        app.clone(),
        "/api/v1/profiles/me",
        json!({
            "first_name": "Sarah",
            "last_name": "Johnson",
            "address": "Bandra, Mumbai",
            "age": 25,
            "height_cm": 165.0,
        }),
        &sarah.token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = put_json_auth(
        app.clone(),
        "/api/v1/profiles/me",
        json!({
            "first_name": "Raj",
            "last_name": "Kumar",
            "address": "Connaught Place, Delhi",
            "age": 34,
        }),
        &raj.token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = post_json_auth(
        app,
        "/api/v1/portfolio",
        json!({
            "title": "Showreel 2026",
            "media_type": "video",
            "media_url": "https://cdn.example.com/reel.mp4",
            "is_featured": true,
        }),
        &sarah.token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    (sarah, raj, employer)
}

async fn browse(app: axum::Router, query: &str, token: &str) -> Value {
    let response = get_auth(app, &format!("/api/v1/talents{query}"), token).await;
    assert_eq!(response.status(), StatusCode::OK, "query {query}");
    body_json(response).await["data"].clone()
}

fn first_names(page: &Value) -> Vec<String> {
    let mut names: Vec<String> = page["talents"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["first_name"].as_str().unwrap_or_default().to_string())
        .collect();
    names.sort();
    names
}

#[sqlx::test(migrations = "../db/migrations")]
async fn browse_without_filters_lists_all_talents(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (_sarah, _raj, employer) = seed(app.clone()).await;

    let page = browse(app, "", &employer.token).await;
    assert_eq!(page["count"], 2);
    assert_eq!(page["total"], 2);
    assert_eq!(first_names(&page), vec!["Raj", "Sarah"]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn categories_select_what_is_fetched(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (_sarah, _raj, employer) = seed(app.clone()).await;

    let page = browse(app.clone(), "?category=actor", &employer.token).await;
    assert_eq!(first_names(&page), vec!["Sarah"]);
    assert_eq!(page["total"], 1);

    let page = browse(app.clone(), "?category=actor,singer", &employer.token).await;
    assert_eq!(first_names(&page), vec!["Raj", "Sarah"]);

    let page = browse(app, "?category=dancer", &employer.token).await;
    assert_eq!(page["count"], 0);
    assert_eq!(page["total"], 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn filters_narrow_the_fetched_list(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (_sarah, _raj, employer) = seed(app.clone()).await;

    let page = browse(app.clone(), "?name=sar", &employer.token).await;
    assert_eq!(first_names(&page), vec!["Sarah"]);
    assert_eq!(page["total"], 2);

    let page = browse(app.clone(), "?location=DELHI", &employer.token).await;
    assert_eq!(first_names(&page), vec!["Raj"]);

    let page = browse(app.clone(), "?age_min=20&age_max=30", &employer.token).await;
    assert_eq!(first_names(&page), vec!["Sarah"]);

    let page = browse(app.clone(), "?has_portfolio=true", &employer.token).await;
    assert_eq!(first_names(&page), vec!["Sarah"]);

    let page = browse(app.clone(), "?roles=singer", &employer.token).await;
    assert_eq!(first_names(&page), vec!["Raj"]);

    let page = browse(app, "?category=singer&name=sarah", &employer.token).await;
    assert_eq!(page["count"], 0);
    assert_eq!(page["total"], 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn unknown_category_is_a_validation_error(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (sarah, _raj, _employer) = seed(app.clone()).await;

    let response = get_auth(app, "/api/v1/talents?category=juggler", &sarah.token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn profile_page_includes_entries_and_highlights(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (sarah, _raj, employer) = seed(app.clone()).await;

    let response = post_json_auth(
        app.clone(),
        "/api/v1/profiles/me/experiences",
        json!({
            "title": "Lead, Hamlet",
            "company": "Prithvi Theatre",
            "start_date": "2024-01-10",
            "end_date": "2024-06-30",
        }),
        &sarah.token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = post_json_auth(
        app.clone(),
        "/api/v1/profiles/me/educations",
        json!({ "institution": "National School of Drama", "start_year": 2018, "end_year": 2021 }),
        &sarah.token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = get_auth(
        app,
        &format!("/api/v1/profiles/{}", sarah.user_id),
        &employer.token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let profile = body_json(response).await["data"].clone();
    assert_eq!(profile["resolved_name"], "Sarah Johnson");
    assert_eq!(profile["experiences"][0]["company"], "Prithvi Theatre");
    assert_eq!(profile["educations"].as_array().unwrap().len(), 1);
    assert_eq!(profile["highlights"][0]["title"], "Showreel 2026");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn invalid_entries_are_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let sarah = common::register_talent(app.clone(), "sarah@example.com", "actor").await;

    let response = post_json_auth(
        app.clone(),
        "/api/v1/profiles/me/experiences",
        json!({ "title": "Lead", "start_date": "2024-06-01", "end_date": "2024-01-01" }),
        &sarah.token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = put_json_auth(
        app,
        "/api/v1/profiles/me",
        json!({ "age": 500 }),
        &sarah.token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn company_registration_is_employer_only(pool: PgPool) {
    let app = common::build_test_app(pool);
    let sarah = common::register_talent(app.clone(), "sarah@example.com", "actor").await;
    let employer = common::register_employer(app.clone(), "hr@example.com").await;

    let body = json!({ "company_name": "Red Chillies", "website": "https://redchillies.example" });

    let response =
        post_json_auth(app.clone(), "/api/v1/companies/register", body.clone(), &sarah.token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = post_json_auth(app.clone(), "/api/v1/companies/register", body, &employer.token).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["company_name"], "Red Chillies");

    // Employers have no talent category.
    let response = put_json_auth(
        app,
        "/api/v1/profiles/me",
        json!({ "category": "actor" }),
        &employer.token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn portfolio_is_owner_scoped_and_talent_only(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (sarah, raj, employer) = seed(app.clone()).await;

    let response = get_auth(app.clone(), "/api/v1/portfolio", &employer.token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let items = body_json(get_auth(app.clone(), "/api/v1/portfolio", &sarah.token).await).await;
    let item_id = items["data"][0]["id"].as_i64().unwrap();

    // Someone else's item looks missing.
    let response = put_json_auth(
        app.clone(),
        &format!("/api/v1/portfolio/{item_id}"),
        json!({ "title": "Stolen" }),
        &raj.token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = put_json_auth(
        app.clone(),
        &format!("/api/v1/portfolio/{item_id}"),
        json!({ "media_type": "hologram" }),
        &sarah.token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = delete_auth(app.clone(), &format!("/api/v1/portfolio/{item_id}"), &sarah.token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let items = body_json(get_auth(app, "/api/v1/portfolio", &sarah.token).await).await;
    assert!(items["data"].as_array().unwrap().is_empty());
}
