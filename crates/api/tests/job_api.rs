//! HTTP-level tests for job search and employer job management.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete_auth, get_auth, post_json_auth, put_json_auth};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn talent_cannot_post_jobs(pool: PgPool) {
    let app = common::build_test_app(pool);
    let sarah = common::register_talent(app.clone(), "sarah@example.com", "actor").await;

    let response = post_json_auth(
        app,
        "/api/v1/jobs",
        json!({
            "title": "Lead",
            "description": "Lead role",
            "talent_category": "actor",
            "job_type": "contract",
            "location_type": "remote",
        }),
        &sarah.token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_job_validates_input(pool: PgPool) {
    let app = common::build_test_app(pool);
    let employer = common::register_employer(app.clone(), "hr@example.com").await;

    let base = json!({
        "title": "Lead",
        "description": "Lead role",
        "talent_category": "actor",
        "job_type": "contract",
        "location_type": "remote",
    });

    let mut inverted = base.clone();
    inverted["compensation_min"] = json!(5000.0);
    inverted["compensation_max"] = json!(1000.0);
    let response = post_json_auth(app.clone(), "/api/v1/jobs", inverted, &employer.token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let mut bad_category = base.clone();
    bad_category["talent_category"] = json!("astronaut");
    let response = post_json_auth(app.clone(), "/api/v1/jobs", bad_category, &employer.token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let mut blank_title = base;
    blank_title["title"] = json!("   ");
    let response = post_json_auth(app, "/api/v1/jobs", blank_title, &employer.token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn search_filters_and_annotates_has_applied(pool: PgPool) {
    let app = common::build_test_app(pool);
    let employer = common::register_employer(app.clone(), "hr@example.com").await;
    let sarah = common::register_talent(app.clone(), "sarah@example.com", "actor").await;

    let film = common::post_job(app.clone(), &employer, "Feature film lead", "actor").await;
    let concert = common::post_job(app.clone(), &employer, "Concert vocalist", "singer").await;

    let response = post_json_auth(
        app.clone(),
        "/api/v1/auditions",
        json!({ "job_id": film }),
        &sarah.token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = get_auth(app.clone(), "/api/v1/jobs", &sarah.token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let jobs = body_json(response).await["data"].clone();
    let jobs = jobs.as_array().unwrap();
    assert_eq!(jobs.len(), 2);
    for job in jobs {
        let expected = job["id"] == film;
        assert_eq!(job["has_applied"], expected, "job {}", job["id"]);
    }

    let response = get_auth(
        app.clone(),
        "/api/v1/jobs?talent_category=singer&location_type=all",
        &sarah.token,
    )
    .await;
    let jobs = body_json(response).await["data"].clone();
    assert_eq!(jobs.as_array().unwrap().len(), 1);
    assert_eq!(jobs[0]["id"], concert);

    let response = get_auth(app, "/api/v1/jobs?search=FILM", &sarah.token).await;
    let jobs = body_json(response).await["data"].clone();
    assert_eq!(jobs.as_array().unwrap().len(), 1);
    assert_eq!(jobs[0]["title"], "Feature film lead");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn closed_jobs_leave_search(pool: PgPool) {
    let app = common::build_test_app(pool);
    let employer = common::register_employer(app.clone(), "hr@example.com").await;
    let job_id = common::post_job(app.clone(), &employer, "Ad shoot", "model").await;

    let response = put_json_auth(
        app.clone(),
        &format!("/api/v1/jobs/{job_id}/status"),
        json!({ "status": "closed" }),
        &employer.token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get_auth(app.clone(), "/api/v1/jobs", &employer.token).await;
    assert!(body_json(response).await["data"].as_array().unwrap().is_empty());

    // Still listed for its owner.
    let response = get_auth(app, "/api/v1/jobs/mine", &employer.token).await;
    let mine = body_json(response).await["data"].clone();
    assert_eq!(mine[0]["status"], "closed");
    assert_eq!(mine[0]["application_count"], 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn only_the_owner_can_modify_a_job(pool: PgPool) {
    let app = common::build_test_app(pool);
    let owner = common::register_employer(app.clone(), "owner@example.com").await;
    let rival = common::register_employer(app.clone(), "rival@example.com").await;
    let job_id = common::post_job(app.clone(), &owner, "Music video", "dancer").await;
    let uri = format!("/api/v1/jobs/{job_id}");

    let response =
        put_json_auth(app.clone(), &uri, json!({ "title": "Hijacked" }), &rival.token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = delete_auth(app.clone(), &uri, &rival.token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Merged range: min above the stored max is rejected.
    let response = put_json_auth(
        app.clone(),
        &uri,
        json!({ "compensation_min": 9000.0 }),
        &owner.token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response =
        put_json_auth(app.clone(), &uri, json!({ "title": "Music video lead" }), &owner.token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get_auth(app.clone(), &uri, &rival.token).await;
    assert_eq!(body_json(response).await["data"]["title"], "Music video lead");

    let response = delete_auth(app.clone(), &uri, &owner.token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get_auth(app, &uri, &owner.token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
