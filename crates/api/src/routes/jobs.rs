//! Route definitions for the `/jobs` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::{auditions, jobs};
use crate::state::AppState;

/// Routes mounted at `/jobs`.
///
/// ```text
/// GET    /                 -> search_jobs
/// POST   /                 -> create_job (employer)
/// GET    /mine             -> my_jobs (employer)
/// GET    /{id}             -> get_job
/// PUT    /{id}             -> update_job (owner)
/// DELETE /{id}             -> delete_job (owner)
/// PUT    /{id}/status      -> update_job_status (owner)
/// GET    /{id}/auditions   -> list_job_auditions (owner)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(jobs::search_jobs).post(jobs::create_job))
        .route("/mine", get(jobs::my_jobs))
        .route(
            "/{id}",
            get(jobs::get_job)
                .put(jobs::update_job)
                .delete(jobs::delete_job),
        )
        .route("/{id}/status", put(jobs::update_job_status))
        .route("/{id}/auditions", get(auditions::list_job_auditions))
}
