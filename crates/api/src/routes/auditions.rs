//! Route definitions for the `/auditions` resource.

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::auditions;
use crate::state::AppState;

/// Routes mounted at `/auditions`.
///
/// ```text
/// POST   /                -> submit_audition (talent)
/// GET    /mine            -> my_auditions (talent)
/// PUT    /{id}/status     -> update_audition_status (employer owner)
/// POST   /{id}/withdraw   -> withdraw_audition (talent owner)
/// DELETE /{id}            -> delete_audition (talent owner)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(auditions::submit_audition))
        .route("/mine", get(auditions::my_auditions))
        .route("/{id}", delete(auditions::delete_audition))
        .route("/{id}/status", put(auditions::update_audition_status))
        .route("/{id}/withdraw", post(auditions::withdraw_audition))
}
