//! Route definitions for profiles and company registration.

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::profiles;
use crate::state::AppState;

/// Routes mounted at `/profiles`.
///
/// ```text
/// PUT    /me                    -> update_my_profile
/// POST   /me/experiences        -> add_experience
/// DELETE /me/experiences/{id}   -> delete_experience
/// POST   /me/educations         -> add_education
/// DELETE /me/educations/{id}    -> delete_education
/// GET    /{user_id}             -> get_profile
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/me", put(profiles::update_my_profile))
        .route("/me/experiences", post(profiles::add_experience))
        .route("/me/experiences/{id}", delete(profiles::delete_experience))
        .route("/me/educations", post(profiles::add_education))
        .route("/me/educations/{id}", delete(profiles::delete_education))
        .route("/{user_id}", get(profiles::get_profile))
}

/// Routes mounted at `/companies`.
///
/// ```text
/// POST /register -> register_company (employer)
/// ```
pub fn company_router() -> Router<AppState> {
    Router::new().route("/register", post(profiles::register_company))
}
