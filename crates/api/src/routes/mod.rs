pub mod analytics;
pub mod auditions;
pub mod auth;
pub mod blogs;
pub mod health;
pub mod jobs;
pub mod portfolio;
pub mod profiles;
pub mod talents;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                                   register (public)
/// /auth/login                                      login (public)
/// /auth/refresh                                    refresh (public)
/// /auth/logout                                     logout (requires auth)
/// /auth/me                                         current session
///
/// /profiles/{user_id}                              profile page
/// /profiles/me                                     update own profile (PUT)
/// /profiles/me/experiences                         add (POST)
/// /profiles/me/experiences/{id}                    delete
/// /profiles/me/educations                          add (POST)
/// /profiles/me/educations/{id}                     delete
/// /companies/register                              company details (employer)
///
/// /talents                                         browse and filter talent
///
/// /portfolio                                       list, create (talent)
/// /portfolio/{id}                                  update, delete
///
/// /jobs                                            search, create (employer)
/// /jobs/mine                                       employer's own jobs
/// /jobs/{id}                                       get, update, delete
/// /jobs/{id}/status                                change status (PUT)
/// /jobs/{id}/auditions                             applicants (employer owner)
///
/// /auditions                                       submit (talent)
/// /auditions/mine                                  talent's own auditions
/// /auditions/{id}                                  delete (talent owner)
/// /auditions/{id}/status                           review (employer owner)
/// /auditions/{id}/withdraw                         withdraw (talent owner)
///
/// /blogs                                           list, create
/// /blogs/{id}                                      get, update, delete
/// /blogs/{id}/like                                 toggle like (POST)
/// /blogs/{id}/comments                             list, add
/// /blogs/comments/{id}                             delete comment
///
/// /analytics/talent                                talent dashboard
/// /analytics/employer                              employer dashboard
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/profiles", profiles::router())
        .nest("/companies", profiles::company_router())
        .nest("/talents", talents::router())
        .nest("/portfolio", portfolio::router())
        .nest("/jobs", jobs::router())
        .nest("/auditions", auditions::router())
        .nest("/blogs", blogs::router())
        .nest("/analytics", analytics::router())
}
