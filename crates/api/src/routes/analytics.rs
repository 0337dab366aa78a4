use axum::routing::get;
use axum::Router;

use crate::handlers::analytics;
use crate::state::AppState;

/// Routes mounted at `/analytics`.
///
/// ```text
/// GET /talent    -> talent_analytics (talent)
/// GET /employer  -> employer_analytics (employer)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/talent", get(analytics::talent_analytics))
        .route("/employer", get(analytics::employer_analytics))
}
