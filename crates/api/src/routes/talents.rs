use axum::routing::get;
use axum::Router;

use crate::handlers::talents;
use crate::state::AppState;

/// Routes mounted at `/talents`.
///
/// ```text
/// GET / -> list_talents (category, name, location, ranges, roles, has_portfolio)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(talents::list_talents))
}
