//! Route definitions for the caller's portfolio (talent only).

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::portfolio;
use crate::state::AppState;

/// Routes mounted at `/portfolio`.
///
/// ```text
/// GET    /       -> list_portfolio
/// POST   /       -> create_portfolio_item
/// PUT    /{id}   -> update_portfolio_item
/// DELETE /{id}   -> delete_portfolio_item
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(portfolio::list_portfolio).post(portfolio::create_portfolio_item),
        )
        .route(
            "/{id}",
            put(portfolio::update_portfolio_item).delete(portfolio::delete_portfolio_item),
        )
}
