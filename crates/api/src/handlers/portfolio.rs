//! Handlers for the caller's own portfolio items (talent only).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use stageconnect_core::portfolio::{self, MediaType};
use stageconnect_core::types::DbId;
use stageconnect_db::models::portfolio::{
    CreatePortfolioItem, PortfolioItem, UpdatePortfolioItem,
};
use stageconnect_db::repositories::PortfolioRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireTalent;
use crate::response::{DataResponse, Deleted};
use crate::state::AppState;

/// GET /api/v1/portfolio
pub async fn list_portfolio(
    RequireTalent(auth): RequireTalent,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<PortfolioItem>>>> {
    let items = PortfolioRepo::list_by_user(&state.pool, auth.user_id).await?;
    Ok(Json(DataResponse::new(items)))
}

/// POST /api/v1/portfolio
pub async fn create_portfolio_item(
    RequireTalent(auth): RequireTalent,
    State(state): State<AppState>,
    Json(input): Json<CreatePortfolioItem>,
) -> AppResult<impl IntoResponse> {
    portfolio::validate_title(&input.title)?;
    portfolio::validate_description(input.description.as_deref())?;
    portfolio::validate_media_url(&input.media_url)?;
    if let Some(thumb) = input.thumbnail_url.as_deref() {
        portfolio::validate_media_url(thumb)?;
    }
    input.media_type.parse::<MediaType>()?;

    let item = PortfolioRepo::create(&state.pool, auth.user_id, &input).await?;

    tracing::info!(
        portfolio_item_id = item.id,
        user_id = auth.user_id,
        media_type = %item.media_type,
        "Portfolio item created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse::new(item))))
}

/// PUT /api/v1/portfolio/{id}
pub async fn update_portfolio_item(
    RequireTalent(auth): RequireTalent,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePortfolioItem>,
) -> AppResult<Json<DataResponse<PortfolioItem>>> {
    if let Some(title) = input.title.as_deref() {
        portfolio::validate_title(title)?;
    }
    portfolio::validate_description(input.description.as_deref())?;
    if let Some(url) = input.media_url.as_deref() {
        portfolio::validate_media_url(url)?;
    }
    if let Some(thumb) = input.thumbnail_url.as_deref() {
        portfolio::validate_media_url(thumb)?;
    }
    if let Some(media_type) = input.media_type.as_deref() {
        media_type.parse::<MediaType>()?;
    }

    let item = PortfolioRepo::update(&state.pool, id, auth.user_id, &input)
        .await?
        .ok_or_else(|| AppError::not_found("PortfolioItem", id))?;

    tracing::info!(portfolio_item_id = id, user_id = auth.user_id, "Portfolio item updated");

    Ok(Json(DataResponse::new(item)))
}

/// DELETE /api/v1/portfolio/{id}
///
/// Auditions referencing the item keep their row; the reference is cleared.
pub async fn delete_portfolio_item(
    RequireTalent(auth): RequireTalent,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Deleted>>> {
    if !PortfolioRepo::delete(&state.pool, id, auth.user_id).await? {
        return Err(AppError::not_found("PortfolioItem", id));
    }

    tracing::info!(portfolio_item_id = id, user_id = auth.user_id, "Portfolio item deleted");

    Ok(Json(DataResponse::with_message(
        Deleted { id },
        "Portfolio item deleted",
    )))
}
