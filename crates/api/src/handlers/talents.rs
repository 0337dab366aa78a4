//! Talent browsing.
//!
//! Categories select what is fetched (one query per category, merged by user
//! id); the remaining parameters narrow that base list in memory.

use axum::extract::{Query, State};
use axum::Json;
use serde::Serialize;
use stageconnect_core::talent_filter::{TalentBrowser, TalentFilterParams};
use stageconnect_db::models::talent::TalentProfile;
use stageconnect_db::repositories::TalentRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct TalentPage {
    pub talents: Vec<TalentProfile>,
    /// Profiles matching the filter.
    pub count: usize,
    /// Profiles fetched before filtering.
    pub total: usize,
}

/// GET /api/v1/talents
///
/// A failed fetch is logged and treated as zero results rather than an
/// error, for the whole list or for one category.
pub async fn list_talents(
    _auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<TalentFilterParams>,
) -> AppResult<Json<DataResponse<TalentPage>>> {
    let categories = params.categories()?;
    let filter = params.filter()?;

    let mut browser: TalentBrowser<TalentProfile> = TalentBrowser::new();

    if categories.is_empty() {
        if let Err(e) = browser.load_result(TalentRepo::list_all(&state.pool).await) {
            tracing::error!(error = %e, "Failed to fetch talent profiles");
        }
    } else {
        let mut results = Vec::with_capacity(categories.len());
        for category in &categories {
            results.push((
                *category,
                TalentRepo::list_by_category(&state.pool, category.as_str()).await,
            ));
        }
        for (category, e) in browser.load_category_results(results) {
            tracing::error!(
                category = %category,
                error = %e,
                "Failed to fetch talent profiles for category",
            );
        }
    }

    browser.set_filter(filter);

    let count = browser.count();
    let total = browser.total();
    tracing::debug!(count, total, categories = categories.len(), "Talent browse");

    Ok(Json(DataResponse::new(TalentPage {
        talents: browser.into_talents(),
        count,
        total,
    })))
}
