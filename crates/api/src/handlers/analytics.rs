//! Dashboard analytics, recomputed from grouped counts on every request.

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use stageconnect_core::analytics::{
    highlights, AuditionStats, EmployerRollup, EngagementMetrics, JobApplications,
};
use stageconnect_db::models::portfolio::PortfolioItem;
use stageconnect_db::repositories::{AuditionRepo, JobRepo, PortfolioRepo};

use crate::error::AppResult;
use crate::middleware::rbac::{RequireEmployer, RequireTalent};
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct TalentAnalytics {
    pub auditions: AuditionStats,
    pub highlights: Vec<PortfolioItem>,
    pub engagement: EngagementMetrics,
}

#[derive(Debug, Serialize)]
pub struct EmployerAnalytics {
    #[serde(flatten)]
    pub rollup: EmployerRollup,
    pub engagement: EngagementMetrics,
}

/// GET /api/v1/analytics/talent
pub async fn talent_analytics(
    RequireTalent(auth): RequireTalent,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<TalentAnalytics>>> {
    let counts = AuditionRepo::count_by_status_for_user(&state.pool, auth.user_id).await?;
    let featured = PortfolioRepo::list_featured(&state.pool, auth.user_id).await?;

    Ok(Json(DataResponse::new(TalentAnalytics {
        auditions: AuditionStats::from_counts(&counts),
        highlights: highlights(&featured),
        engagement: EngagementMetrics::default(),
    })))
}

/// GET /api/v1/analytics/employer
pub async fn employer_analytics(
    RequireEmployer(auth): RequireEmployer,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<EmployerAnalytics>>> {
    let jobs: Vec<JobApplications> = JobRepo::list_by_employer(&state.pool, auth.user_id)
        .await?
        .into_iter()
        .map(|j| JobApplications {
            job_id: j.job.id,
            title: j.job.title,
            status: j.job.status,
            application_count: j.application_count,
        })
        .collect();
    let counts = AuditionRepo::count_by_status_for_employer(&state.pool, auth.user_id).await?;

    Ok(Json(DataResponse::new(EmployerAnalytics {
        rollup: EmployerRollup::from_jobs(&jobs, &counts),
        engagement: EngagementMetrics::default(),
    })))
}
