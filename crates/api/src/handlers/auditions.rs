//! Handlers for auditions: talent submissions and withdrawals, employer
//! review of applicants.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use stageconnect_core::audition::{self, AuditionStatus, ALREADY_APPLIED_MESSAGE};
use stageconnect_core::error::CoreError;
use stageconnect_core::job::{self, JobStatus};
use stageconnect_core::types::DbId;
use stageconnect_db::models::audition::{
    Applicant, Audition, AuditionListParams, AuditionWithJob, CreateAudition,
    UpdateAuditionStatus,
};
use stageconnect_db::repositories::{AuditionRepo, JobRepo, PortfolioRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::jobs::find_owned;
use crate::middleware::rbac::{RequireEmployer, RequireTalent};
use crate::response::{DataResponse, Deleted};
use crate::state::AppState;

const STATUS_CHANGED_MESSAGE: &str = "Audition status changed by another request; reload and retry";

// ---------------------------------------------------------------------------
// Talent
// ---------------------------------------------------------------------------

/// POST /api/v1/auditions
///
/// A second submission for the same job is rejected by the unique
/// constraint and reported as 409.
pub async fn submit_audition(
    RequireTalent(auth): RequireTalent,
    State(state): State<AppState>,
    Json(input): Json<CreateAudition>,
) -> AppResult<impl IntoResponse> {
    audition::validate_cover_letter(input.cover_letter.as_deref())?;

    let job = JobRepo::find_by_id(&state.pool, input.job_id)
        .await?
        .ok_or_else(|| AppError::not_found("Job", input.job_id))?;
    let status: JobStatus = job.status.parse()?;
    if !job::is_accepting_applications(status, job.application_deadline, Utc::now()) {
        return Err(AppError::Core(CoreError::Validation(
            "This job is no longer accepting applications".into(),
        )));
    }

    if let Some(item_id) = input.portfolio_item_id {
        if !PortfolioRepo::belongs_to(&state.pool, item_id, auth.user_id).await? {
            return Err(AppError::not_found("PortfolioItem", item_id));
        }
    }

    let created = AuditionRepo::create(&state.pool, auth.user_id, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Conflict(ALREADY_APPLIED_MESSAGE.into())))?;

    tracing::info!(
        audition_id = created.id,
        job_id = input.job_id,
        user_id = auth.user_id,
        "Audition submitted",
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse::with_message(created, "Audition submitted")),
    ))
}

/// GET /api/v1/auditions/mine
pub async fn my_auditions(
    RequireTalent(auth): RequireTalent,
    State(state): State<AppState>,
    Query(params): Query<AuditionListParams>,
) -> AppResult<Json<DataResponse<Vec<AuditionWithJob>>>> {
    let status = parse_status_filter(params.status.as_deref())?;
    let auditions =
        AuditionRepo::list_for_user(&state.pool, auth.user_id, status.map(AuditionStatus::as_str))
            .await?;
    Ok(Json(DataResponse::new(auditions)))
}

/// POST /api/v1/auditions/{id}/withdraw
pub async fn withdraw_audition(
    RequireTalent(auth): RequireTalent,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Audition>>> {
    let current = find_own_audition(&state, id, auth.user_id).await?;
    let status: AuditionStatus = current.status.parse()?;
    audition::validate_withdraw(status)?;

    let updated = AuditionRepo::update_status(
        &state.pool,
        id,
        status.as_str(),
        AuditionStatus::Withdrawn.as_str(),
        None,
    )
    .await?
    .ok_or_else(|| AppError::Core(CoreError::Conflict(STATUS_CHANGED_MESSAGE.into())))?;

    tracing::info!(audition_id = id, user_id = auth.user_id, "Audition withdrawn");

    Ok(Json(DataResponse::with_message(updated, "Audition withdrawn")))
}

/// DELETE /api/v1/auditions/{id}
pub async fn delete_audition(
    RequireTalent(auth): RequireTalent,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Deleted>>> {
    let current = find_own_audition(&state, id, auth.user_id).await?;
    audition::validate_delete(current.status.parse()?)?;

    if !AuditionRepo::delete(&state.pool, id, auth.user_id).await? {
        return Err(AppError::Core(CoreError::Conflict(STATUS_CHANGED_MESSAGE.into())));
    }

    tracing::info!(audition_id = id, user_id = auth.user_id, "Audition deleted");

    Ok(Json(DataResponse::with_message(Deleted { id }, "Audition deleted")))
}

// ---------------------------------------------------------------------------
// Employer
// ---------------------------------------------------------------------------

/// GET /api/v1/jobs/{id}/auditions
pub async fn list_job_auditions(
    RequireEmployer(auth): RequireEmployer,
    State(state): State<AppState>,
    Path(job_id): Path<DbId>,
    Query(params): Query<AuditionListParams>,
) -> AppResult<Json<DataResponse<Vec<Applicant>>>> {
    find_owned(&state, job_id, auth.user_id).await?;
    let status = parse_status_filter(params.status.as_deref())?;
    let applicants =
        AuditionRepo::list_for_job(&state.pool, job_id, status.map(AuditionStatus::as_str))
            .await?;
    Ok(Json(DataResponse::new(applicants)))
}

/// PUT /api/v1/auditions/{id}/status
pub async fn update_audition_status(
    RequireEmployer(auth): RequireEmployer,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateAuditionStatus>,
) -> AppResult<Json<DataResponse<Audition>>> {
    let current = AuditionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Audition", id))?;
    // Applicants to other employers' jobs are invisible.
    find_owned(&state, current.job_id, auth.user_id)
        .await
        .map_err(|_| AppError::not_found("Audition", id))?;

    let from: AuditionStatus = current.status.parse()?;
    let to: AuditionStatus = input.status.parse()?;
    audition::validate_employer_transition(from, to)?;
    audition::validate_notes(input.employer_notes.as_deref())?;

    let updated = AuditionRepo::update_status(
        &state.pool,
        id,
        from.as_str(),
        to.as_str(),
        input.employer_notes.as_deref(),
    )
    .await?
    .ok_or_else(|| AppError::Core(CoreError::Conflict(STATUS_CHANGED_MESSAGE.into())))?;

    tracing::info!(
        audition_id = id,
        job_id = current.job_id,
        user_id = auth.user_id,
        from = %from,
        to = %to,
        "Audition status changed",
    );

    Ok(Json(DataResponse::new(updated)))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn parse_status_filter(raw: Option<&str>) -> Result<Option<AuditionStatus>, CoreError> {
    match raw.map(str::trim) {
        None | Some("") | Some("all") => Ok(None),
        Some(s) => s.parse().map(Some),
    }
}

async fn find_own_audition(state: &AppState, id: DbId, user_id: DbId) -> AppResult<Audition> {
    match AuditionRepo::find_by_id(&state.pool, id).await? {
        Some(a) if a.user_id == user_id => Ok(a),
        _ => Err(AppError::not_found("Audition", id)),
    }
}
