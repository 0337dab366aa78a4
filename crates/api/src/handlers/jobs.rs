//! Handlers for job search and employer job management.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use serde::Serialize;
use stageconnect_core::job::{
    self, JobSearch, JobSearchParams, JobStatus, JobType, LocationType,
};
use stageconnect_core::search::{clamp_limit, clamp_offset, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT};
use stageconnect_core::talent::TalentCategory;
use stageconnect_core::types::DbId;
use stageconnect_db::models::job::{
    CreateJob, Job, JobListing, JobWithApplicationCount, UpdateJob, UpdateJobStatus,
};
use stageconnect_db::repositories::{AuditionRepo, JobRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireEmployer;
use crate::response::{DataResponse, Deleted};
use crate::state::AppState;

/// A search result annotated for the caller.
#[derive(Debug, Serialize)]
pub struct JobCard {
    #[serde(flatten)]
    pub listing: JobListing,
    pub has_applied: bool,
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

/// GET /api/v1/jobs
///
/// Active jobs only, newest first. `has_applied` is resolved for the whole
/// page with a single query.
pub async fn search_jobs(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<JobSearchParams>,
) -> AppResult<Json<DataResponse<Vec<JobCard>>>> {
    let search = JobSearch::from_params(&params)?;
    let limit = clamp_limit(params.limit, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT);
    let offset = clamp_offset(params.offset);

    let listings = JobRepo::search(&state.pool, &search, limit, offset).await?;

    let job_ids: Vec<DbId> = listings.iter().map(|l| l.job.id).collect();
    let applied = AuditionRepo::applied_job_ids(&state.pool, auth.user_id, &job_ids).await?;

    let cards = listings
        .into_iter()
        .map(|listing| JobCard {
            has_applied: applied.contains(&listing.job.id),
            listing,
        })
        .collect();

    Ok(Json(DataResponse::new(cards)))
}

/// GET /api/v1/jobs/{id}
pub async fn get_job(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<JobListing>>> {
    let listing = JobRepo::find_listing(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Job", id))?;
    Ok(Json(DataResponse::new(listing)))
}

// ---------------------------------------------------------------------------
// Employer CRUD
// ---------------------------------------------------------------------------

/// POST /api/v1/jobs
pub async fn create_job(
    RequireEmployer(auth): RequireEmployer,
    State(state): State<AppState>,
    Json(input): Json<CreateJob>,
) -> AppResult<impl IntoResponse> {
    job::validate_title(&input.title)?;
    job::validate_description(&input.description)?;
    job::validate_compensation(input.compensation_min, input.compensation_max)?;
    job::validate_deadline(input.application_deadline, Utc::now())?;
    input.talent_category.parse::<TalentCategory>()?;
    input.job_type.parse::<JobType>()?;
    input.location_type.parse::<LocationType>()?;

    let status = match input.status.as_deref() {
        Some(raw) => raw.parse::<JobStatus>()?,
        None => JobStatus::Active,
    };

    let job = JobRepo::create(&state.pool, auth.user_id, &input, status.as_str()).await?;

    tracing::info!(
        job_id = job.id,
        user_id = auth.user_id,
        status = %status,
        "Job posted",
    );

    Ok((StatusCode::CREATED, Json(DataResponse::new(job))))
}

/// GET /api/v1/jobs/mine
pub async fn my_jobs(
    RequireEmployer(auth): RequireEmployer,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<JobWithApplicationCount>>>> {
    let jobs = JobRepo::list_by_employer(&state.pool, auth.user_id).await?;
    Ok(Json(DataResponse::new(jobs)))
}

/// PUT /api/v1/jobs/{id}
pub async fn update_job(
    RequireEmployer(auth): RequireEmployer,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateJob>,
) -> AppResult<Json<DataResponse<Job>>> {
    let existing = find_owned(&state, id, auth.user_id).await?;

    if let Some(title) = input.title.as_deref() {
        job::validate_title(title)?;
    }
    if let Some(description) = input.description.as_deref() {
        job::validate_description(description)?;
    }
    if let Some(category) = input.talent_category.as_deref() {
        category.parse::<TalentCategory>()?;
    }
    if let Some(job_type) = input.job_type.as_deref() {
        job_type.parse::<JobType>()?;
    }
    if let Some(location_type) = input.location_type.as_deref() {
        location_type.parse::<LocationType>()?;
    }
    // The range must hold for the row as it will be stored.
    job::validate_compensation(
        input.compensation_min.or(existing.compensation_min),
        input.compensation_max.or(existing.compensation_max),
    )?;
    job::validate_deadline(input.application_deadline, Utc::now())?;

    let job = JobRepo::update(&state.pool, id, auth.user_id, &input)
        .await?
        .ok_or_else(|| AppError::not_found("Job", id))?;

    tracing::info!(job_id = id, user_id = auth.user_id, "Job updated");

    Ok(Json(DataResponse::new(job)))
}

/// PUT /api/v1/jobs/{id}/status
pub async fn update_job_status(
    RequireEmployer(auth): RequireEmployer,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateJobStatus>,
) -> AppResult<Json<DataResponse<Job>>> {
    let status: JobStatus = input.status.parse()?;

    let job = JobRepo::update_status(&state.pool, id, auth.user_id, status.as_str())
        .await?
        .ok_or_else(|| AppError::not_found("Job", id))?;

    tracing::info!(job_id = id, user_id = auth.user_id, status = %status, "Job status changed");

    Ok(Json(DataResponse::new(job)))
}

/// DELETE /api/v1/jobs/{id}
///
/// Removes the job's auditions with it.
pub async fn delete_job(
    RequireEmployer(auth): RequireEmployer,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Deleted>>> {
    if !JobRepo::delete(&state.pool, id, auth.user_id).await? {
        return Err(AppError::not_found("Job", id));
    }

    tracing::info!(job_id = id, user_id = auth.user_id, "Job deleted");

    Ok(Json(DataResponse::with_message(Deleted { id }, "Job deleted")))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Load a job and check that `employer_id` posted it. Someone else's job is
/// reported as not found.
pub(crate) async fn find_owned(state: &AppState, id: DbId, employer_id: DbId) -> AppResult<Job> {
    match JobRepo::find_by_id(&state.pool, id).await? {
        Some(job) if job.employer_id == employer_id => Ok(job),
        _ => Err(AppError::not_found("Job", id)),
    }
}
