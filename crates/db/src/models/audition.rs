//! Audition (job application) model, DTOs, and read models.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use stageconnect_core::types::{DbId, Timestamp};

/// A row from the `auditions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Audition {
    pub id: DbId,
    pub user_id: DbId,
    pub job_id: DbId,
    pub portfolio_item_id: Option<DbId>,
    pub cover_letter: Option<String>,
    pub status: String,
    pub employer_notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A talent's audition joined with the job it applies to.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AuditionWithJob {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub audition: Audition,
    pub job_title: String,
    pub job_status: String,
    pub talent_category: String,
    pub location_type: String,
    pub city: Option<String>,
    pub application_deadline: Option<Timestamp>,
    pub company_name: Option<String>,
}

/// An audition as seen by the employer: joined with the applicant's profile
/// and the referenced portfolio item, if any.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Applicant {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub audition: Audition,
    pub talent_name: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub image_url: Option<String>,
    pub category: Option<String>,
    pub city: Option<String>,
    pub portfolio_title: Option<String>,
    pub portfolio_media_url: Option<String>,
}

/// DTO for submitting an audition.
#[derive(Debug, Deserialize)]
pub struct CreateAudition {
    pub job_id: DbId,
    pub portfolio_item_id: Option<DbId>,
    pub cover_letter: Option<String>,
}

/// DTO for an employer's status update.
#[derive(Debug, Deserialize)]
pub struct UpdateAuditionStatus {
    pub status: String,
    pub employer_notes: Option<String>,
}

/// Query parameters for listing a talent's own auditions.
#[derive(Debug, Deserialize)]
pub struct AuditionListParams {
    pub status: Option<String>,
}
