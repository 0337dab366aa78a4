//! Job posting model, DTOs, and read models.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use stageconnect_core::types::{DbId, Timestamp};

/// A row from the `jobs` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Job {
    pub id: DbId,
    pub employer_id: DbId,
    pub title: String,
    pub description: String,
    pub requirements: Option<String>,
    pub talent_category: String,
    pub job_type: String,
    pub location_type: String,
    pub city: Option<String>,
    pub compensation_min: Option<f64>,
    pub compensation_max: Option<f64>,
    pub currency: String,
    pub application_deadline: Option<Timestamp>,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A job joined with the posting employer's company name, as listed in
/// search results.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct JobListing {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub job: Job,
    pub company_name: Option<String>,
}

/// A job with the number of auditions it has received.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct JobWithApplicationCount {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub job: Job,
    pub application_count: i64,
}

/// DTO for posting a job.
#[derive(Debug, Deserialize)]
pub struct CreateJob {
    pub title: String,
    pub description: String,
    pub requirements: Option<String>,
    pub talent_category: String,
    pub job_type: String,
    pub location_type: String,
    pub city: Option<String>,
    pub compensation_min: Option<f64>,
    pub compensation_max: Option<f64>,
    pub currency: Option<String>,
    pub application_deadline: Option<Timestamp>,
    /// Defaults to `active` when omitted.
    pub status: Option<String>,
}

/// DTO for editing a job. All fields are optional.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateJob {
    pub title: Option<String>,
    pub description: Option<String>,
    pub requirements: Option<String>,
    pub talent_category: Option<String>,
    pub job_type: Option<String>,
    pub location_type: Option<String>,
    pub city: Option<String>,
    pub compensation_min: Option<f64>,
    pub compensation_max: Option<f64>,
    pub currency: Option<String>,
    pub application_deadline: Option<Timestamp>,
}

/// DTO for changing a job's status.
#[derive(Debug, Deserialize)]
pub struct UpdateJobStatus {
    pub status: String,
}
