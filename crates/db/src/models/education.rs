//! Education entries shown on a profile.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use stageconnect_core::types::{DbId, Timestamp};

/// A row from the `educations` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Education {
    pub id: DbId,
    pub user_id: DbId,
    pub institution: String,
    pub degree: Option<String>,
    pub field_of_study: Option<String>,
    pub start_year: Option<i32>,
    pub end_year: Option<i32>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for adding an education entry.
#[derive(Debug, Deserialize)]
pub struct CreateEducation {
    pub institution: String,
    pub degree: Option<String>,
    pub field_of_study: Option<String>,
    pub start_year: Option<i32>,
    pub end_year: Option<i32>,
}
