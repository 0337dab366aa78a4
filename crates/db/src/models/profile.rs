//! Profile model and DTOs.
//!
//! A profile belongs to exactly one user and carries the account role.
//! Talent attributes are only meaningful for `talent` profiles and company
//! attributes only for `employer` profiles.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use stageconnect_core::types::{DbId, Timestamp};

/// A row from the `profiles` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Profile {
    pub id: DbId,
    pub user_id: DbId,
    pub role: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub display_name: Option<String>,
    pub image_url: Option<String>,
    pub bio: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub category: Option<String>,
    pub age: Option<i32>,
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
    pub hourly_rate: Option<f64>,
    pub specializations: Vec<String>,
    pub languages: Vec<String>,
    pub skills: Vec<String>,
    pub gig_count: i32,
    pub company_name: Option<String>,
    pub industry: Option<String>,
    pub website: Option<String>,
    pub company_size: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating the profile that accompanies a new account.
#[derive(Debug)]
pub struct CreateProfile {
    pub role: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub category: Option<String>,
}

/// DTO for the owner's partial profile update. `None` leaves a field as is.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateProfile {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub display_name: Option<String>,
    pub image_url: Option<String>,
    pub bio: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub category: Option<String>,
    pub age: Option<i32>,
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
    pub hourly_rate: Option<f64>,
    pub specializations: Option<Vec<String>>,
    pub languages: Option<Vec<String>>,
    pub skills: Option<Vec<String>>,
}

/// DTO for an employer completing their company details.
#[derive(Debug, Deserialize)]
pub struct RegisterCompany {
    pub company_name: String,
    pub industry: Option<String>,
    pub website: Option<String>,
    pub company_size: Option<String>,
    pub bio: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
}
