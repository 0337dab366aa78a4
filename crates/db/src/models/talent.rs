//! Talent browse read model.

use serde::Serialize;
use sqlx::FromRow;
use stageconnect_core::talent_filter::FilterableTalent;
use stageconnect_core::types::{DbId, Timestamp};

/// A talent profile joined with its account and portfolio size, as shown on
/// the browse page.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct TalentProfile {
    pub user_id: DbId,
    pub profile_id: DbId,
    pub name: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub display_name: Option<String>,
    pub image_url: Option<String>,
    pub category: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub age: Option<i32>,
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
    pub hourly_rate: Option<f64>,
    pub specializations: Vec<String>,
    pub languages: Vec<String>,
    pub skills: Vec<String>,
    pub gig_count: i32,
    pub portfolio_count: i64,
    pub created_at: Timestamp,
}

impl FilterableTalent for TalentProfile {
    fn user_id(&self) -> DbId {
        self.user_id
    }

    fn first_name(&self) -> Option<&str> {
        self.first_name.as_deref()
    }

    fn last_name(&self) -> Option<&str> {
        self.last_name.as_deref()
    }

    /// Falls back to the account name when no display name is set.
    fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref().or(Some(self.name.as_str()))
    }

    fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    fn age(&self) -> Option<f64> {
        self.age.map(f64::from)
    }

    fn height(&self) -> Option<f64> {
        self.height_cm
    }

    fn weight(&self) -> Option<f64> {
        self.weight_kg
    }

    fn has_portfolio(&self) -> bool {
        self.portfolio_count > 0
    }
}
