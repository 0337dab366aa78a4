//! Portfolio item model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use stageconnect_core::analytics::Highlightable;
use stageconnect_core::types::{DbId, Timestamp};

/// A row from the `portfolio_items` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PortfolioItem {
    pub id: DbId,
    pub user_id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub media_type: String,
    pub media_url: String,
    pub thumbnail_url: Option<String>,
    pub is_featured: bool,
    pub display_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Highlightable for PortfolioItem {
    fn is_featured(&self) -> bool {
        self.is_featured
    }

    fn display_order(&self) -> i32 {
        self.display_order
    }
}

/// DTO for creating a portfolio item.
#[derive(Debug, Deserialize)]
pub struct CreatePortfolioItem {
    pub title: String,
    pub description: Option<String>,
    pub media_type: String,
    pub media_url: String,
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub is_featured: bool,
    pub display_order: Option<i32>,
}

/// DTO for updating a portfolio item. All fields are optional.
#[derive(Debug, Default, Deserialize)]
pub struct UpdatePortfolioItem {
    pub title: Option<String>,
    pub description: Option<String>,
    pub media_type: Option<String>,
    pub media_url: Option<String>,
    pub thumbnail_url: Option<String>,
    pub is_featured: Option<bool>,
    pub display_order: Option<i32>,
}
