//! Repository for the `portfolio_items` table.
//!
//! Mutations are scoped by `user_id` so only the owning talent can change or
//! remove an item; a mismatch looks the same as a missing row.

use sqlx::PgPool;
use stageconnect_core::types::DbId;

use crate::models::portfolio::{CreatePortfolioItem, PortfolioItem, UpdatePortfolioItem};

/// Column list for `portfolio_items` queries.
const COLUMNS: &str = "id, user_id, title, description, media_type, media_url, thumbnail_url, \
                        is_featured, display_order, created_at, updated_at";

/// Provides CRUD operations for portfolio items.
pub struct PortfolioRepo;

impl PortfolioRepo {
    /// Create an item. Without an explicit display order the item is
    /// appended after the user's existing items.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreatePortfolioItem,
    ) -> Result<PortfolioItem, sqlx::Error> {
        let query = format!(
            "INSERT INTO portfolio_items \
                (user_id, title, description, media_type, media_url, thumbnail_url, \
                 is_featured, display_order) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, \
                 COALESCE($8, (SELECT COALESCE(MAX(display_order) + 1, 0) \
                               FROM portfolio_items WHERE user_id = $1))) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PortfolioItem>(&query)
            .bind(user_id)
            .bind(input.title.trim())
            .bind(&input.description)
            .bind(&input.media_type)
            .bind(&input.media_url)
            .bind(&input.thumbnail_url)
            .bind(input.is_featured)
            .bind(input.display_order)
            .fetch_one(pool)
            .await
    }

    /// Find an item by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<PortfolioItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM portfolio_items WHERE id = $1");
        sqlx::query_as::<_, PortfolioItem>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a user's items in display order.
    pub async fn list_by_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<PortfolioItem>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM portfolio_items WHERE user_id = $1 \
             ORDER BY display_order ASC, id ASC"
        );
        sqlx::query_as::<_, PortfolioItem>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// A user's featured items in display order.
    pub async fn list_featured(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<PortfolioItem>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM portfolio_items WHERE user_id = $1 AND is_featured = true \
             ORDER BY display_order ASC, id ASC"
        );
        sqlx::query_as::<_, PortfolioItem>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Whether an item exists and belongs to the user.
    pub async fn belongs_to(pool: &PgPool, id: DbId, user_id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM portfolio_items WHERE id = $1 AND user_id = $2)",
        )
        .bind(id)
        .bind(user_id)
        .fetch_one(pool)
        .await
    }

    /// Update an item owned by `user_id`. Only non-`None` fields are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
        input: &UpdatePortfolioItem,
    ) -> Result<Option<PortfolioItem>, sqlx::Error> {
        let query = format!(
            "UPDATE portfolio_items SET
                title = COALESCE($3, title),
                description = COALESCE($4, description),
                media_type = COALESCE($5, media_type),
                media_url = COALESCE($6, media_url),
                thumbnail_url = COALESCE($7, thumbnail_url),
                is_featured = COALESCE($8, is_featured),
                display_order = COALESCE($9, display_order)
             WHERE id = $1 AND user_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PortfolioItem>(&query)
            .bind(id)
            .bind(user_id)
            .bind(input.title.as_deref().map(str::trim))
            .bind(&input.description)
            .bind(&input.media_type)
            .bind(&input.media_url)
            .bind(&input.thumbnail_url)
            .bind(input.is_featured)
            .bind(input.display_order)
            .fetch_optional(pool)
            .await
    }

    /// Delete an item owned by `user_id`. Auditions referencing it keep
    /// existing with the reference cleared.
    pub async fn delete(pool: &PgPool, id: DbId, user_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM portfolio_items WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
