//! Repository for the `experiences` table.

use sqlx::PgPool;
use stageconnect_core::types::DbId;

use crate::models::experience::{CreateExperience, Experience};

const COLUMNS: &str = "id, user_id, title, company, start_date, end_date, is_current, \
                        description, created_at, updated_at";

pub struct ExperienceRepo;

impl ExperienceRepo {
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateExperience,
    ) -> Result<Experience, sqlx::Error> {
        let query = format!(
            "INSERT INTO experiences \
                (user_id, title, company, start_date, end_date, is_current, description) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Experience>(&query)
            .bind(user_id)
            .bind(input.title.trim())
            .bind(&input.company)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(input.is_current)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// Current positions first, then most recent start date.
    pub async fn list_by_user(pool: &PgPool, user_id: DbId) -> Result<Vec<Experience>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM experiences WHERE user_id = $1 \
             ORDER BY is_current DESC, start_date DESC, id DESC"
        );
        sqlx::query_as::<_, Experience>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId, user_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM experiences WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
