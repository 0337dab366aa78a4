//! Repository for the `educations` table.

use sqlx::PgPool;
use stageconnect_core::types::DbId;

use crate::models::education::{CreateEducation, Education};

const COLUMNS: &str = "id, user_id, institution, degree, field_of_study, start_year, end_year, \
                        created_at, updated_at";

pub struct EducationRepo;

impl EducationRepo {
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateEducation,
    ) -> Result<Education, sqlx::Error> {
        let query = format!(
            "INSERT INTO educations \
                (user_id, institution, degree, field_of_study, start_year, end_year) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Education>(&query)
            .bind(user_id)
            .bind(input.institution.trim())
            .bind(&input.degree)
            .bind(&input.field_of_study)
            .bind(input.start_year)
            .bind(input.end_year)
            .fetch_one(pool)
            .await
    }

    pub async fn list_by_user(pool: &PgPool, user_id: DbId) -> Result<Vec<Education>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM educations WHERE user_id = $1 \
             ORDER BY end_year DESC NULLS FIRST, id DESC"
        );
        sqlx::query_as::<_, Education>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId, user_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM educations WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
