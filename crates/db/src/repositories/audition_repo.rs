//! Repository for the `auditions` table.
//!
//! Uniqueness of `(user_id, job_id)` is enforced by the
//! `uq_auditions_user_job` constraint; [`AuditionRepo::create`] reports a
//! duplicate as `None` instead of reading first.

use sqlx::PgPool;
use stageconnect_core::types::DbId;

use crate::models::audition::{Applicant, Audition, AuditionWithJob, CreateAudition};

/// Column list for `auditions` queries.
const COLUMNS: &str = "id, user_id, job_id, portfolio_item_id, cover_letter, status, \
                        employer_notes, created_at, updated_at";

/// Column list qualified with the `a` alias, for joined queries.
const A_COLUMNS: &str = "a.id, a.user_id, a.job_id, a.portfolio_item_id, a.cover_letter, \
                          a.status, a.employer_notes, a.created_at, a.updated_at";

/// Provides CRUD and aggregate operations for auditions.
pub struct AuditionRepo;

impl AuditionRepo {
    /// Submit an audition for `user_id`. Returns `None` if the user has
    /// already applied to the job.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateAudition,
    ) -> Result<Option<Audition>, sqlx::Error> {
        let query = format!(
            "INSERT INTO auditions (user_id, job_id, portfolio_item_id, cover_letter) \
             VALUES ($1, $2, $3, $4) \
             ON CONFLICT ON CONSTRAINT uq_auditions_user_job DO NOTHING \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Audition>(&query)
            .bind(user_id)
            .bind(input.job_id)
            .bind(input.portfolio_item_id)
            .bind(&input.cover_letter)
            .fetch_optional(pool)
            .await
    }

    /// Find an audition by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Audition>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM auditions WHERE id = $1");
        sqlx::query_as::<_, Audition>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// A talent's auditions joined with their jobs, newest first, optionally
    /// narrowed to one status.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
        status: Option<&str>,
    ) -> Result<Vec<AuditionWithJob>, sqlx::Error> {
        let status_clause = if status.is_some() { "AND a.status = $2" } else { "" };
        let query = format!(
            "SELECT {A_COLUMNS}, \
                    j.title AS job_title, j.status AS job_status, j.talent_category, \
                    j.location_type, j.city, j.application_deadline, pr.company_name \
             FROM auditions a \
             JOIN jobs j ON j.id = a.job_id \
             LEFT JOIN profiles pr ON pr.user_id = j.employer_id \
             WHERE a.user_id = $1 {status_clause} \
             ORDER BY a.created_at DESC, a.id DESC"
        );
        let mut q = sqlx::query_as::<_, AuditionWithJob>(&query).bind(user_id);
        if let Some(s) = status {
            q = q.bind(s);
        }
        q.fetch_all(pool).await
    }

    /// Applicants to a job in submission order, joined with their profile
    /// and the portfolio item they attached.
    pub async fn list_for_job(
        pool: &PgPool,
        job_id: DbId,
        status: Option<&str>,
    ) -> Result<Vec<Applicant>, sqlx::Error> {
        let status_clause = if status.is_some() { "AND a.status = $2" } else { "" };
        let query = format!(
            "SELECT {A_COLUMNS}, \
                    u.name AS talent_name, p.first_name, p.last_name, p.image_url, \
                    p.category, p.city, \
                    pi.title AS portfolio_title, pi.media_url AS portfolio_media_url \
             FROM auditions a \
             JOIN users u ON u.id = a.user_id \
             LEFT JOIN profiles p ON p.user_id = a.user_id \
             LEFT JOIN portfolio_items pi ON pi.id = a.portfolio_item_id \
             WHERE a.job_id = $1 {status_clause} \
             ORDER BY a.created_at ASC, a.id ASC"
        );
        let mut q = sqlx::query_as::<_, Applicant>(&query).bind(job_id);
        if let Some(s) = status {
            q = q.bind(s);
        }
        q.fetch_all(pool).await
    }

    /// Which of `job_ids` the user has already applied to, in one query.
    pub async fn applied_job_ids(
        pool: &PgPool,
        user_id: DbId,
        job_ids: &[DbId],
    ) -> Result<Vec<DbId>, sqlx::Error> {
        if job_ids.is_empty() {
            return Ok(Vec::new());
        }
        sqlx::query_scalar::<_, DbId>(
            "SELECT job_id FROM auditions WHERE user_id = $1 AND job_id = ANY($2)",
        )
        .bind(user_id)
        .bind(job_ids)
        .fetch_all(pool)
        .await
    }

    /// Move an audition from `from` to `to`, optionally replacing the
    /// employer notes.
    ///
    /// The update only applies while the row is still in `from`, so two
    /// concurrent transitions cannot both succeed. Returns `None` when the
    /// audition is missing or its status changed in the meantime.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        from: &str,
        to: &str,
        employer_notes: Option<&str>,
    ) -> Result<Option<Audition>, sqlx::Error> {
        let query = format!(
            "UPDATE auditions SET
                status = $3,
                employer_notes = COALESCE($4, employer_notes)
             WHERE id = $1 AND status = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Audition>(&query)
            .bind(id)
            .bind(from)
            .bind(to)
            .bind(employer_notes)
            .fetch_optional(pool)
            .await
    }

    /// Delete a talent's own audition once it has ended in `rejected` or
    /// `withdrawn`.
    pub async fn delete(pool: &PgPool, id: DbId, user_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM auditions \
             WHERE id = $1 AND user_id = $2 AND status IN ('rejected', 'withdrawn')",
        )
        .bind(id)
        .bind(user_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// `(status, count)` for a talent's auditions.
    pub async fn count_by_status_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<(String, i64)>, sqlx::Error> {
        sqlx::query_as::<_, (String, i64)>(
            "SELECT status, COUNT(*) FROM auditions WHERE user_id = $1 GROUP BY status",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }

    /// `(status, count)` for auditions across all jobs of an employer.
    pub async fn count_by_status_for_employer(
        pool: &PgPool,
        employer_id: DbId,
    ) -> Result<Vec<(String, i64)>, sqlx::Error> {
        sqlx::query_as::<_, (String, i64)>(
            "SELECT a.status, COUNT(*) \
             FROM auditions a \
             JOIN jobs j ON j.id = a.job_id \
             WHERE j.employer_id = $1 \
             GROUP BY a.status",
        )
        .bind(employer_id)
        .fetch_all(pool)
        .await
    }
}
