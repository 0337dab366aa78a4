//! Repository for the `jobs` table.

use sqlx::PgPool;
use stageconnect_core::search::ilike_pattern;
use stageconnect_core::types::DbId;
use stageconnect_core::job::JobSearch;

use crate::models::job::{CreateJob, Job, JobListing, JobWithApplicationCount, UpdateJob};

/// Column list for `jobs` queries.
const COLUMNS: &str = "id, employer_id, title, description, requirements, talent_category, \
                        job_type, location_type, city, compensation_min, compensation_max, \
                        currency, application_deadline, status, created_at, updated_at";

/// Column list qualified with the `j` alias, for joined queries.
const J_COLUMNS: &str = "j.id, j.employer_id, j.title, j.description, j.requirements, \
                          j.talent_category, j.job_type, j.location_type, j.city, \
                          j.compensation_min, j.compensation_max, j.currency, \
                          j.application_deadline, j.status, j.created_at, j.updated_at";

/// Provides CRUD and search operations for job postings.
pub struct JobRepo;

impl JobRepo {
    /// Insert a job posted by `employer_id` with the given initial status.
    pub async fn create(
        pool: &PgPool,
        employer_id: DbId,
        input: &CreateJob,
        status: &str,
    ) -> Result<Job, sqlx::Error> {
        let query = format!(
            "INSERT INTO jobs \
                (employer_id, title, description, requirements, talent_category, job_type, \
                 location_type, city, compensation_min, compensation_max, currency, \
                 application_deadline, status) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, COALESCE($11, 'INR'), $12, $13) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Job>(&query)
            .bind(employer_id)
            .bind(input.title.trim())
            .bind(&input.description)
            .bind(&input.requirements)
            .bind(&input.talent_category)
            .bind(&input.job_type)
            .bind(&input.location_type)
            .bind(&input.city)
            .bind(input.compensation_min)
            .bind(input.compensation_max)
            .bind(&input.currency)
            .bind(input.application_deadline)
            .bind(status)
            .fetch_one(pool)
            .await
    }

    /// Find a job by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Job>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM jobs WHERE id = $1");
        sqlx::query_as::<_, Job>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a job joined with the employer's company name.
    pub async fn find_listing(pool: &PgPool, id: DbId) -> Result<Option<JobListing>, sqlx::Error> {
        let query = format!(
            "SELECT {J_COLUMNS}, pr.company_name \
             FROM jobs j \
             LEFT JOIN profiles pr ON pr.user_id = j.employer_id \
             WHERE j.id = $1"
        );
        sqlx::query_as::<_, JobListing>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Search active jobs. Every `Some` field of `search` narrows the result;
    /// the free-text term matches title, description or company name.
    ///
    /// Results are ordered newest-first.
    pub async fn search(
        pool: &PgPool,
        search: &JobSearch,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<JobListing>, sqlx::Error> {
        let mut conditions: Vec<String> = vec!["j.status = 'active'".to_string()];
        let mut binds: Vec<String> = Vec::new();
        let mut param_idx: usize = 1;

        if let Some(category) = search.talent_category {
            conditions.push(format!("j.talent_category = ${param_idx}"));
            binds.push(category.as_str().to_string());
            param_idx += 1;
        }
        if let Some(location_type) = search.location_type {
            conditions.push(format!("j.location_type = ${param_idx}"));
            binds.push(location_type.as_str().to_string());
            param_idx += 1;
        }
        if let Some(job_type) = search.job_type {
            conditions.push(format!("j.job_type = ${param_idx}"));
            binds.push(job_type.as_str().to_string());
            param_idx += 1;
        }
        if let Some(city) = &search.city {
            conditions.push(format!("j.city ILIKE ${param_idx}"));
            binds.push(ilike_pattern(city));
            param_idx += 1;
        }
        if let Some(term) = &search.search {
            conditions.push(format!(
                "(j.title ILIKE ${param_idx} OR j.description ILIKE ${param_idx} \
                 OR pr.company_name ILIKE ${param_idx})"
            ));
            binds.push(ilike_pattern(term));
            param_idx += 1;
        }

        let query = format!(
            "SELECT {J_COLUMNS}, pr.company_name \
             FROM jobs j \
             LEFT JOIN profiles pr ON pr.user_id = j.employer_id \
             WHERE {} \
             ORDER BY j.created_at DESC, j.id DESC \
             LIMIT ${param_idx} OFFSET ${}",
            conditions.join(" AND "),
            param_idx + 1
        );

        let mut q = sqlx::query_as::<_, JobListing>(&query);
        for value in &binds {
            q = q.bind(value);
        }
        q = q.bind(limit).bind(offset);

        q.fetch_all(pool).await
    }

    /// All jobs posted by an employer with their audition counts, newest
    /// first.
    pub async fn list_by_employer(
        pool: &PgPool,
        employer_id: DbId,
    ) -> Result<Vec<JobWithApplicationCount>, sqlx::Error> {
        let query = format!(
            "SELECT {J_COLUMNS}, \
                (SELECT COUNT(*) FROM auditions a WHERE a.job_id = j.id) AS application_count \
             FROM jobs j \
             WHERE j.employer_id = $1 \
             ORDER BY j.created_at DESC, j.id DESC"
        );
        sqlx::query_as::<_, JobWithApplicationCount>(&query)
            .bind(employer_id)
            .fetch_all(pool)
            .await
    }

    /// Update a job owned by `employer_id`. Only non-`None` fields are
    /// applied. Returns `None` if the job does not exist or is not owned.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        employer_id: DbId,
        input: &UpdateJob,
    ) -> Result<Option<Job>, sqlx::Error> {
        let query = format!(
            "UPDATE jobs SET
                title = COALESCE($3, title),
                description = COALESCE($4, description),
                requirements = COALESCE($5, requirements),
                talent_category = COALESCE($6, talent_category),
                job_type = COALESCE($7, job_type),
                location_type = COALESCE($8, location_type),
                city = COALESCE($9, city),
                compensation_min = COALESCE($10, compensation_min),
                compensation_max = COALESCE($11, compensation_max),
                currency = COALESCE($12, currency),
                application_deadline = COALESCE($13, application_deadline)
             WHERE id = $1 AND employer_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Job>(&query)
            .bind(id)
            .bind(employer_id)
            .bind(input.title.as_deref().map(str::trim))
            .bind(&input.description)
            .bind(&input.requirements)
            .bind(&input.talent_category)
            .bind(&input.job_type)
            .bind(&input.location_type)
            .bind(&input.city)
            .bind(input.compensation_min)
            .bind(input.compensation_max)
            .bind(&input.currency)
            .bind(input.application_deadline)
            .fetch_optional(pool)
            .await
    }

    /// Set the status of a job owned by `employer_id`.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        employer_id: DbId,
        status: &str,
    ) -> Result<Option<Job>, sqlx::Error> {
        let query = format!(
            "UPDATE jobs SET status = $3 WHERE id = $1 AND employer_id = $2 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Job>(&query)
            .bind(id)
            .bind(employer_id)
            .bind(status)
            .fetch_optional(pool)
            .await
    }

    /// Delete a job owned by `employer_id`, cascading to its auditions.
    pub async fn delete(pool: &PgPool, id: DbId, employer_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM jobs WHERE id = $1 AND employer_id = $2")
            .bind(id)
            .bind(employer_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
