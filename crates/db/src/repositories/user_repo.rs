//! Repository for the `users` table.

use sqlx::PgPool;
use stageconnect_core::types::DbId;

use crate::models::profile::{CreateProfile, Profile};
use crate::models::user::{CreateUser, User};
use crate::repositories::profile_repo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, email, password_hash, name, is_active, last_login_at, created_at, updated_at";

/// Provides CRUD operations for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (email, password_hash, name)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&input.email)
            .bind(&input.password_hash)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    /// Create an account together with its profile in one transaction, so a
    /// user never exists without a role.
    pub async fn create_with_profile(
        pool: &PgPool,
        user: &CreateUser,
        profile: &CreateProfile,
    ) -> Result<(User, Profile), sqlx::Error> {
        let mut tx = pool.begin().await?;

        let user_query = format!(
            "INSERT INTO users (email, password_hash, name)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        let created = sqlx::query_as::<_, User>(&user_query)
            .bind(&user.email)
            .bind(&user.password_hash)
            .bind(&user.name)
            .fetch_one(&mut *tx)
            .await?;

        let profile_query = format!(
            "INSERT INTO profiles (user_id, role, first_name, last_name, category)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {}",
            profile_repo::COLUMNS
        );
        let created_profile = sqlx::query_as::<_, Profile>(&profile_query)
            .bind(created.id)
            .bind(&profile.role)
            .bind(&profile.first_name)
            .bind(&profile.last_name)
            .bind(&profile.category)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok((created, created_profile))
    }

    /// Find a user by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a user by email (case-insensitive, matching the unique index).
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE LOWER(email) = LOWER($1)");
        sqlx::query_as::<_, User>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// Stamp `last_login_at` after a successful login.
    pub async fn record_successful_login(pool: &PgPool, id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE users SET last_login_at = NOW() WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }
}
