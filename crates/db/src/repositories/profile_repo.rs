//! Repository for the `profiles` table.

use sqlx::PgPool;
use stageconnect_core::types::DbId;

use crate::models::profile::{CreateProfile, Profile, RegisterCompany, UpdateProfile};

/// Column list shared across queries to avoid repetition.
pub(crate) const COLUMNS: &str = "id, user_id, role, first_name, last_name, display_name, image_url, \
                        bio, phone, address, city, category, age, height_cm, weight_kg, \
                        hourly_rate, specializations, languages, skills, gig_count, \
                        company_name, industry, website, company_size, created_at, updated_at";

/// Provides CRUD operations for profiles.
pub struct ProfileRepo;

impl ProfileRepo {
    /// Create the profile for a newly registered user.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateProfile,
    ) -> Result<Profile, sqlx::Error> {
        let query = format!(
            "INSERT INTO profiles (user_id, role, first_name, last_name, category)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Profile>(&query)
            .bind(user_id)
            .bind(&input.role)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.category)
            .fetch_one(pool)
            .await
    }

    /// Find the profile belonging to a user.
    pub async fn find_by_user(pool: &PgPool, user_id: DbId) -> Result<Option<Profile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM profiles WHERE user_id = $1");
        sqlx::query_as::<_, Profile>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Resolve a user's role without loading the whole profile.
    pub async fn role_for_user(pool: &PgPool, user_id: DbId) -> Result<Option<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>("SELECT role FROM profiles WHERE user_id = $1")
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Update a profile. Only non-`None` fields in `input` are applied.
    ///
    /// There is no version check: concurrent edits are last-write-wins.
    /// Returns `None` if the user has no profile.
    pub async fn update(
        pool: &PgPool,
        user_id: DbId,
        input: &UpdateProfile,
    ) -> Result<Option<Profile>, sqlx::Error> {
        let query = format!(
            "UPDATE profiles SET
                first_name = COALESCE($2, first_name),
                last_name = COALESCE($3, last_name),
                display_name = COALESCE($4, display_name),
                image_url = COALESCE($5, image_url),
                bio = COALESCE($6, bio),
                phone = COALESCE($7, phone),
                address = COALESCE($8, address),
                city = COALESCE($9, city),
                category = COALESCE($10, category),
                age = COALESCE($11, age),
                height_cm = COALESCE($12, height_cm),
                weight_kg = COALESCE($13, weight_kg),
                hourly_rate = COALESCE($14, hourly_rate),
                specializations = COALESCE($15, specializations),
                languages = COALESCE($16, languages),
                skills = COALESCE($17, skills)
             WHERE user_id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Profile>(&query)
            .bind(user_id)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.display_name)
            .bind(&input.image_url)
            .bind(&input.bio)
            .bind(&input.phone)
            .bind(&input.address)
            .bind(&input.city)
            .bind(&input.category)
            .bind(input.age)
            .bind(input.height_cm)
            .bind(input.weight_kg)
            .bind(input.hourly_rate)
            .bind(&input.specializations)
            .bind(&input.languages)
            .bind(&input.skills)
            .fetch_optional(pool)
            .await
    }

    /// Fill in company details on an employer profile.
    ///
    /// Returns `None` if the user has no employer profile.
    pub async fn register_company(
        pool: &PgPool,
        user_id: DbId,
        input: &RegisterCompany,
    ) -> Result<Option<Profile>, sqlx::Error> {
        let query = format!(
            "UPDATE profiles SET
                company_name = $2,
                industry = COALESCE($3, industry),
                website = COALESCE($4, website),
                company_size = COALESCE($5, company_size),
                bio = COALESCE($6, bio),
                address = COALESCE($7, address),
                city = COALESCE($8, city)
             WHERE user_id = $1 AND role = 'employer'
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Profile>(&query)
            .bind(user_id)
            .bind(input.company_name.trim())
            .bind(&input.industry)
            .bind(&input.website)
            .bind(&input.company_size)
            .bind(&input.bio)
            .bind(&input.address)
            .bind(&input.city)
            .fetch_optional(pool)
            .await
    }
}
