//! Read-only queries backing the talent browse page.

use sqlx::PgPool;

use crate::models::talent::TalentProfile;

/// Select list for [`TalentProfile`] over `profiles p JOIN users u`.
const SELECT: &str = "\
    SELECT u.id AS user_id, p.id AS profile_id, u.name, \
           p.first_name, p.last_name, p.display_name, p.image_url, \
           p.category, p.address, p.city, p.age, p.height_cm, p.weight_kg, \
           p.hourly_rate, p.specializations, p.languages, p.skills, p.gig_count, \
           (SELECT COUNT(*) FROM portfolio_items pi WHERE pi.user_id = u.id) AS portfolio_count, \
           p.created_at \
    FROM profiles p \
    JOIN users u ON u.id = p.user_id \
    WHERE p.role = 'talent' AND u.is_active = true";

/// Queries over talent profiles.
pub struct TalentRepo;

impl TalentRepo {
    /// All active talent profiles, newest first.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<TalentProfile>, sqlx::Error> {
        let query = format!("{SELECT} ORDER BY p.created_at DESC, p.id DESC");
        sqlx::query_as::<_, TalentProfile>(&query)
            .fetch_all(pool)
            .await
    }

    /// Active talent profiles in one category, newest first.
    pub async fn list_by_category(
        pool: &PgPool,
        category: &str,
    ) -> Result<Vec<TalentProfile>, sqlx::Error> {
        let query = format!("{SELECT} AND p.category = $1 ORDER BY p.created_at DESC, p.id DESC");
        sqlx::query_as::<_, TalentProfile>(&query)
            .bind(category)
            .fetch_all(pool)
            .await
    }
}
