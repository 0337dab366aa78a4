//! Integration tests for talent listing, profile updates and portfolio
//! ownership.

use sqlx::PgPool;
use stageconnect_core::talent_filter::{merge_category_results, RangeFilter, TalentFilter};
use stageconnect_db::models::portfolio::{CreatePortfolioItem, UpdatePortfolioItem};
use stageconnect_db::models::profile::{CreateProfile, RegisterCompany, UpdateProfile};
use stageconnect_db::models::user::CreateUser;
use stageconnect_db::repositories::{PortfolioRepo, ProfileRepo, TalentRepo, UserRepo};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn create_talent(
    pool: &PgPool,
    email: &str,
    first: &str,
    last: &str,
    category: &str,
) -> i64 {
    let user = UserRepo::create(
        pool,
        &CreateUser {
            email: email.to_string(),
            password_hash: "hash".to_string(),
            name: format!("{first} {last}"),
        },
    )
    .await
    .unwrap();
    ProfileRepo::create(
        pool,
        user.id,
        &CreateProfile {
            role: "talent".to_string(),
            first_name: Some(first.to_string()),
            last_name: Some(last.to_string()),
            category: Some(category.to_string()),
        },
    )
    .await
    .unwrap();
    user.id
}

fn new_item(title: &str) -> CreatePortfolioItem {
    CreatePortfolioItem {
        title: title.to_string(),
        description: None,
        media_type: "image".to_string(),
        media_url: "https://cdn.example.com/headshot.jpg".to_string(),
        thumbnail_url: None,
        is_featured: false,
        display_order: None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn talent_listing_filters_by_category_and_counts_portfolio(pool: PgPool) {
    let sarah = create_talent(&pool, "sarah@talent.test", "Sarah", "Kapoor", "actor").await;
    let raj = create_talent(&pool, "raj@talent.test", "Raj", "Mehta", "singer").await;
    PortfolioRepo::create(&pool, sarah, &new_item("Headshot"))
        .await
        .unwrap();

    let all = TalentRepo::list_all(&pool).await.unwrap();
    assert_eq!(all.len(), 2);

    let actors = TalentRepo::list_by_category(&pool, "actor").await.unwrap();
    assert_eq!(actors.len(), 1);
    assert_eq!(actors[0].user_id, sarah);
    assert_eq!(actors[0].portfolio_count, 1);

    let singers = TalentRepo::list_by_category(&pool, "singer").await.unwrap();
    assert_eq!(singers[0].user_id, raj);
    assert_eq!(singers[0].portfolio_count, 0);

    let merged = merge_category_results(vec![actors, singers.clone(), singers]);
    assert_eq!(merged.len(), 2);
}

#[sqlx::test(migrations = "./migrations")]
async fn employers_are_not_listed_as_talent(pool: PgPool) {
    create_talent(&pool, "sarah@talent.test", "Sarah", "Kapoor", "actor").await;
    let user = UserRepo::create(
        &pool,
        &CreateUser {
            email: "casting@studio.test".to_string(),
            password_hash: "hash".to_string(),
            name: "Casting".to_string(),
        },
    )
    .await
    .unwrap();
    ProfileRepo::create(
        &pool,
        user.id,
        &CreateProfile {
            role: "employer".to_string(),
            first_name: None,
            last_name: None,
            category: None,
        },
    )
    .await
    .unwrap();

    let all = TalentRepo::list_all(&pool).await.unwrap();
    assert_eq!(all.len(), 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn profile_update_feeds_in_memory_filter(pool: PgPool) {
    let sarah = create_talent(&pool, "sarah@talent.test", "Sarah", "Kapoor", "actor").await;
    let raj = create_talent(&pool, "raj@talent.test", "Raj", "Mehta", "actor").await;

    ProfileRepo::update(
        &pool,
        sarah,
        &UpdateProfile {
            address: Some("Bandra, Mumbai".to_string()),
            age: Some(25),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();
    ProfileRepo::update(
        &pool,
        raj,
        &UpdateProfile {
            address: Some("Connaught Place, Delhi".to_string()),
            age: Some(40),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();

    let base = TalentRepo::list_all(&pool).await.unwrap();
    let filter = TalentFilter {
        location: Some("mumbai".to_string()),
        age: RangeFilter::new(Some(20.0), Some(30.0)),
        ..Default::default()
    };
    let result = filter.apply(&base);
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].user_id, sarah);
}

#[sqlx::test(migrations = "./migrations")]
async fn profile_update_leaves_unset_fields_untouched(pool: PgPool) {
    let sarah = create_talent(&pool, "sarah@talent.test", "Sarah", "Kapoor", "actor").await;

    let updated = ProfileRepo::update(
        &pool,
        sarah,
        &UpdateProfile {
            skills: Some(vec!["Kathak".to_string(), "Improv".to_string()]),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(updated.first_name.as_deref(), Some("Sarah"));
    assert_eq!(updated.category.as_deref(), Some("actor"));
    assert_eq!(updated.skills, vec!["Kathak", "Improv"]);
}

#[sqlx::test(migrations = "./migrations")]
async fn register_company_requires_employer_profile(pool: PgPool) {
    let sarah = create_talent(&pool, "sarah@talent.test", "Sarah", "Kapoor", "actor").await;
    let input = RegisterCompany {
        company_name: "Silver Screen Studios".to_string(),
        industry: Some("Film".to_string()),
        website: None,
        company_size: None,
        bio: None,
        address: None,
        city: None,
    };
    let result = ProfileRepo::register_company(&pool, sarah, &input)
        .await
        .unwrap();
    assert!(result.is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn portfolio_items_append_in_display_order(pool: PgPool) {
    let sarah = create_talent(&pool, "sarah@talent.test", "Sarah", "Kapoor", "actor").await;

    let first = PortfolioRepo::create(&pool, sarah, &new_item("Headshot"))
        .await
        .unwrap();
    let second = PortfolioRepo::create(&pool, sarah, &new_item("Showreel"))
        .await
        .unwrap();
    assert_eq!(first.display_order, 0);
    assert_eq!(second.display_order, 1);

    let items = PortfolioRepo::list_by_user(&pool, sarah).await.unwrap();
    let titles: Vec<&str> = items.iter().map(|i| i.title.as_str()).collect();
    assert_eq!(titles, vec!["Headshot", "Showreel"]);
}

#[sqlx::test(migrations = "./migrations")]
async fn portfolio_mutations_are_owner_scoped(pool: PgPool) {
    let sarah = create_talent(&pool, "sarah@talent.test", "Sarah", "Kapoor", "actor").await;
    let raj = create_talent(&pool, "raj@talent.test", "Raj", "Mehta", "singer").await;
    let item = PortfolioRepo::create(&pool, sarah, &new_item("Headshot"))
        .await
        .unwrap();

    let patch = UpdatePortfolioItem {
        is_featured: Some(true),
        ..Default::default()
    };
    assert!(PortfolioRepo::update(&pool, item.id, raj, &patch)
        .await
        .unwrap()
        .is_none());
    assert!(!PortfolioRepo::delete(&pool, item.id, raj).await.unwrap());
    assert!(!PortfolioRepo::belongs_to(&pool, item.id, raj).await.unwrap());

    let updated = PortfolioRepo::update(&pool, item.id, sarah, &patch)
        .await
        .unwrap()
        .unwrap();
    assert!(updated.is_featured);
    assert_eq!(updated.title, "Headshot");

    let featured = PortfolioRepo::list_featured(&pool, sarah).await.unwrap();
    assert_eq!(featured.len(), 1);

    assert!(PortfolioRepo::delete(&pool, item.id, sarah).await.unwrap());
}
