//! Handlers for profiles, company registration, and the experience and
//! education entries shown on a profile page.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use stageconnect_core::analytics::highlights;
use stageconnect_core::error::CoreError;
use stageconnect_core::profile::{self, normalize_list};
use stageconnect_core::roles::Role;
use stageconnect_core::talent::TalentCategory;
use stageconnect_core::types::DbId;
use stageconnect_db::models::education::{CreateEducation, Education};
use stageconnect_db::models::experience::{CreateExperience, Experience};
use stageconnect_db::models::portfolio::PortfolioItem;
use stageconnect_db::models::profile::{Profile, RegisterCompany, UpdateProfile};
use stageconnect_db::repositories::{
    EducationRepo, ExperienceRepo, PortfolioRepo, ProfileRepo, UserRepo,
};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireEmployer;
use crate::response::{DataResponse, Deleted};
use crate::state::AppState;

/// A profile page: the profile row plus everything shown alongside it.
#[derive(Debug, Serialize)]
pub struct ProfileView {
    #[serde(flatten)]
    pub profile: Profile,
    pub name: String,
    /// Display name, else "first last", else the account name.
    pub resolved_name: String,
    pub experiences: Vec<Experience>,
    pub educations: Vec<Education>,
    /// Empty for employers.
    pub portfolio: Vec<PortfolioItem>,
    pub highlights: Vec<PortfolioItem>,
}

// ---------------------------------------------------------------------------
// GET /profiles/{user_id}
// ---------------------------------------------------------------------------

pub async fn get_profile(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
) -> AppResult<Json<DataResponse<ProfileView>>> {
    let user = UserRepo::find_by_id(&state.pool, user_id)
        .await?
        .ok_or_else(|| AppError::not_found("User", user_id))?;
    let profile = ProfileRepo::find_by_user(&state.pool, user_id)
        .await?
        .ok_or_else(|| AppError::not_found("Profile", user_id))?;

    let experiences = ExperienceRepo::list_by_user(&state.pool, user_id).await?;
    let educations = EducationRepo::list_by_user(&state.pool, user_id).await?;
    let portfolio = if profile.role == Role::Talent.as_str() {
        PortfolioRepo::list_by_user(&state.pool, user_id).await?
    } else {
        Vec::new()
    };

    let resolved_name = profile::resolve_display_name(
        profile.display_name.as_deref(),
        profile.first_name.as_deref(),
        profile.last_name.as_deref(),
        &user.name,
    );

    Ok(Json(DataResponse::new(ProfileView {
        highlights: highlights(&portfolio),
        profile,
        name: user.name,
        resolved_name,
        experiences,
        educations,
        portfolio,
    })))
}

// ---------------------------------------------------------------------------
// PUT /profiles/me
// ---------------------------------------------------------------------------

/// Partial update of the caller's own profile. Omitted fields are left as
/// they are; concurrent edits are last-write-wins.
pub async fn update_my_profile(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(mut input): Json<UpdateProfile>,
) -> AppResult<Json<DataResponse<Profile>>> {
    profile::validate_name("First name", input.first_name.as_deref())?;
    profile::validate_name("Last name", input.last_name.as_deref())?;
    profile::validate_name("Display name", input.display_name.as_deref())?;
    profile::validate_bio(input.bio.as_deref())?;
    profile::validate_age(input.age)?;
    profile::validate_positive("Height", input.height_cm)?;
    profile::validate_positive("Weight", input.weight_kg)?;
    profile::validate_positive("Hourly rate", input.hourly_rate)?;

    if let Some(category) = input.category.as_deref() {
        if auth.role != Role::Talent {
            return Err(AppError::Core(CoreError::Validation(
                "Only talent profiles have a category".into(),
            )));
        }
        category.parse::<TalentCategory>()?;
    }

    input.specializations = input.specializations.as_deref().map(normalize_list);
    input.languages = input.languages.as_deref().map(normalize_list);
    input.skills = input.skills.as_deref().map(normalize_list);
    profile::validate_list("specializations", input.specializations.as_deref())?;
    profile::validate_list("languages", input.languages.as_deref())?;
    profile::validate_list("skills", input.skills.as_deref())?;

    let updated = ProfileRepo::update(&state.pool, auth.user_id, &input)
        .await?
        .ok_or_else(|| AppError::not_found("Profile", auth.user_id))?;

    tracing::info!(user_id = auth.user_id, "Profile updated");

    Ok(Json(DataResponse::with_message(updated, "Profile updated")))
}

// ---------------------------------------------------------------------------
// POST /companies/register
// ---------------------------------------------------------------------------

pub async fn register_company(
    RequireEmployer(auth): RequireEmployer,
    State(state): State<AppState>,
    Json(input): Json<RegisterCompany>,
) -> AppResult<Json<DataResponse<Profile>>> {
    profile::validate_name("Company name", Some(input.company_name.as_str()))?;
    profile::validate_name("Industry", input.industry.as_deref())?;
    profile::validate_name("Company size", input.company_size.as_deref())?;
    profile::validate_website(input.website.as_deref())?;
    profile::validate_bio(input.bio.as_deref())?;

    let updated = ProfileRepo::register_company(&state.pool, auth.user_id, &input)
        .await?
        .ok_or_else(|| AppError::not_found("Profile", auth.user_id))?;

    tracing::info!(
        user_id = auth.user_id,
        company_name = %input.company_name,
        "Company registered",
    );

    Ok(Json(DataResponse::with_message(
        updated,
        "Company registered",
    )))
}

// ---------------------------------------------------------------------------
// Experiences
// ---------------------------------------------------------------------------

pub async fn add_experience(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateExperience>,
) -> AppResult<impl IntoResponse> {
    profile::validate_name("Title", Some(input.title.as_str()))?;
    profile::validate_name("Company", input.company.as_deref())?;
    profile::validate_bio(input.description.as_deref())?;
    profile::validate_experience_dates(input.start_date, input.end_date, input.is_current)?;

    let experience = ExperienceRepo::create(&state.pool, auth.user_id, &input).await?;

    tracing::info!(
        experience_id = experience.id,
        user_id = auth.user_id,
        "Experience added",
    );

    Ok((StatusCode::CREATED, Json(DataResponse::new(experience))))
}

pub async fn delete_experience(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Deleted>>> {
    if !ExperienceRepo::delete(&state.pool, id, auth.user_id).await? {
        return Err(AppError::not_found("Experience", id));
    }
    Ok(Json(DataResponse::with_message(
        Deleted { id },
        "Experience deleted",
    )))
}

// ---------------------------------------------------------------------------
// Educations
// ---------------------------------------------------------------------------

pub async fn add_education(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateEducation>,
) -> AppResult<impl IntoResponse> {
    profile::validate_name("Institution", Some(input.institution.as_str()))?;
    profile::validate_name("Degree", input.degree.as_deref())?;
    profile::validate_name("Field of study", input.field_of_study.as_deref())?;
    profile::validate_education_years(input.start_year, input.end_year)?;

    let education = EducationRepo::create(&state.pool, auth.user_id, &input).await?;

    tracing::info!(
        education_id = education.id,
        user_id = auth.user_id,
        "Education added",
    );

    Ok((StatusCode::CREATED, Json(DataResponse::new(education))))
}

pub async fn delete_education(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Deleted>>> {
    if !EducationRepo::delete(&state.pool, id, auth.user_id).await? {
        return Err(AppError::not_found("Education", id));
    }
    Ok(Json(DataResponse::with_message(
        Deleted { id },
        "Education deleted",
    )))
}
