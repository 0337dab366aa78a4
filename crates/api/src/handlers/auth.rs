//! Handlers for the `/auth` resource (register, login, refresh, logout, me).

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use stageconnect_core::error::CoreError;
use stageconnect_core::profile;
use stageconnect_core::roles::Role;
use stageconnect_core::talent::TalentCategory;
use stageconnect_db::models::profile::{CreateProfile, Profile};
use stageconnect_db::models::session::CreateSession;
use stageconnect_db::models::user::{CreateUser, UserResponse};
use stageconnect_db::repositories::{ProfileRepo, SessionRepo, UserRepo};
use validator::Validate;

use crate::auth::jwt::{generate_access_token, generate_refresh_token, hash_refresh_token};
use crate::auth::password::{hash_password, verify_password};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/register`.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 8, message = "must be at least 8 characters"))]
    pub password: String,
    #[validate(length(min = 1, max = 100, message = "must be between 1 and 100 characters"))]
    pub name: String,
    pub role: Role,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// Only meaningful for talent accounts.
    pub category: Option<TalentCategory>,
}

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    pub password: String,
}

/// Request body for `POST /auth/refresh`.
#[derive(Debug, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

/// Returned by register, login and refresh.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    pub user: UserResponse,
}

/// Returned by `GET /auth/me`.
#[derive(Debug, Serialize)]
pub struct SessionInfo {
    pub user: UserResponse,
    pub profile: Profile,
}

#[derive(Debug, Serialize)]
pub struct LogoutResponse {
    pub revoked_sessions: u64,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/register
///
/// Create an account and its profile, then sign the user in.
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterRequest>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    profile::validate_name("First name", input.first_name.as_deref())?;
    profile::validate_name("Last name", input.last_name.as_deref())?;
    if input.role == Role::Employer && input.category.is_some() {
        return Err(AppError::Core(CoreError::Validation(
            "Employer accounts do not have a talent category".into(),
        )));
    }

    let email = input.email.trim().to_lowercase();
    if UserRepo::find_by_email(&state.pool, &email).await?.is_some() {
        return Err(AppError::Core(CoreError::Conflict(
            "An account with this email already exists".into(),
        )));
    }

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let (user, profile) = UserRepo::create_with_profile(
        &state.pool,
        &CreateUser {
            email,
            password_hash,
            name: input.name.trim().to_string(),
        },
        &CreateProfile {
            role: input.role.as_str().to_string(),
            first_name: input.first_name.clone(),
            last_name: input.last_name.clone(),
            category: input.category.map(|c| c.as_str().to_string()),
        },
    )
    .await?;

    tracing::info!(user_id = user.id, role = %profile.role, "User registered");

    let user_response = UserResponse::from_user(&user, &profile.role);
    let response = create_auth_response(&state, user_response).await?;

    Ok((
        StatusCode::CREATED,
        Json(DataResponse::with_message(response, "Account created")),
    ))
}

/// POST /api/v1/auth/login
///
/// Authenticate with email and password.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<DataResponse<AuthResponse>>> {
    input.validate()?;

    let invalid = || AppError::Core(CoreError::Unauthorized("Invalid email or password".into()));

    let user = UserRepo::find_by_email(&state.pool, input.email.trim())
        .await?
        .ok_or_else(invalid)?;

    if !user.is_active {
        return Err(AppError::Core(CoreError::Forbidden(
            "Account is deactivated".into(),
        )));
    }

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !password_valid {
        tracing::info!(user_id = user.id, "Failed login attempt");
        return Err(invalid());
    }

    UserRepo::record_successful_login(&state.pool, user.id).await?;

    let role = ProfileRepo::role_for_user(&state.pool, user.id)
        .await?
        .ok_or_else(|| AppError::InternalError(format!("User {} has no profile", user.id)))?;

    let response = create_auth_response(&state, UserResponse::from_user(&user, &role)).await?;
    Ok(Json(DataResponse::new(response)))
}

/// POST /api/v1/auth/refresh
///
/// Exchange a refresh token for a new token pair. The old session is revoked.
pub async fn refresh(
    State(state): State<AppState>,
    Json(input): Json<RefreshRequest>,
) -> AppResult<Json<DataResponse<AuthResponse>>> {
    let token_hash = hash_refresh_token(&input.refresh_token);

    let session = SessionRepo::find_by_refresh_token_hash(&state.pool, &token_hash)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid or expired refresh token".into(),
            ))
        })?;

    // A concurrent refresh with the same token may have revoked it first.
    if !SessionRepo::revoke(&state.pool, session.id).await? {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid or expired refresh token".into(),
        )));
    }

    let user = UserRepo::find_by_id(&state.pool, session.user_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("User no longer exists".into())))?;

    if !user.is_active {
        return Err(AppError::Core(CoreError::Forbidden(
            "Account is deactivated".into(),
        )));
    }

    let role = ProfileRepo::role_for_user(&state.pool, user.id)
        .await?
        .ok_or_else(|| AppError::InternalError(format!("User {} has no profile", user.id)))?;

    let response = create_auth_response(&state, UserResponse::from_user(&user, &role)).await?;
    Ok(Json(DataResponse::new(response)))
}

/// POST /api/v1/auth/logout
///
/// Revoke every session of the caller.
pub async fn logout(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<LogoutResponse>>> {
    let revoked_sessions = SessionRepo::revoke_all_for_user(&state.pool, auth.user_id).await?;
    tracing::info!(user_id = auth.user_id, revoked_sessions, "User logged out");
    Ok(Json(DataResponse::with_message(
        LogoutResponse { revoked_sessions },
        "Logged out",
    )))
}

/// GET /api/v1/auth/me
///
/// The current account and profile.
pub async fn me(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<SessionInfo>>> {
    let user = UserRepo::find_by_id(&state.pool, auth.user_id)
        .await?
        .ok_or_else(|| AppError::not_found("User", auth.user_id))?;
    let profile = ProfileRepo::find_by_user(&state.pool, auth.user_id)
        .await?
        .ok_or_else(|| AppError::not_found("Profile", auth.user_id))?;

    Ok(Json(DataResponse::new(SessionInfo {
        user: UserResponse::from_user(&user, &profile.role),
        profile,
    })))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Issue an access token and a refresh session for `user`.
async fn create_auth_response(state: &AppState, user: UserResponse) -> AppResult<AuthResponse> {
    let access_token = generate_access_token(user.id, &user.role, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    let (refresh_plaintext, refresh_hash) = generate_refresh_token();
    let expires_at =
        Utc::now() + chrono::Duration::days(state.config.jwt.refresh_token_expiry_days);

    SessionRepo::create(
        &state.pool,
        &CreateSession {
            user_id: user.id,
            refresh_token_hash: refresh_hash,
            expires_at,
            user_agent: None,
            ip_address: None,
        },
    )
    .await?;

    Ok(AuthResponse {
        access_token,
        refresh_token: refresh_plaintext,
        expires_in: state.config.jwt.access_token_expiry_mins * 60,
        user,
    })
}
