//! Role guards.
//!
//! Each extractor wraps [`AuthUser`] and rejects with 403 when the caller's
//! role does not match. A missing or invalid token is still a 401.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use stageconnect_core::error::CoreError;
use stageconnect_core::roles::Role;

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Requires the `talent` role.
///
/// ```ignore
/// async fn talent_only(RequireTalent(user): RequireTalent) -> AppResult<Json<()>> {
///     Ok(Json(()))
/// }
/// ```
pub struct RequireTalent(pub AuthUser);

impl FromRequestParts<AppState> for RequireTalent {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if user.role != Role::Talent {
            return Err(AppError::Core(CoreError::Forbidden(
                "Talent role required".into(),
            )));
        }
        Ok(RequireTalent(user))
    }
}

/// Requires the `employer` role.
pub struct RequireEmployer(pub AuthUser);

impl FromRequestParts<AppState> for RequireEmployer {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if user.role != Role::Employer {
            return Err(AppError::Core(CoreError::Forbidden(
                "Employer role required".into(),
            )));
        }
        Ok(RequireEmployer(user))
    }
}
