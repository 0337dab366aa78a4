//! Shared response envelope types for API handlers.
//!
//! Successful responses use `{ "success": true, "data": ..., "message"? }`;
//! failures are rendered by [`AppError`](crate::error::AppError) with
//! `success: false`.

use serde::Serialize;

/// Standard success envelope.
///
/// ```ignore
/// Ok(Json(DataResponse::new(items)))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T: Serialize> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
            message: None,
        }
    }

    /// Attach a human-readable confirmation, e.g. for mutations.
    pub fn with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data,
            message: Some(message.into()),
        }
    }
}

/// Payload for mutations that have nothing to return beyond the affected id.
#[derive(Debug, Serialize)]
pub struct Deleted {
    pub id: stageconnect_core::types::DbId,
}
