//! Portfolio item media types and validation.

use crate::error::CoreError;
use crate::text_enum::define_text_enum;

define_text_enum! {
    /// Kind of media asset a portfolio item points at.
    MediaType("media type") {
        Image = "image",
        Video = "video",
        Audio = "audio",
        Document = "document",
    }
}

/// Maximum length for a portfolio item title (characters).
pub const MAX_TITLE_LENGTH: usize = 200;

/// Maximum length for a portfolio item description (characters).
pub const MAX_DESCRIPTION_LENGTH: usize = 2_000;

/// Maximum length for media and thumbnail URLs.
pub const MAX_URL_LENGTH: usize = 2_048;

/// Validate a portfolio item title: non-blank and within length limits.
pub fn validate_title(title: &str) -> Result<(), CoreError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation("Portfolio title is required".into()));
    }
    if trimmed.chars().count() > MAX_TITLE_LENGTH {
        return Err(CoreError::Validation(format!(
            "Portfolio title exceeds maximum length of {MAX_TITLE_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Validate an optional description length.
pub fn validate_description(description: Option<&str>) -> Result<(), CoreError> {
    match description {
        Some(d) if d.chars().count() > MAX_DESCRIPTION_LENGTH => Err(CoreError::Validation(
            format!("Portfolio description exceeds maximum length of {MAX_DESCRIPTION_LENGTH} characters"),
        )),
        _ => Ok(()),
    }
}

/// Validate a media URL. Uploads are stored elsewhere; only absolute
/// `http(s)` URLs or root-relative paths are accepted.
pub fn validate_media_url(url: &str) -> Result<(), CoreError> {
    if url.len() > MAX_URL_LENGTH {
        return Err(CoreError::Validation(format!(
            "Media URL exceeds maximum length of {MAX_URL_LENGTH} characters"
        )));
    }
    let ok = url.starts_with("https://") || url.starts_with("http://") || url.starts_with('/');
    if !ok {
        return Err(CoreError::Validation(format!(
            "Invalid media URL '{url}'. Must be an http(s) URL or a root-relative path"
        )));
    }
    Ok(())
}
