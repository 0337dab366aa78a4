//! Blog post visibility, validation, and excerpt derivation.

use crate::error::CoreError;
use crate::text_enum::define_text_enum;

define_text_enum! {
    /// Who can read a blog post.
    Visibility("visibility") {
        Public = "public",
        Private = "private",
    }
}

pub const MAX_TITLE_LENGTH: usize = 200;
pub const MAX_CONTENT_LENGTH: usize = 50_000;
pub const MAX_COMMENT_LENGTH: usize = 2_000;
pub const MAX_TAGS: usize = 10;

/// Length of the excerpt derived from content when none is supplied.
pub const EXCERPT_LENGTH: usize = 160;

pub fn validate_title(title: &str) -> Result<(), CoreError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation("Blog title is required".into()));
    }
    if trimmed.chars().count() > MAX_TITLE_LENGTH {
        return Err(CoreError::Validation(format!(
            "Blog title exceeds maximum length of {MAX_TITLE_LENGTH} characters"
        )));
    }
    Ok(())
}

pub fn validate_content(content: &str) -> Result<(), CoreError> {
    if content.trim().is_empty() {
        return Err(CoreError::Validation("Blog content is required".into()));
    }
    if content.chars().count() > MAX_CONTENT_LENGTH {
        return Err(CoreError::Validation(format!(
            "Blog content exceeds maximum length of {MAX_CONTENT_LENGTH} characters"
        )));
    }
    Ok(())
}

pub fn validate_tags(tags: &[String]) -> Result<(), CoreError> {
    if tags.len() > MAX_TAGS {
        return Err(CoreError::Validation(format!(
            "A blog post may have at most {MAX_TAGS} tags"
        )));
    }
    Ok(())
}

pub fn validate_comment(content: &str) -> Result<(), CoreError> {
    if content.trim().is_empty() {
        return Err(CoreError::Validation("Comment must not be empty".into()));
    }
    if content.chars().count() > MAX_COMMENT_LENGTH {
        return Err(CoreError::Validation(format!(
            "Comment exceeds maximum length of {MAX_COMMENT_LENGTH} characters"
        )));
    }
    Ok(())
}

/// First [`EXCERPT_LENGTH`] characters of the content with whitespace
/// collapsed, cut at a word boundary and suffixed with an ellipsis when
/// truncated.
pub fn derive_excerpt(content: &str) -> String {
    let collapsed = content.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.chars().count() <= EXCERPT_LENGTH {
        return collapsed;
    }
    let cut: String = collapsed.chars().take(EXCERPT_LENGTH).collect();
    let trimmed = match cut.rfind(' ') {
        Some(idx) if idx > 0 => &cut[..idx],
        _ => cut.as_str(),
    };
    format!("{trimmed}...")
}
