//! Pagination and free-text search helpers shared by the repository and API
//! layers.

// ---------------------------------------------------------------------------
// Pagination defaults
// ---------------------------------------------------------------------------

/// Default page size for list endpoints.
pub const DEFAULT_PAGE_LIMIT: i64 = 20;

/// Maximum page size for list endpoints.
pub const MAX_PAGE_LIMIT: i64 = 100;

/// Maximum accepted length of a free-text search string.
pub const MAX_SEARCH_LENGTH: usize = 200;

// ---------------------------------------------------------------------------
// Query builder helpers
// ---------------------------------------------------------------------------

/// Normalize an optional text filter: trims whitespace and maps blank input
/// to `None` so an empty search box never narrows a query.
pub fn normalize_filter(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(|v| v.chars().take(MAX_SEARCH_LENGTH).collect())
}

/// Build a `%term%` pattern for `ILIKE`, escaping the LIKE metacharacters
/// (`\`, `%`, `_`) so user input matches literally.
///
/// # Examples
///
/// ```
/// use stageconnect_core::search::ilike_pattern;
/// assert_eq!(ilike_pattern("dance"), "%dance%");
/// assert_eq!(ilike_pattern("50%_off"), "%50\\%\\_off%");
/// ```
pub fn ilike_pattern(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len() + 2);
    escaped.push('%');
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}

/// Clamp a user-provided limit to valid bounds.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.unwrap_or(default).max(1).min(max)
}

/// Clamp a user-provided offset to non-negative.
pub fn clamp_offset(offset: Option<i64>) -> i64 {
    offset.unwrap_or(0).max(0)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
