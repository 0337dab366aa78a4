//! Profile field validation for talent profiles, company registration, and
//! the experience/education entries shown on a profile page.

use chrono::NaiveDate;

use crate::error::CoreError;

/// Maximum length for name-like fields (first/last/display/company name).
pub const MAX_NAME_LENGTH: usize = 100;

/// Maximum length for a profile bio or company description.
pub const MAX_BIO_LENGTH: usize = 2_000;

/// Maximum number of entries in an array attribute (skills, languages, ...).
pub const MAX_LIST_ITEMS: usize = 30;

/// Maximum length of a single array attribute entry.
pub const MAX_LIST_ITEM_LENGTH: usize = 60;

/// Accepted age range for talent profiles.
pub const MIN_AGE: i32 = 0;
pub const MAX_AGE: i32 = 120;

/// Validate an optional name-like field: when present it must be non-blank
/// and within [`MAX_NAME_LENGTH`].
pub fn validate_name(label: &str, value: Option<&str>) -> Result<(), CoreError> {
    let Some(v) = value else {
        return Ok(());
    };
    if v.trim().is_empty() {
        return Err(CoreError::Validation(format!("{label} must not be blank")));
    }
    if v.chars().count() > MAX_NAME_LENGTH {
        return Err(CoreError::Validation(format!(
            "{label} exceeds maximum length of {MAX_NAME_LENGTH} characters"
        )));
    }
    Ok(())
}

pub fn validate_bio(bio: Option<&str>) -> Result<(), CoreError> {
    match bio {
        Some(b) if b.chars().count() > MAX_BIO_LENGTH => Err(CoreError::Validation(format!(
            "Bio exceeds maximum length of {MAX_BIO_LENGTH} characters"
        ))),
        _ => Ok(()),
    }
}

pub fn validate_age(age: Option<i32>) -> Result<(), CoreError> {
    match age {
        Some(a) if !(MIN_AGE..=MAX_AGE).contains(&a) => Err(CoreError::Validation(format!(
            "Age must be between {MIN_AGE} and {MAX_AGE}"
        ))),
        _ => Ok(()),
    }
}

/// Validate a measurement or rate: when present it must be finite and
/// strictly positive.
pub fn validate_positive(label: &str, value: Option<f64>) -> Result<(), CoreError> {
    match value {
        Some(v) if !v.is_finite() || v <= 0.0 => Err(CoreError::Validation(format!(
            "{label} must be a positive number"
        ))),
        _ => Ok(()),
    }
}

/// Validate an array attribute such as skills or languages.
pub fn validate_list(label: &str, items: Option<&[String]>) -> Result<(), CoreError> {
    let Some(items) = items else {
        return Ok(());
    };
    if items.len() > MAX_LIST_ITEMS {
        return Err(CoreError::Validation(format!(
            "{label} may contain at most {MAX_LIST_ITEMS} entries"
        )));
    }
    if let Some(bad) = items
        .iter()
        .find(|i| i.trim().is_empty() || i.chars().count() > MAX_LIST_ITEM_LENGTH)
    {
        return Err(CoreError::Validation(format!(
            "Invalid {label} entry '{bad}': must be 1-{MAX_LIST_ITEM_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Trim entries and drop duplicates (case-insensitive), keeping first-seen
/// order and spelling.
pub fn normalize_list(items: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(items.len());
    for item in items.iter().map(|i| i.trim()) {
        if !out.iter().any(|o| o.eq_ignore_ascii_case(item)) {
            out.push(item.to_string());
        }
    }
    out
}

/// Validate a company website URL.
pub fn validate_website(website: Option<&str>) -> Result<(), CoreError> {
    match website {
        Some(w) if !(w.starts_with("https://") || w.starts_with("http://")) => {
            Err(CoreError::Validation(format!(
                "Invalid website '{w}'. Must start with http:// or https://"
            )))
        }
        _ => Ok(()),
    }
}

/// Name shown for a profile: the display name when set, otherwise
/// "first last", otherwise the fallback (usually the account name).
pub fn resolve_display_name(
    display_name: Option<&str>,
    first_name: Option<&str>,
    last_name: Option<&str>,
    fallback: &str,
) -> String {
    if let Some(d) = display_name.map(str::trim).filter(|d| !d.is_empty()) {
        return d.to_string();
    }
    let full = format!(
        "{} {}",
        first_name.unwrap_or_default().trim(),
        last_name.unwrap_or_default().trim()
    );
    let full = full.trim();
    if full.is_empty() {
        fallback.to_string()
    } else {
        full.to_string()
    }
}

// ---------------------------------------------------------------------------
// Experience / education
// ---------------------------------------------------------------------------

/// Validate an experience date range. A current position has no end date.
pub fn validate_experience_dates(
    start: NaiveDate,
    end: Option<NaiveDate>,
    is_current: bool,
) -> Result<(), CoreError> {
    match end {
        Some(_) if is_current => Err(CoreError::Validation(
            "A current position cannot have an end date".into(),
        )),
        Some(e) if e < start => Err(CoreError::Validation(
            "End date must not be before start date".into(),
        )),
        _ => Ok(()),
    }
}

/// Validate an education year range.
pub fn validate_education_years(start: Option<i32>, end: Option<i32>) -> Result<(), CoreError> {
    for y in [start, end].into_iter().flatten() {
        if !(1900..=2100).contains(&y) {
            return Err(CoreError::Validation(format!("Invalid year {y}")));
        }
    }
    if let (Some(s), Some(e)) = (start, end) {
        if e < s {
            return Err(CoreError::Validation(
                "End year must not be before start year".into(),
            ));
        }
    }
    Ok(())
}
