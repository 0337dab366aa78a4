//! Job posting enums, validation, and search normalization.

use serde::Deserialize;

use crate::error::CoreError;
use crate::search::normalize_filter;
use crate::talent::TalentCategory;
use crate::text_enum::define_text_enum;
use crate::types::Timestamp;

define_text_enum! {
    /// Lifecycle of a job posting. Only `active` jobs are searchable.
    JobStatus("job status") {
        Active = "active",
        Inactive = "inactive",
        Closed = "closed",
        Draft = "draft",
    }
}

define_text_enum! {
    /// Where the work happens.
    LocationType("location type") {
        OnSite = "on_site",
        Remote = "remote",
        Hybrid = "hybrid",
    }
}

define_text_enum! {
    /// Engagement shape of the job.
    JobType("job type") {
        FullTime = "full_time",
        PartTime = "part_time",
        Contract = "contract",
        Freelance = "freelance",
        OneTime = "one_time",
    }
}

/// Maximum length for a job title (characters).
pub const MAX_TITLE_LENGTH: usize = 200;

/// Maximum length for a job description (characters).
pub const MAX_DESCRIPTION_LENGTH: usize = 20_000;

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate a job title: non-blank and within length limits.
pub fn validate_title(title: &str) -> Result<(), CoreError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation("Job title is required".into()));
    }
    if trimmed.chars().count() > MAX_TITLE_LENGTH {
        return Err(CoreError::Validation(format!(
            "Job title exceeds maximum length of {MAX_TITLE_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Validate a job description: non-blank and within length limits.
pub fn validate_description(description: &str) -> Result<(), CoreError> {
    if description.trim().is_empty() {
        return Err(CoreError::Validation("Job description is required".into()));
    }
    if description.chars().count() > MAX_DESCRIPTION_LENGTH {
        return Err(CoreError::Validation(format!(
            "Job description exceeds maximum length of {MAX_DESCRIPTION_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Validate a compensation range. Both bounds are optional; when present
/// they must be non-negative and `min <= max`.
pub fn validate_compensation(min: Option<f64>, max: Option<f64>) -> Result<(), CoreError> {
    for v in [min, max].into_iter().flatten() {
        if !v.is_finite() || v < 0.0 {
            return Err(CoreError::Validation(
                "Compensation must be a non-negative number".into(),
            ));
        }
    }
    if let (Some(lo), Some(hi)) = (min, max) {
        if lo > hi {
            return Err(CoreError::Validation(format!(
                "Compensation minimum ({lo}) exceeds maximum ({hi})"
            )));
        }
    }
    Ok(())
}

/// Validate that a new application deadline is in the future.
pub fn validate_deadline(deadline: Option<Timestamp>, now: Timestamp) -> Result<(), CoreError> {
    match deadline {
        Some(d) if d <= now => Err(CoreError::Validation(
            "Application deadline must be in the future".into(),
        )),
        _ => Ok(()),
    }
}

/// Whether a job currently accepts auditions: it must be `active` and its
/// deadline (if any) must not have passed.
pub fn is_accepting_applications(
    status: JobStatus,
    deadline: Option<Timestamp>,
    now: Timestamp,
) -> bool {
    status == JobStatus::Active && deadline.map_or(true, |d| d > now)
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

/// Raw query parameters for job search, as received from the client.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct JobSearchParams {
    pub talent_category: Option<String>,
    pub location_type: Option<String>,
    pub job_type: Option<String>,
    pub city: Option<String>,
    pub search: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Validated job search filters. `None` means "do not filter".
#[derive(Debug, Default, Clone, PartialEq)]
pub struct JobSearch {
    pub talent_category: Option<TalentCategory>,
    pub location_type: Option<LocationType>,
    pub job_type: Option<JobType>,
    pub city: Option<String>,
    pub search: Option<String>,
}

impl JobSearch {
    /// Parse and normalize raw parameters. Blank values are ignored; the
    /// literal `all` means "no filter" for the enumerated fields.
    pub fn from_params(params: &JobSearchParams) -> Result<Self, CoreError> {
        fn parse_enum<T: std::str::FromStr<Err = CoreError>>(
            raw: Option<&str>,
        ) -> Result<Option<T>, CoreError> {
            match normalize_filter(raw) {
                Some(v) if v.eq_ignore_ascii_case("all") => Ok(None),
                Some(v) => v.parse().map(Some),
                None => Ok(None),
            }
        }

        Ok(Self {
            talent_category: parse_enum(params.talent_category.as_deref())?,
            location_type: parse_enum(params.location_type.as_deref())?,
            job_type: parse_enum(params.job_type.as_deref())?,
            city: normalize_filter(params.city.as_deref()),
            search: normalize_filter(params.search.as_deref()),
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
