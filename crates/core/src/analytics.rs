//! Per-user analytics rollups.
//!
//! Every rollup is recomputed from grouped counts on each request; nothing is
//! cached or maintained incrementally. Engagement numbers with no real source
//! (profile views, connections) are reported as [`Metric::NotImplemented`]
//! rather than invented.

use serde::Serialize;

use crate::audition::AuditionStatus;
use crate::job::JobStatus;
use crate::types::DbId;

/// Maximum number of featured portfolio items shown as highlights.
pub const MAX_HIGHLIGHTS: usize = 6;

/// Maximum number of jobs listed in an employer's "most applied" list.
pub const MAX_TOP_JOBS: usize = 5;

/// Marker for a dashboard metric with no data source. Serializes as
/// `{"status": "not_implemented"}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Metric {
    NotImplemented,
}

/// Engagement figures shown on dashboards. None of these are tracked yet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EngagementMetrics {
    pub profile_views: Metric,
    pub connections: Metric,
    pub connection_growth_pct: Metric,
}

impl Default for EngagementMetrics {
    fn default() -> Self {
        Self {
            profile_views: Metric::NotImplemented,
            connections: Metric::NotImplemented,
            connection_growth_pct: Metric::NotImplemented,
        }
    }
}

/// One `(status, count)` bucket.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusCount {
    pub status: &'static str,
    pub count: i64,
}

/// Expand grouped counts into one bucket per known status, in declaration
/// order, filling absent statuses with zero. Unknown labels are ignored.
fn bucket<S: Copy + PartialEq>(
    all: &[S],
    as_str: fn(S) -> &'static str,
    rows: &[(String, i64)],
) -> Vec<StatusCount> {
    all.iter()
        .map(|s| {
            let label = as_str(*s);
            let count = rows
                .iter()
                .filter(|(status, _)| status == label)
                .map(|(_, c)| *c)
                .sum();
            StatusCount { status: label, count }
        })
        .collect()
}

fn count_of(buckets: &[StatusCount], status: &str) -> i64 {
    buckets
        .iter()
        .find(|b| b.status == status)
        .map_or(0, |b| b.count)
}

// ---------------------------------------------------------------------------
// Talent
// ---------------------------------------------------------------------------

/// A talent's audition counts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuditionStats {
    pub total: i64,
    /// Auditions still in a non-terminal state.
    pub active: i64,
    pub selected: i64,
    pub rejected: i64,
    pub withdrawn: i64,
    /// `selected / (selected + rejected)` as a percentage with one decimal;
    /// `None` until at least one audition has been decided.
    pub success_rate: Option<f64>,
    pub by_status: Vec<StatusCount>,
}

impl AuditionStats {
    /// Build from `GROUP BY status` rows.
    pub fn from_counts(rows: &[(String, i64)]) -> Self {
        let by_status = bucket(AuditionStatus::ALL, AuditionStatus::as_str, rows);
        let total = by_status.iter().map(|b| b.count).sum();
        let active = AuditionStatus::ALL
            .iter()
            .filter(|s| !s.is_terminal())
            .map(|s| count_of(&by_status, s.as_str()))
            .sum();
        let selected = count_of(&by_status, AuditionStatus::Selected.as_str());
        let rejected = count_of(&by_status, AuditionStatus::Rejected.as_str());
        let withdrawn = count_of(&by_status, AuditionStatus::Withdrawn.as_str());

        let decided = selected + rejected;
        let success_rate = (decided > 0)
            .then(|| ((selected as f64 / decided as f64) * 1000.0).round() / 10.0);

        Self {
            total,
            active,
            selected,
            rejected,
            withdrawn,
            success_rate,
            by_status,
        }
    }
}

/// Portfolio items that can be picked as profile highlights.
pub trait Highlightable {
    fn is_featured(&self) -> bool;
    fn display_order(&self) -> i32;
}

/// Featured items ordered by display order, capped at [`MAX_HIGHLIGHTS`].
pub fn highlights<T: Highlightable + Clone>(items: &[T]) -> Vec<T> {
    let mut featured: Vec<T> = items.iter().filter(|i| i.is_featured()).cloned().collect();
    featured.sort_by_key(|i| i.display_order());
    featured.truncate(MAX_HIGHLIGHTS);
    featured
}

// ---------------------------------------------------------------------------
// Employer
// ---------------------------------------------------------------------------

/// Application count for one of an employer's jobs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobApplications {
    pub job_id: DbId,
    pub title: String,
    pub status: String,
    pub application_count: i64,
}

/// Rollup over all jobs posted by one employer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmployerRollup {
    pub total_jobs: i64,
    pub active_jobs: i64,
    pub jobs_by_status: Vec<StatusCount>,
    pub total_applications: i64,
    pub applications_by_status: Vec<StatusCount>,
    /// Jobs with the most applications, descending; ties keep input order.
    pub top_jobs: Vec<JobApplications>,
}

impl EmployerRollup {
    /// Build from the employer's jobs (with application counts) and the
    /// `GROUP BY status` counts of all auditions on those jobs.
    pub fn from_jobs(jobs: &[JobApplications], audition_counts: &[(String, i64)]) -> Self {
        let job_rows: Vec<(String, i64)> = jobs.iter().map(|j| (j.status.clone(), 1)).collect();
        let jobs_by_status = bucket(JobStatus::ALL, JobStatus::as_str, &job_rows);
        let applications_by_status =
            bucket(AuditionStatus::ALL, AuditionStatus::as_str, audition_counts);

        let mut top_jobs: Vec<JobApplications> = jobs
            .iter()
            .filter(|j| j.application_count > 0)
            .cloned()
            .collect();
        top_jobs.sort_by(|a, b| b.application_count.cmp(&a.application_count));
        top_jobs.truncate(MAX_TOP_JOBS);

        Self {
            total_jobs: jobs.len() as i64,
            active_jobs: count_of(&jobs_by_status, JobStatus::Active.as_str()),
            jobs_by_status,
            total_applications: jobs.iter().map(|j| j.application_count).sum(),
            applications_by_status,
            top_jobs,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
