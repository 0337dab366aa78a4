//! Audition status lifecycle.
//!
//! An audition moves forward along
//! `submitted -> under_review -> shortlisted -> audition_scheduled -> selected`.
//! Employers may skip ahead but never move back, and may reject from any
//! non-terminal state. Only the talent can withdraw, and only the talent can
//! delete, once the audition has ended in `rejected` or `withdrawn`.
//!
//! There are no time-driven transitions: a `submitted` audition stays
//! `submitted` until someone acts on it, even after the job's deadline.

use crate::error::CoreError;
use crate::text_enum::define_text_enum;

define_text_enum! {
    /// Status of a talent's application to a job. Declaration order is the
    /// progression order of the non-terminal chain.
    AuditionStatus("audition status") {
        Submitted = "submitted",
        UnderReview = "under_review",
        Shortlisted = "shortlisted",
        AuditionScheduled = "audition_scheduled",
        Selected = "selected",
        Rejected = "rejected",
        Withdrawn = "withdrawn",
    }
}

/// Maximum length for a cover letter (characters).
pub const MAX_COVER_LETTER_LENGTH: usize = 5_000;

/// Maximum length for employer notes on an audition (characters).
pub const MAX_NOTES_LENGTH: usize = 2_000;

/// Message returned when a talent applies twice to the same job.
pub const ALREADY_APPLIED_MESSAGE: &str = "You have already applied to this job";

impl AuditionStatus {
    /// `selected`, `rejected` and `withdrawn` end the lifecycle.
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            AuditionStatus::Selected | AuditionStatus::Rejected | AuditionStatus::Withdrawn
        )
    }

    /// Position along the progression chain; `None` for the failure states.
    fn rank(self) -> Option<u8> {
        match self {
            AuditionStatus::Submitted => Some(0),
            AuditionStatus::UnderReview => Some(1),
            AuditionStatus::Shortlisted => Some(2),
            AuditionStatus::AuditionScheduled => Some(3),
            AuditionStatus::Selected => Some(4),
            AuditionStatus::Rejected | AuditionStatus::Withdrawn => None,
        }
    }

    /// Whether an employer may move an audition from `self` to `next`.
    pub fn can_transition_to(self, next: AuditionStatus) -> bool {
        if self.is_terminal() {
            return false;
        }
        match next {
            AuditionStatus::Rejected => true,
            AuditionStatus::Withdrawn => false,
            _ => match (self.rank(), next.rank()) {
                (Some(from), Some(to)) => to > from,
                _ => false,
            },
        }
    }

    /// Statuses an employer may move to from `self`.
    pub fn employer_transitions(self) -> Vec<AuditionStatus> {
        Self::ALL
            .iter()
            .copied()
            .filter(|next| self.can_transition_to(*next))
            .collect()
    }

    /// Whether the talent may withdraw. `selected` and the failure states are
    /// final, so withdrawing is only possible while the audition is open.
    pub fn can_withdraw(self) -> bool {
        !self.is_terminal()
    }

    /// Whether the talent may delete the audition record.
    pub fn can_delete(self) -> bool {
        matches!(self, AuditionStatus::Rejected | AuditionStatus::Withdrawn)
    }
}

/// Validate an employer-driven status change.
pub fn validate_employer_transition(
    current: AuditionStatus,
    next: AuditionStatus,
) -> Result<(), CoreError> {
    if current.can_transition_to(next) {
        Ok(())
    } else {
        let allowed: Vec<&str> = current
            .employer_transitions()
            .into_iter()
            .map(AuditionStatus::as_str)
            .collect();
        Err(CoreError::Validation(format!(
            "Cannot move audition from '{current}' to '{next}'. Allowed transitions: {allowed:?}"
        )))
    }
}

/// Validate a talent-initiated withdrawal.
pub fn validate_withdraw(current: AuditionStatus) -> Result<(), CoreError> {
    if current.can_withdraw() {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Cannot withdraw an audition that is already '{current}'"
        )))
    }
}

/// Validate a talent-initiated delete.
pub fn validate_delete(current: AuditionStatus) -> Result<(), CoreError> {
    if current.can_delete() {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Only rejected or withdrawn auditions can be deleted (current status: '{current}')"
        )))
    }
}

/// Validate an optional cover letter length.
pub fn validate_cover_letter(cover_letter: Option<&str>) -> Result<(), CoreError> {
    match cover_letter {
        Some(c) if c.chars().count() > MAX_COVER_LETTER_LENGTH => Err(CoreError::Validation(
            format!("Cover letter exceeds maximum length of {MAX_COVER_LETTER_LENGTH} characters"),
        )),
        _ => Ok(()),
    }
}

/// Validate optional employer notes length.
pub fn validate_notes(notes: Option<&str>) -> Result<(), CoreError> {
    match notes {
        Some(n) if n.chars().count() > MAX_NOTES_LENGTH => Err(CoreError::Validation(format!(
            "Notes exceed maximum length of {MAX_NOTES_LENGTH} characters"
        ))),
        _ => Ok(()),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
