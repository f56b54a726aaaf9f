//! Error types for checkup scheduling operations.
//!
//! Every variant is a user-facing outcome of a bad request, not an internal
//! fault. Failures abort the operation before any mutation takes place.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// The requested time of day falls outside the 09:00–17:00 window.
    /// Applies to both create and remove requests.
    #[error("Checkup must be scheduled between 09:00 and 17:00")]
    OutsideBusinessHours,

    /// The requested moment precedes the wall clock. Create only.
    #[error("Checkup cannot be scheduled in the past")]
    PastDateTime,

    /// The requested minute is not on the quarter-hour grid. Create only.
    #[error("Checkup times must use blocks of 00, 15, 30, or 45 minutes")]
    OffGridMinutes,

    /// The patient position does not resolve within the displayed roster.
    /// The message names the valid range rather than echoing the position,
    /// since callers may present positions 1-based.
    #[error("Patient position is out of range: the roster has {roster_len} patients")]
    InvalidPatientIndex { index: usize, roster_len: usize },

    /// A checkup already occupies the requested slot. Carries the stored
    /// slot's formatted date-time.
    #[error("A checkup is already scheduled at {existing}")]
    SlotClash { existing: String },

    /// No checkup exists at the slot a removal request named.
    #[error("No checkup is scheduled at the given date and time")]
    SlotNotFound,

    /// A patient name failed validation.
    #[error("Names may only contain letters joined by single spaces, hyphens, apostrophes, or slashes")]
    InvalidName,

    /// An email address failed validation.
    #[error("Email must have the form local-part@domain, with an alphanumeric local part (special characters +_.- allowed) and dot-separated alphanumeric domain labels")]
    InvalidEmail,
}

/// Convenience alias used throughout wardbook-core.
pub type Result<T> = std::result::Result<T, ScheduleError>;
