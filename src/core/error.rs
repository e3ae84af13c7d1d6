//! Error types for scheduling operations.

use std::fmt;

use thiserror::Error;

/// Input that an [`SchedulingError::InvalidParameter`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Param {
    /// Interview length in minutes.
    InterviewDuration,
    /// Number of interviewers on the panel.
    Interviewers,
    /// Slots offered per day.
    SlotsPerDay,
    /// Applicant or application identifier.
    ApplicantId,
    /// Application status for the requested transition.
    ApplicationStatus,
    /// Submitted availability.
    Availability,
    /// Scheduling policy or configuration.
    Policy,
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::InterviewDuration => "interview_duration",
            Self::Interviewers => "interviewers",
            Self::SlotsPerDay => "slots_per_day",
            Self::ApplicantId => "applicant_id",
            Self::ApplicationStatus => "application_status",
            Self::Availability => "availability",
            Self::Policy => "policy",
        };
        f.write_str(name)
    }
}

/// Errors produced by scheduling components.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SchedulingError {
    /// A numeric or structural parameter is out of range.
    #[error("invalid parameter {param}: {detail}")]
    InvalidParameter {
        /// Which input was rejected.
        param: Param,
        /// What was wrong with it.
        detail: String,
    },
    /// Interviewer pool is smaller than the required minimum.
    #[error("insufficient interviewers: {available} available, {required} required")]
    InsufficientInterviewers {
        /// Minimum pool size demanded by the caller.
        required: usize,
        /// Pool size actually supplied.
        available: usize,
    },
    /// A slot timestamp could not be parsed or is not offered.
    #[error("invalid slot timestamp: {0}")]
    InvalidSlot(String),
    /// An interviewer with the same e-mail is already registered.
    #[error("interviewer already exists: {0}")]
    DuplicateInterviewer(String),
    /// No interviewer is registered under the given e-mail.
    #[error("interviewer not found: {0}")]
    InterviewerNotFound(String),
    /// Notification delivery failed.
    #[error("notification failed: {0}")]
    Notification(String),
    /// Storage backend failure with context.
    #[error("backend error: {0}")]
    Backend(String),
}

impl SchedulingError {
    /// Shorthand for [`SchedulingError::InvalidParameter`].
    pub fn invalid(param: Param, detail: impl Into<String>) -> Self {
        Self::InvalidParameter {
            param,
            detail: detail.into(),
        }
    }

    /// Actionable message suitable for showing to the person who triggered the run.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidParameter { param, detail } => match param {
                Param::InterviewDuration => "Set a positive interview duration.".to_string(),
                Param::Interviewers => "Increase the interviewer count.".to_string(),
                Param::SlotsPerDay => "Offer at least one interview slot per day.".to_string(),
                Param::ApplicationStatus => {
                    "Only accepted applications can submit availability.".to_string()
                }
                Param::Availability => "Select at least one interview slot.".to_string(),
                Param::ApplicantId | Param::Policy => format!("Invalid input: {detail}."),
            },
            Self::InsufficientInterviewers { required, .. } => {
                format!("Increase the interviewer count to at least {required}.")
            }
            Self::InvalidSlot(raw) => {
                format!("Use ISO-8601 timestamps from the offered slots (got `{raw}`).")
            }
            Self::DuplicateInterviewer(_) => {
                "Interviewer with this email already exists.".to_string()
            }
            Self::InterviewerNotFound(_) => "Interviewer not found.".to_string(),
            Self::Notification(_) | Self::Backend(_) => {
                "Scheduling completed but a downstream service failed; try again later.".to_string()
            }
        }
    }
}

/// Application-facing result using anyhow for higher-level contexts.
pub type AppResult<T> = Result<T, anyhow::Error>;
