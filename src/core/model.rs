//! Domain records shared by the engine, the estimator and their collaborators.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Opaque applicant (application) identifier.
pub type ApplicantId = String;

/// A point in time at which an interview could start.
pub type Slot = DateTime<Utc>;

/// Applicant eligible for scheduling, with the slots they said they can attend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Applicant {
    /// Applicant identifier.
    pub id: ApplicantId,
    /// Submitted availability. Callers must not pass an empty list.
    pub availability: Vec<Slot>,
}

impl Applicant {
    /// Create an applicant from an id and its availability.
    pub fn new(id: impl Into<ApplicantId>, availability: Vec<Slot>) -> Self {
        Self {
            id: id.into(),
            availability,
        }
    }
}

/// Interviewer record as kept by the interviewer directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Interviewer {
    /// Interviewer identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Contact e-mail, stored lowercase.
    pub email: String,
    /// Free-form role label.
    #[serde(default)]
    pub role: Option<String>,
}

impl Interviewer {
    /// Create an interviewer; the e-mail is normalized to lowercase.
    pub fn new(id: impl Into<String>, name: impl Into<String>, email: impl AsRef<str>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.as_ref().trim().to_lowercase(),
            role: None,
        }
    }

    /// Attach a role label.
    #[must_use]
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }
}

/// Committed work for one interviewer during a single run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterviewerLoad {
    /// Total committed interview minutes.
    pub minutes: u64,
    /// Number of interviews committed.
    pub interviews: usize,
}

/// A scheduled interview for one applicant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// Start of the interview.
    pub slot: Slot,
    /// Assigned interviewer.
    pub interviewer: Interviewer,
    /// Position of the interviewer in the pool used for the run.
    pub interviewer_index: usize,
}

/// Distinct, chronologically ordered slots an employer offers for a job.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotCatalog {
    slots: Vec<Slot>,
}

impl SlotCatalog {
    /// Build a catalog, dropping duplicates and sorting.
    pub fn new(mut slots: Vec<Slot>) -> Self {
        slots.sort_unstable();
        slots.dedup();
        Self { slots }
    }

    /// Offered slots in ascending order.
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Whether the catalog offers this slot.
    pub fn contains(&self, slot: &Slot) -> bool {
        self.slots.binary_search(slot).is_ok()
    }

    /// Catalog cardinality, used as the daily slot count for capacity estimates.
    pub fn slots_per_day(&self) -> u32 {
        u32::try_from(self.slots.len()).unwrap_or(u32::MAX)
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

/// Lifecycle of a job application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ApplicationStatus {
    /// Submitted, not yet looked at.
    Applied,
    /// Looked at by the employer.
    Reviewed,
    /// Accepted for interview.
    Accepted,
    /// Rejected.
    Rejected,
    /// Interview slot and interviewer assigned.
    Scheduled,
    /// Scheduling ran but no interview could be assigned.
    NotScheduled,
}

/// Application as supplied by the application store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationRecord {
    /// Application identifier.
    pub id: ApplicantId,
    /// Applicant display name.
    pub applicant_name: String,
    /// Applicant e-mail for notices.
    pub applicant_email: String,
    /// Current status.
    pub status: ApplicationStatus,
    /// Submitted availability, possibly empty.
    #[serde(default)]
    pub availability: Vec<Slot>,
}

/// Result of a run for one application, written back to the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApplicationOutcome {
    /// Interview committed.
    Scheduled {
        /// Interview start.
        slot: Slot,
        /// Panel for the interview.
        interviewers: Vec<Interviewer>,
    },
    /// No interview could be assigned.
    NotScheduled,
}

impl ApplicationOutcome {
    /// Status the application transitions to.
    pub const fn status(&self) -> ApplicationStatus {
        match self {
            Self::Scheduled { .. } => ApplicationStatus::Scheduled,
            Self::NotScheduled => ApplicationStatus::NotScheduled,
        }
    }
}

impl From<Option<&Assignment>> for ApplicationOutcome {
    fn from(assignment: Option<&Assignment>) -> Self {
        assignment.map_or(Self::NotScheduled, |a| Self::Scheduled {
            slot: a.slot,
            interviewers: vec![a.interviewer.clone()],
        })
    }
}

/// Job being scheduled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobContext {
    /// Job identifier, also the key for per-job policy overrides.
    pub id: String,
    /// Job title used in notices.
    pub title: String,
    /// Slots the employer offers.
    #[serde(default)]
    pub catalog: SlotCatalog,
}
