//! Core scheduling abstractions and capacity accounting.

pub mod error;
pub mod model;
pub mod assignment;
pub mod estimator;
pub mod eligibility;
pub mod availability;
pub mod audit;
pub mod notifier;
pub mod store;

pub use error::{AppResult, Param, SchedulingError};
pub use model::{
    Applicant, ApplicantId, ApplicationOutcome, ApplicationRecord, ApplicationStatus, Assignment,
    Interviewer, InterviewerLoad, JobContext, Slot, SlotCatalog,
};
pub use assignment::{assign_slots, AssignmentPlan};
pub use estimator::{
    daily_capacity, estimate, minimum_days, minimum_days_closed_form, MinimumDaysEstimate,
};
pub use eligibility::{eligible_applicants, eligible_count, is_eligible};
pub use availability::{submit_availability, validate_availability};
pub use audit::{AuditEvent, AuditSink, InMemoryAuditSink, build_audit_event};
pub use notifier::{InvitationNotice, Notifier, ScheduleNotice};
pub use store::ApplicationStore;
