//! Service layer and API surface around the scheduling core.

pub mod api;
pub mod service;

pub use api::{
    estimate_minimum_days, schedule_interviews, submit_availability, ApplicationSubmission,
    AssignmentView, AvailabilityRequest, InterviewerSubmission, MinimumDaysRequest,
    MinimumDaysResponse, ScheduleRequest, ScheduleResponse,
};
pub use service::{InvitationReport, ScheduleReport, SchedulingService};
