//! API-facing request/response models.
//!
//! Timestamps cross this boundary as ISO-8601 strings and are parsed into
//! [`Slot`]s before anything reaches the engine.

use serde::{Deserialize, Serialize};

use crate::core::{
    estimate, eligible_count, ApplicantId, ApplicationRecord, ApplicationStatus, ApplicationStore,
    Interviewer, JobContext, Notifier, Param, SchedulingError, Slot, SlotCatalog,
};
use crate::runtime::service::SchedulingService;
use crate::util::clock::parse_slots;

/// Application as submitted by the application store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationSubmission {
    /// Application identifier.
    pub id: ApplicantId,
    /// Applicant display name.
    pub applicant_name: String,
    /// Applicant e-mail.
    pub applicant_email: String,
    /// Current status.
    pub status: ApplicationStatus,
    /// Submitted availability as ISO-8601 strings.
    #[serde(default)]
    pub availability: Vec<String>,
}

impl TryFrom<ApplicationSubmission> for ApplicationRecord {
    type Error = SchedulingError;

    fn try_from(sub: ApplicationSubmission) -> Result<Self, Self::Error> {
        Ok(Self {
            availability: parse_slots(&sub.availability)?,
            id: sub.id,
            applicant_name: sub.applicant_name,
            applicant_email: sub.applicant_email,
            status: sub.status,
        })
    }
}

/// Interviewer as listed by a company's interviewer directory.
///
/// Directory entries carry no id of their own; the normalized e-mail is
/// used when `id` is absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterviewerSubmission {
    /// Optional explicit identifier.
    #[serde(default)]
    pub id: Option<String>,
    /// Display name.
    pub name: String,
    /// Contact e-mail.
    pub email: String,
    /// Free-form role label.
    #[serde(default)]
    pub role: Option<String>,
}

impl From<InterviewerSubmission> for Interviewer {
    fn from(sub: InterviewerSubmission) -> Self {
        let email = sub.email.trim().to_lowercase();
        let id = sub.id.unwrap_or_else(|| email.clone());
        let interviewer = Self::new(id, sub.name, email);
        match sub.role {
            Some(role) => interviewer.with_role(role),
            None => interviewer,
        }
    }
}

/// Request to schedule interviews for a job.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleRequest {
    /// Job identifier.
    pub job_id: String,
    /// Job title for notices.
    pub job_title: String,
    /// Slots offered by the employer.
    #[serde(default)]
    pub slot_catalog: Vec<String>,
    /// Interview length; the service policy applies when absent.
    #[serde(default)]
    pub interview_duration_minutes: Option<u32>,
    /// Applications for the job, in store order.
    pub applications: Vec<ApplicationSubmission>,
    /// Interviewer pool, in directory order.
    pub interviewers: Vec<InterviewerSubmission>,
}

/// Per-applicant line of a schedule response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentView {
    /// Application identifier.
    pub applicant_id: ApplicantId,
    /// New status of the application.
    pub status: ApplicationStatus,
    /// Interview start, RFC 3339.
    pub slot: Option<String>,
    /// Assigned interviewer.
    pub interviewer: Option<Interviewer>,
}

/// Response of a scheduling run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleResponse {
    /// Run identifier.
    pub run_id: String,
    /// Per-applicant results in processing order.
    pub assignments: Vec<AssignmentView>,
    /// Number of scheduled applicants.
    pub scheduled: usize,
    /// Applicants left unscheduled.
    pub unscheduled: Vec<ApplicantId>,
    /// Days needed with this pool and catalog, if a catalog was given.
    pub minimum_days: Option<u64>,
    /// Applicants whose notice failed.
    pub notice_failures: Vec<ApplicantId>,
}

/// Slots an applicant picked on the availability page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityRequest {
    /// Selected slots as ISO-8601 strings.
    pub slots: Vec<String>,
}

/// Request for a minimum-days estimate.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MinimumDaysRequest {
    /// Number of interviewers available.
    pub num_interviewers: u32,
    /// Interview length in minutes.
    pub interview_duration: u32,
    /// Slots per day; the job's catalog size applies when absent.
    #[serde(default)]
    pub slots_per_day: Option<u32>,
}

/// Minimum-days estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MinimumDaysResponse {
    /// Eligible applicants counted.
    pub total_applicants: u64,
    /// Interviews completable per day.
    pub daily_capacity: u64,
    /// Smallest number of days covering every eligible applicant.
    pub minimum_days: u64,
}

fn rfc3339(slot: &Slot) -> String {
    slot.to_rfc3339_opts(chrono::SecondsFormat::Secs, true)
}

/// Parse a request and run it through the service.
///
/// # Errors
///
/// Returns [`SchedulingError::InvalidSlot`] for unparsable timestamps and any
/// error raised by [`SchedulingService::run_with_duration`].
pub async fn schedule_interviews<S, N>(
    service: &SchedulingService<S, N>,
    req: ScheduleRequest,
) -> Result<ScheduleResponse, SchedulingError>
where
    S: ApplicationStore,
    N: Notifier,
{
    let catalog = parse_slots(&req.slot_catalog).map(SlotCatalog::new)?;
    let records = req
        .applications
        .into_iter()
        .map(ApplicationRecord::try_from)
        .collect::<Result<Vec<_>, _>>()?;
    let job = JobContext {
        id: req.job_id,
        title: req.job_title,
        catalog,
    };
    let interviewers: Vec<Interviewer> =
        req.interviewers.into_iter().map(Interviewer::from).collect();
    let duration = req
        .interview_duration_minutes
        .unwrap_or(service.policy().interview_duration_minutes);

    let report = service
        .run_with_duration(&job, &records, &interviewers, duration)
        .await?;

    let assignments = report
        .plan
        .entries()
        .iter()
        .map(|(id, assignment)| AssignmentView {
            applicant_id: id.clone(),
            status: if assignment.is_some() {
                ApplicationStatus::Scheduled
            } else {
                ApplicationStatus::NotScheduled
            },
            slot: assignment.as_ref().map(|a| rfc3339(&a.slot)),
            interviewer: assignment.as_ref().map(|a| a.interviewer.clone()),
        })
        .collect();

    Ok(ScheduleResponse {
        run_id: report.run_id.clone(),
        assignments,
        scheduled: report.scheduled(),
        unscheduled: report.unscheduled.clone(),
        minimum_days: report.minimum_days.map(|e| e.days),
        notice_failures: report.notice_failures,
    })
}

/// Estimate the minimum number of interview days for a job's eligible applications.
///
/// # Errors
///
/// Returns [`SchedulingError::InvalidParameter`] for a zero interviewer count
/// or duration, or when no slots per day are known while applicants are waiting.
pub fn estimate_minimum_days(
    req: &MinimumDaysRequest,
    records: &[ApplicationRecord],
    catalog: &SlotCatalog,
) -> Result<MinimumDaysResponse, SchedulingError> {
    if req.num_interviewers == 0 {
        return Err(SchedulingError::invalid(
            Param::Interviewers,
            "number of interviewers must be greater than 0",
        ));
    }
    if req.interview_duration == 0 {
        return Err(SchedulingError::invalid(
            Param::InterviewDuration,
            "interview duration must be greater than 0 minutes",
        ));
    }
    let total = eligible_count(records);
    let slots_per_day = req.slots_per_day.unwrap_or_else(|| catalog.slots_per_day());
    let est = estimate(total, req.num_interviewers, slots_per_day, req.interview_duration)?;
    Ok(MinimumDaysResponse {
        total_applicants: total,
        daily_capacity: est.daily_capacity,
        minimum_days: est.days,
    })
}

/// Parse an availability submission and store it for one application.
///
/// # Errors
///
/// Returns [`SchedulingError::InvalidSlot`] for unparsable timestamps and any
/// error raised by [`SchedulingService::submit_availability`].
pub fn submit_availability<S, N>(
    service: &SchedulingService<S, N>,
    job: &JobContext,
    applicant: &ApplicantId,
    req: &AvailabilityRequest,
) -> Result<(), SchedulingError>
where
    S: ApplicationStore,
    N: Notifier,
{
    let slots = parse_slots(&req.slots)?;
    service.submit_availability(job, applicant, slots)
}
