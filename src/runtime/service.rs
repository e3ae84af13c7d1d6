//! Scheduling service: the layer that feeds the engine and handles its results.
//!
//! One call to [`SchedulingService::run`] is one scheduling run for one job:
//!
//! 1. the interviewer pool is checked against the policy minimum,
//! 2. eligible applications are selected in store order,
//! 3. the assignment engine runs,
//! 4. every eligible application gets its outcome written back,
//! 5. every scheduled applicant gets a notice.
//!
//! Store and notifier failures are logged, audited and counted in the
//! report. They never undo assignments already made.
//!
//! Before a run, [`SchedulingService::invite`] asks accepted applicants for
//! their availability and [`SchedulingService::submit_availability`] stores
//! what they pick from the job's slot catalog.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::config::PolicyConfig;
use crate::core::{
    assign_slots, build_audit_event, eligible_applicants, estimate, ApplicantId,
    ApplicationOutcome, ApplicationRecord, ApplicationStore, AssignmentPlan, AuditSink,
    ApplicationStatus, Interviewer, InvitationNotice, JobContext, MinimumDaysEstimate, Notifier,
    ScheduleNotice, SchedulingError, Slot,
};

/// Summary of one scheduling run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleReport {
    /// Unique id of the run, also attached to log and audit events.
    pub run_id: String,
    /// Job the run was for.
    pub job_id: String,
    /// Engine output for the eligible applicants.
    pub plan: AssignmentPlan,
    /// Applicants that could not be scheduled.
    pub unscheduled: Vec<ApplicantId>,
    /// Days needed to interview every eligible applicant with this pool and
    /// the job's slot catalog; `None` when the catalog is empty.
    pub minimum_days: Option<MinimumDaysEstimate>,
    /// Notices delivered.
    pub notices_sent: usize,
    /// Applicants whose notice could not be delivered.
    pub notice_failures: Vec<ApplicantId>,
    /// Applicants whose outcome could not be written back.
    pub store_failures: Vec<ApplicantId>,
}

impl ScheduleReport {
    /// Number of applicants that received an interview.
    pub fn scheduled(&self) -> usize {
        self.plan.scheduled_count()
    }
}

/// Summary of one invitation round.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvitationReport {
    /// Unique id of the invitation round.
    pub run_id: String,
    /// Job the invitations were for.
    pub job_id: String,
    /// Applications invited successfully.
    pub invited: Vec<ApplicantId>,
    /// Applications whose invitation could not be delivered.
    pub failures: Vec<ApplicantId>,
}

/// Runs scheduling for jobs against a store, a notifier and an optional audit sink.
pub struct SchedulingService<S, N> {
    name: String,
    policy: PolicyConfig,
    store: Arc<Mutex<S>>,
    notifier: Arc<N>,
    audit: Option<Arc<Mutex<Box<dyn AuditSink>>>>,
}

impl<S, N> SchedulingService<S, N>
where
    S: ApplicationStore,
    N: Notifier,
{
    /// Create a service from its components.
    pub fn new(name: impl Into<String>, policy: PolicyConfig, store: S, notifier: N) -> Self {
        Self {
            name: name.into(),
            policy,
            store: Arc::new(Mutex::new(store)),
            notifier: Arc::new(notifier),
            audit: None,
        }
    }

    /// Attach an audit sink.
    #[must_use]
    pub fn with_audit(mut self, audit: Box<dyn AuditSink>) -> Self {
        self.audit = Some(Arc::new(Mutex::new(audit)));
        self
    }

    /// Service name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Policy in force.
    pub const fn policy(&self) -> &PolicyConfig {
        &self.policy
    }

    /// Shared handle to the application store.
    pub fn store(&self) -> Arc<Mutex<S>> {
        Arc::clone(&self.store)
    }

    /// Shared handle to the notifier.
    pub fn notifier(&self) -> Arc<N> {
        Arc::clone(&self.notifier)
    }

    /// Reject pools smaller than the policy minimum.
    ///
    /// # Errors
    ///
    /// Returns [`SchedulingError::InsufficientInterviewers`].
    pub fn check_pool(&self, interviewers: &[Interviewer]) -> Result<(), SchedulingError> {
        let required = self.policy.min_interviewers.max(1);
        if interviewers.len() < required {
            return Err(SchedulingError::InsufficientInterviewers {
                required,
                available: interviewers.len(),
            });
        }
        Ok(())
    }

    /// Minimum days for the eligible applications of a job with a pool of `num_interviewers`.
    ///
    /// # Errors
    ///
    /// Returns [`SchedulingError::InvalidParameter`] when the pool or the
    /// catalog is empty while there are eligible applicants.
    pub fn estimate_days(
        &self,
        job: &JobContext,
        records: &[ApplicationRecord],
        num_interviewers: u32,
    ) -> Result<MinimumDaysEstimate, SchedulingError> {
        estimate(
            crate::core::eligible_count(records),
            num_interviewers,
            job.catalog.slots_per_day(),
            self.policy.interview_duration_minutes,
        )
    }

    /// Invite every accepted application that has not submitted availability yet.
    ///
    /// Links point at `{link_base}/applications/{id}/submit-availability`.
    /// Delivery failures are logged, audited as `invite_failed` and listed in
    /// the report.
    pub async fn invite(
        &self,
        job: &JobContext,
        records: &[ApplicationRecord],
        link_base: &str,
    ) -> InvitationReport {
        let mut report = InvitationReport {
            run_id: uuid::Uuid::new_v4().to_string(),
            job_id: job.id.clone(),
            ..InvitationReport::default()
        };
        let pending = records
            .iter()
            .filter(|r| r.status == ApplicationStatus::Accepted && r.availability.is_empty());
        for record in pending {
            let notice = InvitationNotice::new(record, &job.title, link_base);
            match self.bounded(self.notifier.send_invitation(&notice)).await {
                Ok(()) => {
                    self.audit(&report.run_id, &job.id, &record.id, "invited", None);
                    report.invited.push(record.id.clone());
                }
                Err(e) => {
                    tracing::warn!(run_id = %report.run_id, applicant = %record.id, "failed to send invitation: {}", e);
                    self.audit(&report.run_id, &job.id, &record.id, "invite_failed", Some(e.to_string()));
                    report.failures.push(record.id.clone());
                }
            }
        }
        tracing::info!(
            service = %self.name,
            run_id = %report.run_id,
            job = %job.id,
            invited = report.invited.len(),
            failures = report.failures.len(),
            "availability invitations sent"
        );
        report
    }

    /// Store the slots an applicant picked from the job's catalog.
    ///
    /// # Errors
    ///
    /// Returns [`SchedulingError::InvalidParameter`] when the application is
    /// unknown, not `Accepted`, or the selection is empty, and
    /// [`SchedulingError::InvalidSlot`] for a slot the catalog does not offer.
    /// Store failures are returned as-is.
    pub fn submit_availability(
        &self,
        job: &JobContext,
        applicant: &ApplicantId,
        slots: Vec<Slot>,
    ) -> Result<(), SchedulingError> {
        let count = slots.len();
        self.store
            .lock()
            .record_availability(applicant, &job.catalog, slots)
            .inspect_err(|e| {
                tracing::warn!(job = %job.id, applicant = %applicant, "availability rejected: {}", e);
            })?;
        tracing::info!(job = %job.id, applicant = %applicant, slots = count, "availability recorded");
        self.audit("", &job.id, applicant, "availability_submitted", None);
        Ok(())
    }

    /// Schedule a job with the policy's interview duration.
    ///
    /// # Errors
    ///
    /// See [`SchedulingService::run_with_duration`].
    pub async fn run(
        &self,
        job: &JobContext,
        records: &[ApplicationRecord],
        interviewers: &[Interviewer],
    ) -> Result<ScheduleReport, SchedulingError> {
        self.run_with_duration(job, records, interviewers, self.policy.interview_duration_minutes)
            .await
    }

    /// Schedule a job with an explicit interview duration.
    ///
    /// # Errors
    ///
    /// Returns [`SchedulingError::InsufficientInterviewers`] when the pool is
    /// below the policy minimum and [`SchedulingError::InvalidParameter`] for a
    /// zero duration. Collaborator failures are reported in the returned
    /// [`ScheduleReport`] instead.
    pub async fn run_with_duration(
        &self,
        job: &JobContext,
        records: &[ApplicationRecord],
        interviewers: &[Interviewer],
        interview_duration_minutes: u32,
    ) -> Result<ScheduleReport, SchedulingError> {
        self.check_pool(interviewers)?;

        let run_id = uuid::Uuid::new_v4().to_string();
        let applicants = eligible_applicants(records);
        let plan = assign_slots(&applicants, interviewers, interview_duration_minutes)?;

        let minimum_days = if job.catalog.is_empty() {
            None
        } else {
            let pool = u32::try_from(interviewers.len()).unwrap_or(u32::MAX);
            Some(estimate(
                applicants.len() as u64,
                pool,
                job.catalog.slots_per_day(),
                interview_duration_minutes,
            )?)
        };

        let by_id: HashMap<&str, &ApplicationRecord> =
            records.iter().map(|r| (r.id.as_str(), r)).collect();

        let mut report = ScheduleReport {
            run_id,
            job_id: job.id.clone(),
            unscheduled: plan.unscheduled().into_iter().cloned().collect(),
            plan,
            minimum_days,
            notices_sent: 0,
            notice_failures: Vec::new(),
            store_failures: Vec::new(),
        };

        for (applicant, assignment) in report.plan.entries() {
            let outcome = ApplicationOutcome::from(assignment.as_ref());
            let written = {
                let mut store = self.store.lock();
                store.record_outcome(applicant, &outcome)
            };
            match written {
                Ok(()) => {
                    let action = if assignment.is_some() { "scheduled" } else { "not_scheduled" };
                    self.audit(&report.run_id, &job.id, applicant, action, None);
                }
                Err(e) => {
                    tracing::error!(run_id = %report.run_id, applicant = %applicant, "failed to record outcome: {}", e);
                    self.audit(&report.run_id, &job.id, applicant, "store_failed", Some(e.to_string()));
                    report.store_failures.push(applicant.clone());
                }
            }

            let Some(assignment) = assignment else {
                tracing::warn!(run_id = %report.run_id, applicant = %applicant, "applicant not scheduled");
                continue;
            };
            let Some(record) = by_id.get(applicant.as_str()) else {
                continue;
            };

            let notice = ScheduleNotice::new(record, &job.title, assignment);
            match self.bounded(self.notifier.send(&notice)).await {
                Ok(()) => report.notices_sent += 1,
                Err(e) => {
                    tracing::warn!(run_id = %report.run_id, applicant = %applicant, "failed to send notice: {}", e);
                    self.audit(&report.run_id, &job.id, applicant, "notify_failed", Some(e.to_string()));
                    report.notice_failures.push(applicant.clone());
                }
            }
        }

        tracing::info!(
            service = %self.name,
            run_id = %report.run_id,
            job = %job.id,
            eligible = report.plan.len(),
            scheduled = report.scheduled(),
            unscheduled = report.unscheduled.len(),
            notice_failures = report.notice_failures.len(),
            "scheduling run finished"
        );
        Ok(report)
    }

    #[cfg(feature = "tokio-runtime")]
    async fn bounded<F>(&self, send: F) -> Result<(), SchedulingError>
    where
        F: Future<Output = Result<(), SchedulingError>>,
    {
        let limit = std::time::Duration::from_secs(self.policy.notify_timeout_secs);
        tokio::time::timeout(limit, send)
            .await
            .unwrap_or_else(|_| {
                Err(SchedulingError::Notification(format!(
                    "timed out after {}s",
                    self.policy.notify_timeout_secs
                )))
            })
    }

    #[cfg(not(feature = "tokio-runtime"))]
    async fn bounded<F>(&self, send: F) -> Result<(), SchedulingError>
    where
        F: Future<Output = Result<(), SchedulingError>>,
    {
        send.await
    }

    fn audit(&self, run_id: &str, job: &str, applicant: &str, action: &str, payload: Option<String>) {
        if let Some(audit) = &self.audit {
            audit
                .lock()
                .record(build_audit_event(run_id, job, applicant, action, payload));
        }
    }
}
