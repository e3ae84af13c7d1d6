//! Interview notices and the notifier abstraction that delivers them.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::core::model::{ApplicationRecord, Assignment, Slot};
use crate::core::SchedulingError;
use crate::util::clock::format_slot;

/// Message telling an applicant when and with whom they interview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleNotice {
    /// Recipient e-mail.
    pub to: String,
    /// Applicant display name.
    pub applicant_name: String,
    /// Title of the job interviewed for.
    pub job_title: String,
    /// Assigned interviewer's name.
    pub interviewer_name: String,
    /// 1-based panel number (interviewer position in the pool).
    pub panel: usize,
    /// Interview start.
    pub slot: Slot,
    /// Human-readable interview start.
    pub formatted_slot: String,
}

impl ScheduleNotice {
    /// Build the notice for a scheduled application.
    pub fn new(record: &ApplicationRecord, job_title: &str, assignment: &Assignment) -> Self {
        Self {
            to: record.applicant_email.clone(),
            applicant_name: record.applicant_name.clone(),
            job_title: job_title.to_string(),
            interviewer_name: assignment.interviewer.name.clone(),
            panel: assignment.interviewer_index + 1,
            slot: assignment.slot,
            formatted_slot: format_slot(&assignment.slot),
        }
    }

    /// Subject line.
    pub fn subject(&self) -> String {
        format!("Interview Scheduled for {}", self.job_title)
    }

    /// HTML body.
    pub fn body(&self) -> String {
        format!(
            "<p>Hi {name},</p>\n\
             <p>Your interview for the position <strong>{title}</strong> has been scheduled.</p>\n\
             <ul>\n\
             <li><strong>Date &amp; Time:</strong> {when}</li>\n\
             <li><strong>Interviewer:</strong> {interviewer} (Panel {panel})</li>\n\
             </ul>\n\
             <p>Please be available at that time.</p>",
            name = self.applicant_name,
            title = self.job_title,
            when = self.formatted_slot,
            interviewer = self.interviewer_name,
            panel = self.panel,
        )
    }
}

/// Message asking an accepted applicant to pick interview slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvitationNotice {
    /// Recipient e-mail.
    pub to: String,
    /// Application the link submits availability for.
    pub application_id: String,
    /// Applicant display name.
    pub applicant_name: String,
    /// Title of the job.
    pub job_title: String,
    /// Page where the applicant submits availability.
    pub availability_link: String,
}

impl InvitationNotice {
    /// Build the invitation for an application. The link is
    /// `{link_base}/applications/{id}/submit-availability`.
    pub fn new(record: &ApplicationRecord, job_title: &str, link_base: &str) -> Self {
        Self {
            to: record.applicant_email.clone(),
            application_id: record.id.clone(),
            applicant_name: record.applicant_name.clone(),
            job_title: job_title.to_string(),
            availability_link: format!(
                "{}/applications/{}/submit-availability",
                link_base.trim_end_matches('/'),
                record.id
            ),
        }
    }

    /// Subject line.
    pub fn subject(&self) -> String {
        format!("Interview Availability Request for {}", self.job_title)
    }

    /// HTML body.
    pub fn body(&self) -> String {
        format!(
            "<p>Hi {name},</p>\n\
             <p>You have been shortlisted for the position of <strong>{title}</strong>.</p>\n\
             <p>Please submit your available interview time slots by clicking the link below:</p>\n\
             <p><a href=\"{link}\">Submit Interview Availability</a></p>",
            name = self.applicant_name,
            title = self.job_title,
            link = self.availability_link,
        )
    }
}

/// Outbound delivery of schedule notices and availability invitations.
///
/// Failures are reported per notice; the scheduling service logs them and
/// moves on, so a failed send never undoes an assignment.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver one schedule notice.
    async fn send(&self, notice: &ScheduleNotice) -> Result<(), SchedulingError>;

    /// Deliver one availability invitation.
    async fn send_invitation(&self, notice: &InvitationNotice) -> Result<(), SchedulingError>;
}
