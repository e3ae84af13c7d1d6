//! Notifier that only logs, for deployments without outbound mail.

use async_trait::async_trait;

use crate::core::{InvitationNotice, Notifier, ScheduleNotice, SchedulingError};

/// Emits each notice as a `tracing` event and reports success.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

#[async_trait]
impl Notifier for TracingNotifier {
    async fn send(&self, notice: &ScheduleNotice) -> Result<(), SchedulingError> {
        tracing::info!(
            to = %notice.to,
            subject = %notice.subject(),
            when = %notice.formatted_slot,
            interviewer = %notice.interviewer_name,
            "schedule notice"
        );
        Ok(())
    }

    async fn send_invitation(&self, notice: &InvitationNotice) -> Result<(), SchedulingError> {
        tracing::info!(
            to = %notice.to,
            subject = %notice.subject(),
            link = %notice.availability_link,
            "availability invitation"
        );
        Ok(())
    }
}
