//! In-memory notifier for development and testing.

use std::collections::HashSet;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::core::{InvitationNotice, Notifier, ScheduleNotice, SchedulingError};

/// Records every notice and invitation it is asked to send.
///
/// Recipients registered through [`InMemoryNotifier::fail_for`] get a
/// [`SchedulingError::Notification`] instead.
#[derive(Default)]
pub struct InMemoryNotifier {
    sent: Mutex<Vec<ScheduleNotice>>,
    invitations: Mutex<Vec<InvitationNotice>>,
    failing: Mutex<HashSet<String>>,
}

impl InMemoryNotifier {
    /// Create a notifier with no failing recipients.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make sends to this recipient fail.
    pub fn fail_for(&self, recipient: impl Into<String>) {
        self.failing.lock().insert(recipient.into());
    }

    /// Schedule notices delivered so far, in send order.
    pub fn sent(&self) -> Vec<ScheduleNotice> {
        self.sent.lock().clone()
    }

    /// Invitations delivered so far, in send order.
    pub fn invitations(&self) -> Vec<InvitationNotice> {
        self.invitations.lock().clone()
    }

    fn check(&self, to: &str) -> Result<(), SchedulingError> {
        if self.failing.lock().contains(to) {
            return Err(SchedulingError::Notification(format!("mailbox unavailable for {to}")));
        }
        Ok(())
    }
}

#[async_trait]
impl Notifier for InMemoryNotifier {
    async fn send(&self, notice: &ScheduleNotice) -> Result<(), SchedulingError> {
        self.check(&notice.to)?;
        self.sent.lock().push(notice.clone());
        Ok(())
    }

    async fn send_invitation(&self, notice: &InvitationNotice) -> Result<(), SchedulingError> {
        self.check(&notice.to)?;
        self.invitations.lock().push(notice.clone());
        Ok(())
    }
}
