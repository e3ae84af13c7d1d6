//! Audit trail for scheduling runs.

use std::collections::VecDeque;

use crate::util::clock::now_ms;

/// Audit event structure.
#[derive(Debug, Clone)]
pub struct AuditEvent {
    /// Event identifier.
    pub event_id: String,
    /// Scheduling or invitation run the event belongs to; empty for single submissions.
    pub run_id: String,
    /// Job identifier.
    pub job: String,
    /// Application identifier.
    pub applicant: String,
    /// Action taken (scheduled, not_scheduled, notify_failed, store_failed,
    /// invited, invite_failed, availability_submitted).
    pub action: String,
    /// Timestamp milliseconds.
    pub created_at_ms: u128,
    /// Additional context.
    pub payload: Option<String>,
}

/// Audit sink abstraction.
pub trait AuditSink: Send {
    /// Record an audit event.
    fn record(&mut self, event: AuditEvent);
}

/// In-memory audit sink for testing and dev.
pub struct InMemoryAuditSink {
    events: VecDeque<AuditEvent>,
    max_events: usize,
}

impl InMemoryAuditSink {
    /// Create a new in-memory sink with a bounded buffer.
    pub fn new(max_events: usize) -> Self {
        Self {
            events: VecDeque::with_capacity(max_events),
            max_events,
        }
    }

    /// Retrieve a snapshot of stored events.
    pub fn events(&self) -> Vec<AuditEvent> {
        self.events.iter().cloned().collect()
    }
}

impl AuditSink for InMemoryAuditSink {
    fn record(&mut self, event: AuditEvent) {
        if self.max_events == 0 {
            return;
        }
        if self.events.len() >= self.max_events {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }
}

/// Helper to build an audit event with a fresh event id.
pub fn build_audit_event(
    run_id: impl Into<String>,
    job: impl Into<String>,
    applicant: impl Into<String>,
    action: impl Into<String>,
    payload: Option<String>,
) -> AuditEvent {
    AuditEvent {
        event_id: uuid::Uuid::new_v4().to_string(),
        run_id: run_id.into(),
        job: job.into(),
        applicant: applicant.into(),
        action: action.into(),
        created_at_ms: now_ms(),
        payload,
    }
}
