//! Tests for audit sink

use interview_slotting::core::{AuditSink, InMemoryAuditSink, build_audit_event};

#[test]
fn test_in_memory_audit_sink() {
    let mut sink = InMemoryAuditSink::new(10);

    let event = build_audit_event("run1", "job1", "app1", "scheduled", Some("slot".to_string()));

    sink.record(event.clone());
    assert_eq!(sink.events().len(), 1);

    let events = sink.events();
    assert_eq!(events[0].event_id, event.event_id);
    assert_eq!(events[0].applicant, "app1");
    assert_eq!(events[0].action, "scheduled");
}

#[test]
fn test_audit_sink_overflow() {
    let mut sink = InMemoryAuditSink::new(2);

    sink.record(build_audit_event("run1", "job1", "app1", "scheduled", None));
    sink.record(build_audit_event("run1", "job1", "app2", "scheduled", None));
    sink.record(build_audit_event("run1", "job1", "app3", "not_scheduled", None));

    let events = sink.events();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].applicant, "app2"); // First one popped
    assert_eq!(events[1].applicant, "app3");
}

#[test]
fn test_build_audit_event() {
    let event = build_audit_event("run1", "job1", "app1", "notify_failed", Some("smtp down".to_string()));

    assert_eq!(event.run_id, "run1");
    assert_eq!(event.job, "job1");
    assert_eq!(event.applicant, "app1");
    assert_eq!(event.action, "notify_failed");
    assert_eq!(event.payload, Some("smtp down".to_string()));
    assert!(event.created_at_ms > 0);
    assert_ne!(
        event.event_id,
        build_audit_event("run1", "job1", "app1", "notify_failed", None).event_id
    );
}
