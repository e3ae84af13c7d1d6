//! Tests for the interviewer directory

use interview_slotting::core::{Interviewer, SchedulingError};
use interview_slotting::infra::{InMemoryInterviewerDirectory, InterviewerDirectory};

#[test]
fn test_add_keeps_insertion_order() {
    let dir = InMemoryInterviewerDirectory::new();
    dir.add("acme", Interviewer::new("i0", "Ada", "ada@acme.example")).unwrap();
    let pool = dir
        .add("acme", Interviewer::new("i1", "Grace", "grace@acme.example").with_role("Manager"))
        .unwrap();

    let names: Vec<_> = pool.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["Ada", "Grace"]);
    assert_eq!(dir.list("acme"), pool);
    assert!(dir.list("globex").is_empty());
}

#[test]
fn test_duplicate_email_rejected_ignoring_case() {
    let dir = InMemoryInterviewerDirectory::new();
    dir.add("acme", Interviewer::new("i0", "Ada", "ada@acme.example")).unwrap();

    let err = dir
        .add("acme", Interviewer::new("i9", "Ada Again", "ADA@Acme.Example"))
        .unwrap_err();
    assert_eq!(err, SchedulingError::DuplicateInterviewer("ada@acme.example".to_string()));

    // other companies are separate
    assert!(dir.add("globex", Interviewer::new("i0", "Ada", "ada@acme.example")).is_ok());
}

#[test]
fn test_remove_by_email() {
    let dir = InMemoryInterviewerDirectory::new();
    dir.add("acme", Interviewer::new("i0", "Ada", "ada@acme.example")).unwrap();
    dir.add("acme", Interviewer::new("i1", "Grace", "grace@acme.example")).unwrap();

    let pool = dir.remove("acme", "Ada@ACME.example").unwrap();
    assert_eq!(pool.len(), 1);
    assert_eq!(pool[0].id, "i1");

    assert!(matches!(
        dir.remove("acme", "ada@acme.example"),
        Err(SchedulingError::InterviewerNotFound(_))
    ));
    assert!(dir.remove("nobody", "x@y").is_err());
}
