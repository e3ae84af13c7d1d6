//! Tests for error types

use interview_slotting::core::{Param, SchedulingError};

#[test]
fn test_invalid_parameter_error() {
    let err = SchedulingError::invalid(Param::SlotsPerDay, "must be greater than 0");
    assert_eq!(
        format!("{}", err),
        "invalid parameter slots_per_day: must be greater than 0"
    );
    assert_eq!(err.user_message(), "Offer at least one interview slot per day.");
}

#[test]
fn test_user_message_follows_param_not_detail() {
    let err = SchedulingError::invalid(Param::ApplicantId, "duplicate applicant id `interviewers-2`");
    assert_eq!(
        err.user_message(),
        "Invalid input: duplicate applicant id `interviewers-2`."
    );

    let err = SchedulingError::invalid(Param::InterviewDuration, "must be positive");
    assert_eq!(err.user_message(), "Set a positive interview duration.");

    let err = SchedulingError::invalid(Param::Policy, "policy invalid: slots_per_day");
    assert_eq!(err.user_message(), "Invalid input: policy invalid: slots_per_day.");
}

#[test]
fn test_insufficient_interviewers_error() {
    let err = SchedulingError::InsufficientInterviewers {
        required: 3,
        available: 1,
    };
    assert_eq!(
        format!("{}", err),
        "insufficient interviewers: 1 available, 3 required"
    );
    assert_eq!(err.user_message(), "Increase the interviewer count to at least 3.");
}

#[test]
fn test_invalid_slot_error() {
    let err = SchedulingError::InvalidSlot("tomorrow".to_string());
    assert_eq!(format!("{}", err), "invalid slot timestamp: tomorrow");
}

#[test]
fn test_duplicate_interviewer_error() {
    let err = SchedulingError::DuplicateInterviewer("ada@corp.example".to_string());
    assert_eq!(format!("{}", err), "interviewer already exists: ada@corp.example");
    assert_eq!(err.user_message(), "Interviewer with this email already exists.");
}

#[test]
fn test_backend_error() {
    let err = SchedulingError::Backend("connection failed".to_string());
    assert_eq!(format!("{}", err), "backend error: connection failed");
}
