//! Tests for schedule notices

use chrono::{TimeZone, Utc};
use interview_slotting::core::{
    ApplicationRecord, ApplicationStatus, Assignment, Interviewer, InvitationNotice,
    ScheduleNotice,
};

#[test]
fn test_notice_rendering() {
    let record = ApplicationRecord {
        id: "a1".to_string(),
        applicant_name: "Lin".to_string(),
        applicant_email: "lin@mail.example".to_string(),
        status: ApplicationStatus::Accepted,
        availability: Vec::new(),
    };
    let assignment = Assignment {
        slot: Utc.with_ymd_and_hms(2025, 2, 3, 14, 30, 0).unwrap(),
        interviewer: Interviewer::new("i2", "Grace", "grace@corp.example"),
        interviewer_index: 2,
    };

    let notice = ScheduleNotice::new(&record, "QA Engineer", &assignment);

    assert_eq!(notice.to, "lin@mail.example");
    assert_eq!(notice.panel, 3);
    assert_eq!(notice.formatted_slot, "Monday, February 3, 2025 at 14:30 UTC");
    assert_eq!(notice.subject(), "Interview Scheduled for QA Engineer");
    let body = notice.body();
    assert!(body.contains("<strong>QA Engineer</strong>"));
    assert!(body.contains("Grace (Panel 3)"));
}

#[test]
fn test_invitation_rendering() {
    let record = ApplicationRecord {
        id: "app-9".to_string(),
        applicant_name: "Sam".to_string(),
        applicant_email: "sam@mail.example".to_string(),
        status: ApplicationStatus::Accepted,
        availability: Vec::new(),
    };

    let notice = InvitationNotice::new(&record, "Data Analyst", "https://jobs.example");

    assert_eq!(notice.to, "sam@mail.example");
    assert_eq!(notice.application_id, "app-9");
    assert_eq!(
        notice.availability_link,
        "https://jobs.example/applications/app-9/submit-availability"
    );
    assert_eq!(notice.subject(), "Interview Availability Request for Data Analyst");
    let body = notice.body();
    assert!(body.contains("Hi Sam"));
    assert!(body.contains("<strong>Data Analyst</strong>"));
    assert!(body.contains(
        "<a href=\"https://jobs.example/applications/app-9/submit-availability\">Submit Interview Availability</a>"
    ));
}
