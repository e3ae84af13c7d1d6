//! Tests for configuration validation

use interview_slotting::config::{PolicyConfig, SchedulingConfig};

#[test]
fn test_policy_config_validation() {
    let valid = PolicyConfig {
        min_interviewers: 2,
        interview_duration_minutes: 45,
        notify_timeout_secs: 30,
    };
    assert!(valid.validate().is_ok());
}

#[test]
fn test_policy_config_invalid_min_interviewers() {
    let invalid = PolicyConfig {
        min_interviewers: 0,
        ..PolicyConfig::default()
    };
    assert!(invalid.validate().is_err());
}

#[test]
fn test_policy_config_invalid_duration() {
    let invalid = PolicyConfig {
        interview_duration_minutes: 0,
        ..PolicyConfig::default()
    };
    assert!(invalid.validate().is_err());
}

#[test]
fn test_policy_config_invalid_timeout() {
    let invalid = PolicyConfig {
        notify_timeout_secs: 0,
        ..PolicyConfig::default()
    };
    assert!(invalid.validate().is_err());
}

#[test]
fn test_policy_defaults() {
    let policy = PolicyConfig::default();
    assert_eq!(policy.min_interviewers, 1);
    assert_eq!(policy.interview_duration_minutes, 45);
    assert_eq!(policy.notify_timeout_secs, 30);
}

#[test]
fn test_scheduling_config_job_override() {
    let mut config = SchedulingConfig::default();
    config.jobs.insert(
        "job-9".to_string(),
        PolicyConfig {
            min_interviewers: 4,
            ..PolicyConfig::default()
        },
    );

    assert!(config.validate().is_ok());
    assert_eq!(config.policy_for("job-9").min_interviewers, 4);
    assert_eq!(config.policy_for("other").min_interviewers, 1);
}

#[test]
fn test_scheduling_config_invalid_override_named() {
    let mut config = SchedulingConfig::default();
    config.jobs.insert(
        "broken".to_string(),
        PolicyConfig {
            interview_duration_minutes: 0,
            ..PolicyConfig::default()
        },
    );
    let err = config.validate().unwrap_err();
    assert!(err.contains("job `broken` invalid"));
}

#[test]
fn test_scheduling_config_from_json() {
    let json = r#"{
        "defaults": {
            "min_interviewers": 2,
            "interview_duration_minutes": 30
        },
        "jobs": {
            "job-1": {
                "min_interviewers": 3,
                "interview_duration_minutes": 60,
                "notify_timeout_secs": 10
            }
        }
    }"#;

    let config = SchedulingConfig::from_json_str(json).unwrap();
    assert_eq!(config.defaults.notify_timeout_secs, 30);
    assert_eq!(config.policy_for("job-1").interview_duration_minutes, 60);
}

#[test]
fn test_scheduling_config_from_json_rejects_invalid() {
    let json = r#"{"defaults": {"interview_duration_minutes": 0}}"#;
    assert!(SchedulingConfig::from_json_str(json).is_err());
    assert!(SchedulingConfig::from_json_str("not json").is_err());
}
