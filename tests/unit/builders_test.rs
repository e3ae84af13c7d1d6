//! Tests for builder modules

use interview_slotting::builders::{build_service_for_job, ServiceBuilder};
use interview_slotting::config::{PolicyConfig, SchedulingConfig};
use interview_slotting::core::SchedulingError;
use interview_slotting::infra::{InMemoryApplicationStore, TracingNotifier};

#[test]
fn test_service_builder_defaults() {
    let builder = ServiceBuilder::new("svc1", PolicyConfig::default());
    assert_eq!(builder.name(), "svc1");
    assert_eq!(builder.policy().interview_duration_minutes, 45);

    let service = builder
        .build(InMemoryApplicationStore::default(), TracingNotifier)
        .unwrap();
    assert_eq!(service.name(), "svc1");
}

#[test]
fn test_service_builder_rejects_invalid_policy() {
    let policy = PolicyConfig {
        min_interviewers: 0,
        ..PolicyConfig::default()
    };
    let result = ServiceBuilder::new("svc1", policy)
        .build(InMemoryApplicationStore::default(), TracingNotifier);
    assert!(matches!(result, Err(SchedulingError::InvalidParameter { .. })));
}

#[test]
fn test_build_service_for_job_uses_override() {
    let mut cfg = SchedulingConfig::default();
    cfg.jobs.insert(
        "job-2".to_string(),
        PolicyConfig {
            interview_duration_minutes: 20,
            ..PolicyConfig::default()
        },
    );

    let service =
        build_service_for_job(&cfg, "job-2", InMemoryApplicationStore::default(), TracingNotifier)
            .unwrap();
    assert_eq!(service.policy().interview_duration_minutes, 20);
    assert_eq!(service.name(), "job-2");

    let fallback =
        build_service_for_job(&cfg, "job-3", InMemoryApplicationStore::default(), TracingNotifier)
            .unwrap();
    assert_eq!(fallback.policy().interview_duration_minutes, 45);
}
