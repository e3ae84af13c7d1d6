//! Integration tests for the minimum-days estimator.

use interview_slotting::core::{
    daily_capacity, estimate, minimum_days, minimum_days_closed_form, Param, SchedulingError,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn test_hundred_applicants_three_interviewers_five_slots() {
    let est = estimate(100, 3, 5, 45).unwrap();
    assert_eq!(est.daily_capacity, 15);
    assert_eq!(est.days, 7);
}

#[test]
fn test_zero_applicants_needs_zero_days() {
    assert_eq!(minimum_days(0, 1, 1, 30).unwrap(), 0);
    assert_eq!(minimum_days(0, 12, 8, 60).unwrap(), 0);
    assert_eq!(minimum_days(0, 0, 0, 0).unwrap(), 0);
}

#[test]
fn test_single_interview_per_day_worst_case() {
    assert_eq!(minimum_days(17, 1, 1, 30).unwrap(), 17);
    assert_eq!(minimum_days(1, 1, 1, 30).unwrap(), 1);
}

#[test]
fn test_invalid_parameters() {
    assert!(matches!(
        minimum_days(10, 0, 5, 30),
        Err(SchedulingError::InvalidParameter { param: Param::Interviewers, .. })
    ));
    assert!(matches!(
        minimum_days(10, 3, 0, 30),
        Err(SchedulingError::InvalidParameter { param: Param::SlotsPerDay, .. })
    ));
    assert!(daily_capacity(0, 1).is_err());
}

#[test]
fn test_duration_does_not_change_result() {
    let short = minimum_days(55, 2, 4, 15).unwrap();
    let long = minimum_days(55, 2, 4, 240).unwrap();
    assert_eq!(short, long);
}

#[test]
fn test_matches_closed_form() {
    let mut rng = StdRng::seed_from_u64(2025);
    for _ in 0..2_000 {
        let n: u64 = rng.random_range(1..5_000);
        let interviewers: u32 = rng.random_range(1..20);
        let slots: u32 = rng.random_range(1..16);
        assert_eq!(
            minimum_days(n, interviewers, slots, 30).unwrap(),
            minimum_days_closed_form(n, interviewers, slots).unwrap(),
            "n={n} interviewers={interviewers} slots={slots}"
        );
    }
}

#[test]
fn test_monotonicity() {
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..500 {
        let n: u64 = rng.random_range(0..2_000);
        let interviewers: u32 = rng.random_range(1..15);
        let slots: u32 = rng.random_range(1..12);

        let base = minimum_days(n, interviewers, slots, 30).unwrap();
        assert!(minimum_days(n + 1, interviewers, slots, 30).unwrap() >= base);
        assert!(minimum_days(n, interviewers + 1, slots, 30).unwrap() <= base);
        assert!(minimum_days(n, interviewers, slots + 1, 30).unwrap() <= base);
    }
}
