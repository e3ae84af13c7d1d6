//! Minimum number of interview days for a given panel size and slot catalog.
//!
//! Capacity is counted in interviews, not minutes: each interviewer can take
//! every offered slot once per day.

use serde::{Deserialize, Serialize};

use crate::core::{Param, SchedulingError};

/// Estimate together with the capacity it was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinimumDaysEstimate {
    /// Interviews completable per day.
    pub daily_capacity: u64,
    /// Smallest number of days covering every applicant.
    pub days: u64,
}

/// Interviews completable in one day.
///
/// # Errors
///
/// Returns [`SchedulingError::InvalidParameter`] when either factor is zero.
pub fn daily_capacity(num_interviewers: u32, slots_per_day: u32) -> Result<u64, SchedulingError> {
    if num_interviewers == 0 {
        return Err(SchedulingError::invalid(
            Param::Interviewers,
            "number of interviewers must be greater than 0",
        ));
    }
    if slots_per_day == 0 {
        return Err(SchedulingError::invalid(
            Param::SlotsPerDay,
            "slots_per_day must be greater than 0",
        ));
    }
    Ok(u64::from(num_interviewers) * u64::from(slots_per_day))
}

const fn can_schedule_all(days: u64, daily_capacity: u64, total_applicants: u64) -> bool {
    days.saturating_mul(daily_capacity) >= total_applicants
}

/// Smallest number of days whose cumulative capacity covers every applicant.
///
/// `interview_duration_minutes` is accepted so callers can pass the same
/// parameters they give the assignment engine; it does not affect the result.
///
/// # Errors
///
/// Returns [`SchedulingError::InvalidParameter`] when `num_interviewers` or
/// `slots_per_day` is zero and there is at least one applicant. With no
/// applicants the answer is `0` whatever the panel looks like.
pub fn minimum_days(
    total_applicants: u64,
    num_interviewers: u32,
    slots_per_day: u32,
    interview_duration_minutes: u32,
) -> Result<u64, SchedulingError> {
    estimate(total_applicants, num_interviewers, slots_per_day, interview_duration_minutes)
        .map(|e| e.days)
}

/// Same as [`minimum_days`] but also reports the daily capacity.
///
/// # Errors
///
/// See [`minimum_days`].
pub fn estimate(
    total_applicants: u64,
    num_interviewers: u32,
    slots_per_day: u32,
    _interview_duration_minutes: u32,
) -> Result<MinimumDaysEstimate, SchedulingError> {
    if total_applicants == 0 {
        return Ok(MinimumDaysEstimate {
            daily_capacity: u64::from(num_interviewers) * u64::from(slots_per_day),
            days: 0,
        });
    }
    let capacity = daily_capacity(num_interviewers, slots_per_day)?;

    // capacity >= 1, so `total_applicants` days always suffice.
    let (mut low, mut high) = (1_u64, total_applicants);
    while low < high {
        let mid = low + (high - low) / 2;
        if can_schedule_all(mid, capacity, total_applicants) {
            high = mid;
        } else {
            low = mid + 1;
        }
    }

    tracing::debug!(total_applicants, daily_capacity = capacity, days = low, "minimum days estimated");
    Ok(MinimumDaysEstimate {
        daily_capacity: capacity,
        days: low,
    })
}

/// Closed-form `ceil(total / (interviewers * slots_per_day))`.
///
/// # Errors
///
/// See [`minimum_days`].
pub fn minimum_days_closed_form(
    total_applicants: u64,
    num_interviewers: u32,
    slots_per_day: u32,
) -> Result<u64, SchedulingError> {
    if total_applicants == 0 {
        return Ok(0);
    }
    let capacity = daily_capacity(num_interviewers, slots_per_day)?;
    Ok(total_applicants.div_ceil(capacity))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feasibility_is_monotonic() {
        assert!(!can_schedule_all(6, 15, 100));
        assert!(can_schedule_all(7, 15, 100));
        assert!(can_schedule_all(8, 15, 100));
    }

    #[test]
    fn huge_inputs_do_not_overflow() {
        let days = minimum_days(u64::MAX, u32::MAX, u32::MAX, 30).unwrap();
        assert_eq!(days, minimum_days_closed_form(u64::MAX, u32::MAX, u32::MAX).unwrap());
    }

    #[test]
    fn exact_multiple_needs_no_extra_day() {
        assert_eq!(minimum_days(30, 3, 5, 45).unwrap(), 2);
        assert_eq!(minimum_days(31, 3, 5, 45).unwrap(), 3);
    }
}
