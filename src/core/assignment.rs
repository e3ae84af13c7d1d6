//! Greedy load-balanced slot assignment.
//!
//! Every applicant is bound to their own earliest available slot and to the
//! interviewer carrying the least committed minutes so far, with the lowest
//! pool index winning ties. Applicants are taken strictly in the order the
//! caller supplies them; that order decides who gets the less-loaded
//! interviewers.
//!
//! Only aggregate per-interviewer load is balanced. Two applicants may end up
//! with the same interviewer at the same instant; the engine does not look for
//! calendar conflicts and never falls back to a later slot.
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use interview_slotting::core::{assign_slots, Applicant, Interviewer};
//!
//! let nine = Utc.with_ymd_and_hms(2025, 1, 1, 9, 0, 0).unwrap();
//! let applicants = vec![Applicant::new("a1", vec![nine]), Applicant::new("a2", vec![nine])];
//! let pool = vec![
//!     Interviewer::new("i0", "Ada", "ada@example.com"),
//!     Interviewer::new("i1", "Grace", "grace@example.com"),
//! ];
//!
//! let plan = assign_slots(&applicants, &pool, 30).unwrap();
//! assert_eq!(plan.get("a1").unwrap().as_ref().unwrap().interviewer_index, 0);
//! assert_eq!(plan.get("a2").unwrap().as_ref().unwrap().interviewer_index, 1);
//! ```

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::core::model::{Applicant, ApplicantId, Assignment, Interviewer, InterviewerLoad};
use crate::core::{Param, SchedulingError};

/// Outcome of one engine run, in applicant input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentPlan {
    entries: Vec<(ApplicantId, Option<Assignment>)>,
    loads: Vec<InterviewerLoad>,
    interview_duration_minutes: u32,
}

impl AssignmentPlan {
    /// Per-applicant results in the order applicants were processed.
    pub fn entries(&self) -> &[(ApplicantId, Option<Assignment>)] {
        &self.entries
    }

    /// Result for one applicant; `None` if the applicant was not part of the run.
    pub fn get(&self, applicant: &str) -> Option<&Option<Assignment>> {
        self.entries
            .iter()
            .find(|(id, _)| id == applicant)
            .map(|(_, assignment)| assignment)
    }

    /// Final load per interviewer, indexed like the pool.
    pub fn loads(&self) -> &[InterviewerLoad] {
        &self.loads
    }

    /// Interview length used for the run.
    pub const fn interview_duration_minutes(&self) -> u32 {
        self.interview_duration_minutes
    }

    /// Number of applicants covered by the plan.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the plan covers no applicants.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of applicants that received an interview.
    pub fn scheduled_count(&self) -> usize {
        self.entries.iter().filter(|(_, a)| a.is_some()).count()
    }

    /// Applicants that could not be scheduled.
    pub fn unscheduled(&self) -> Vec<&ApplicantId> {
        self.entries
            .iter()
            .filter(|(_, a)| a.is_none())
            .map(|(id, _)| id)
            .collect()
    }

    /// Difference in minutes between the busiest and the idlest interviewer.
    pub fn load_spread(&self) -> u64 {
        let max = self.loads.iter().map(|l| l.minutes).max().unwrap_or(0);
        let min = self.loads.iter().map(|l| l.minutes).min().unwrap_or(0);
        max - min
    }

    /// Keyed view of the plan.
    pub fn into_map(self) -> HashMap<ApplicantId, Option<Assignment>> {
        self.entries.into_iter().collect()
    }
}

/// Index of the interviewer with the smallest load; lowest index on ties.
fn least_loaded(loads: &[InterviewerLoad]) -> Option<usize> {
    loads
        .iter()
        .enumerate()
        .min_by_key(|(index, load)| (load.minutes, *index))
        .map(|(index, _)| index)
}

/// Assign each applicant at most one (slot, interviewer) pair.
///
/// # Errors
///
/// Returns [`SchedulingError::InvalidParameter`] for a zero duration or
/// duplicate applicant ids, and [`SchedulingError::InsufficientInterviewers`]
/// when the pool is empty.
pub fn assign_slots(
    applicants: &[Applicant],
    interviewers: &[Interviewer],
    interview_duration_minutes: u32,
) -> Result<AssignmentPlan, SchedulingError> {
    if interview_duration_minutes == 0 {
        return Err(SchedulingError::invalid(
            Param::InterviewDuration,
            "interview duration must be greater than 0 minutes",
        ));
    }
    if interviewers.is_empty() {
        return Err(SchedulingError::InsufficientInterviewers {
            required: 1,
            available: 0,
        });
    }

    let mut seen = HashSet::with_capacity(applicants.len());
    if let Some(dup) = applicants.iter().find(|a| !seen.insert(a.id.as_str())) {
        return Err(SchedulingError::invalid(
            Param::ApplicantId,
            format!("duplicate applicant id `{}`", dup.id),
        ));
    }

    let mut loads = vec![InterviewerLoad::default(); interviewers.len()];
    let mut entries = Vec::with_capacity(applicants.len());

    for applicant in applicants {
        let mut availability = applicant.availability.clone();
        availability.sort_unstable();

        let Some(&slot) = availability.first() else {
            tracing::warn!(applicant = %applicant.id, "no availability submitted, leaving unscheduled");
            entries.push((applicant.id.clone(), None));
            continue;
        };

        let Some(index) = least_loaded(&loads) else {
            entries.push((applicant.id.clone(), None));
            continue;
        };

        loads[index].minutes += u64::from(interview_duration_minutes);
        loads[index].interviews += 1;

        tracing::debug!(
            applicant = %applicant.id,
            interviewer = %interviewers[index].id,
            slot = %slot,
            "applicant assigned"
        );

        entries.push((
            applicant.id.clone(),
            Some(Assignment {
                slot,
                interviewer: interviewers[index].clone(),
                interviewer_index: index,
            }),
        ));
    }

    Ok(AssignmentPlan {
        entries,
        loads,
        interview_duration_minutes,
    })
}
