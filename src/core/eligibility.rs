//! Selection of applications that can take part in a scheduling run.

use crate::core::model::{Applicant, ApplicationRecord, ApplicationStatus};

/// Whether an application is accepted and has submitted availability.
pub fn is_eligible(record: &ApplicationRecord) -> bool {
    record.status == ApplicationStatus::Accepted && !record.availability.is_empty()
}

/// Eligible applicants in record order.
pub fn eligible_applicants(records: &[ApplicationRecord]) -> Vec<Applicant> {
    records
        .iter()
        .filter(|r| is_eligible(r))
        .map(|r| Applicant::new(r.id.clone(), r.availability.clone()))
        .collect()
}

/// Count of eligible applications, for capacity estimates.
pub fn eligible_count(records: &[ApplicationRecord]) -> u64 {
    records.iter().filter(|r| is_eligible(r)).count() as u64
}
