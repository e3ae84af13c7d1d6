//! In-memory application store.

use std::collections::{HashMap, HashSet};

use crate::core::{
    submit_availability, ApplicantId, ApplicationOutcome, ApplicationRecord, ApplicationStatus,
    ApplicationStore, Param, SchedulingError, Slot, SlotCatalog,
};

/// Keeps application records and the outcomes written back by scheduling runs.
#[derive(Debug, Default)]
pub struct InMemoryApplicationStore {
    records: Vec<ApplicationRecord>,
    outcomes: HashMap<ApplicantId, ApplicationOutcome>,
    failing: HashSet<ApplicantId>,
}

impl InMemoryApplicationStore {
    /// Create a store seeded with records, kept in the given order.
    pub fn new(records: Vec<ApplicationRecord>) -> Self {
        Self {
            records,
            outcomes: HashMap::new(),
            failing: HashSet::new(),
        }
    }

    /// Records in insertion order, with statuses as updated by runs.
    pub fn records(&self) -> &[ApplicationRecord] {
        &self.records
    }

    /// Current status of an application.
    pub fn status(&self, id: &str) -> Option<ApplicationStatus> {
        self.records.iter().find(|r| r.id == id).map(|r| r.status)
    }

    /// Application by id.
    pub fn record(&self, id: &str) -> Option<&ApplicationRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Outcome written for an application, if any.
    pub fn outcome(&self, id: &str) -> Option<&ApplicationOutcome> {
        self.outcomes.get(id)
    }

    /// Make writes for this application fail.
    pub fn fail_for(&mut self, id: impl Into<ApplicantId>) {
        self.failing.insert(id.into());
    }
}

impl ApplicationStore for InMemoryApplicationStore {
    fn record_outcome(
        &mut self,
        applicant: &ApplicantId,
        outcome: &ApplicationOutcome,
    ) -> Result<(), SchedulingError> {
        if self.failing.contains(applicant) {
            return Err(SchedulingError::Backend(format!("write rejected for {applicant}")));
        }
        let record = self
            .records
            .iter_mut()
            .find(|r| &r.id == applicant)
            .ok_or_else(|| SchedulingError::Backend(format!("unknown application {applicant}")))?;
        record.status = outcome.status();
        self.outcomes.insert(applicant.clone(), outcome.clone());
        Ok(())
    }

    fn record_availability(
        &mut self,
        applicant: &ApplicantId,
        catalog: &SlotCatalog,
        slots: Vec<Slot>,
    ) -> Result<(), SchedulingError> {
        if self.failing.contains(applicant) {
            return Err(SchedulingError::Backend(format!("write rejected for {applicant}")));
        }
        let record = self
            .records
            .iter_mut()
            .find(|r| &r.id == applicant)
            .ok_or_else(|| {
                SchedulingError::invalid(Param::ApplicantId, format!("unknown application `{applicant}`"))
            })?;
        submit_availability(record, catalog, slots)
    }
}
