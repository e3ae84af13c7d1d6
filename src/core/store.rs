//! Write-back of scheduling outcomes and submitted availability to the application store.

use crate::core::model::{ApplicantId, ApplicationOutcome, Slot, SlotCatalog};
use crate::core::SchedulingError;

/// Abstraction for application storage backends.
pub trait ApplicationStore: Send {
    /// Persist the outcome of a run for one application and apply its status transition.
    fn record_outcome(
        &mut self,
        applicant: &ApplicantId,
        outcome: &ApplicationOutcome,
    ) -> Result<(), SchedulingError>;

    /// Replace an application's availability with slots picked from `catalog`.
    ///
    /// Implementations validate with [`crate::core::validate_availability`].
    fn record_availability(
        &mut self,
        applicant: &ApplicantId,
        catalog: &SlotCatalog,
        slots: Vec<Slot>,
    ) -> Result<(), SchedulingError>;
}
