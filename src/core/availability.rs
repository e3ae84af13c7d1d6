//! Availability submission: an accepted applicant picks slots from the job's catalog.

use crate::core::model::{ApplicationRecord, ApplicationStatus, Slot, SlotCatalog};
use crate::core::{Param, SchedulingError};

/// Check a submission against the record and the catalog and return the
/// slots to store, sorted and without duplicates.
///
/// # Errors
///
/// Returns [`SchedulingError::InvalidParameter`] when the record is not
/// `Accepted` or no slot was selected, and [`SchedulingError::InvalidSlot`]
/// for the first slot the catalog does not offer.
pub fn validate_availability(
    record: &ApplicationRecord,
    catalog: &SlotCatalog,
    mut slots: Vec<Slot>,
) -> Result<Vec<Slot>, SchedulingError> {
    if record.status != ApplicationStatus::Accepted {
        return Err(SchedulingError::invalid(
            Param::ApplicationStatus,
            format!("application `{}` is {:?}, not Accepted", record.id, record.status),
        ));
    }
    if slots.is_empty() {
        return Err(SchedulingError::invalid(
            Param::Availability,
            format!("application `{}` selected no slots", record.id),
        ));
    }
    if let Some(unknown) = slots.iter().find(|s| !catalog.contains(s)) {
        return Err(SchedulingError::InvalidSlot(
            unknown.to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
        ));
    }
    slots.sort_unstable();
    slots.dedup();
    Ok(slots)
}

/// Validate a submission and replace the record's availability with it.
///
/// The record is left untouched when validation fails.
///
/// # Errors
///
/// See [`validate_availability`].
pub fn submit_availability(
    record: &mut ApplicationRecord,
    catalog: &SlotCatalog,
    slots: Vec<Slot>,
) -> Result<(), SchedulingError> {
    let slots = validate_availability(record, catalog, slots)?;
    tracing::debug!(application = %record.id, slots = slots.len(), "availability submitted");
    record.availability = slots;
    Ok(())
}
