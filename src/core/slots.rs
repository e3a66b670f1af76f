use crate::domain::model::Slot;
use crate::domain::ports::SlotSource;
use std::fmt::Display;

/// Available slots for `date`, or an empty list when the lookup failed.
///
/// An empty result therefore means either "fully booked" or "request failed";
/// use [`SlotSource::fetch`] directly when the difference matters. Failures
/// are logged once at error level.
pub async fn check_available_slots<S>(source: &S, date: &(dyn Display + Sync)) -> Vec<Slot>
where
    S: SlotSource + ?Sized,
{
    match source.fetch(date).await {
        Ok(slots) => slots.available_slots,
        Err(e) => {
            tracing::error!("Error while fetching available slots for {}: {}", date, e);
            Vec::new()
        }
    }
}
