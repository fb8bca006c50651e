//! Cutting a working window into bookable slots.
//!
//! A professional publishes availability as a window (start and end time of
//! day) plus a slot length in minutes. The window is cut into half-open,
//! contiguous slots of exactly that length, ascending by start time. A
//! trailing remainder shorter than one slot is dropped rather than emitted
//! as a partial slot.

use chrono::{Duration, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::errors::{BookingError, BookingResult};

/// One candidate slot within a working window, before it is stamped with a
/// date and professional and persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotWindow {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

/// Cuts `[window_start, window_end)` into slots of `slot_duration` minutes.
///
/// Returns an empty vector when the window is shorter than one slot,
/// including when `window_end <= window_start`. A zero duration is a
/// validation error.
pub fn generate_slots(
    window_start: NaiveTime,
    window_end: NaiveTime,
    slot_duration: u32,
) -> BookingResult<Vec<SlotWindow>> {
    if slot_duration == 0 {
        return Err(BookingError::Validation(
            "Slot duration must be a positive number of minutes".to_string(),
        ));
    }

    let duration = Duration::minutes(i64::from(slot_duration));
    // Comparing offsets keeps NaiveTime addition from ever wrapping midnight.
    let window = window_end.signed_duration_since(window_start);

    let mut slots = Vec::new();
    let mut offset = Duration::zero();
    while offset + duration <= window {
        slots.push(SlotWindow {
            start: window_start + offset,
            end: window_start + offset + duration,
        });
        offset = offset + duration;
    }

    Ok(slots)
}
