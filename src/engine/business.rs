//! Business-hour tests and the overlap reduction.

use super::mask::HourMask;
use super::offset::utc_offset_hours;
use super::window::{BusinessWindow, OffsetRounding};
use crate::Location;
use chrono::{DateTime, Utc};

/// Whether UTC hour bucket `utc_hour` falls inside `window` in local time.
///
/// `adjusted = (utc_hour + floor(offset)).rem_euclid(24)`, checked against the
/// inclusive window. Any integer is accepted for `utc_hour`; the result repeats
/// every 24. Unknown zones are never in business hours.
pub fn is_business_hour(utc_hour: i64, timezone_id: &str, instant: DateTime<Utc>, window: BusinessWindow) -> bool {
    is_business_hour_with(utc_hour, timezone_id, instant, window, OffsetRounding::Floor)
}

/// [`is_business_hour`] with an explicit [`OffsetRounding`].
pub fn is_business_hour_with(
    utc_hour: i64,
    timezone_id: &str,
    instant: DateTime<Utc>,
    window: BusinessWindow,
    rounding: OffsetRounding,
) -> bool {
    match utc_offset_hours(timezone_id, instant) {
        Ok(offset) => bucket_in_window(utc_hour, offset, window, rounding),
        Err(err) => {
            tracing::warn!(%err, utc_hour, "treating hour as outside business hours");
            false
        }
    }
}

/// All UTC buckets in which `timezone_id` is inside `window` at `instant`.
///
/// The offset is sampled once at `instant` and applied to every bucket.
pub fn business_hours(
    timezone_id: &str,
    instant: DateTime<Utc>,
    window: BusinessWindow,
    rounding: OffsetRounding,
) -> HourMask {
    match utc_offset_hours(timezone_id, instant) {
        Ok(offset) => {
            HourMask::from_hours((0..24u32).filter(|h| bucket_in_window(i64::from(*h), offset, window, rounding)))
        }
        Err(err) => {
            tracing::warn!(%err, "no business hours for unresolved zone");
            HourMask::empty()
        }
    }
}

/// UTC buckets in which every location is in business hours, using the
/// standard 8-18 window and floor rounding.
///
/// An empty location list yields an empty set, not "every hour".
pub fn overlap_hours(locations: &[Location], instant: DateTime<Utc>) -> HourMask {
    overlap_hours_with(locations, instant, BusinessWindow::STANDARD, OffsetRounding::Floor)
}

/// [`overlap_hours`] with an explicit window and rounding.
pub fn overlap_hours_with(
    locations: &[Location],
    instant: DateTime<Utc>,
    window: BusinessWindow,
    rounding: OffsetRounding,
) -> HourMask {
    if locations.is_empty() {
        return HourMask::empty();
    }

    let overlap = locations
        .iter()
        .map(|loc| business_hours(&loc.timezone_id, instant, window, rounding))
        .fold(HourMask::all(), |acc, mask| acc & mask);

    tracing::debug!(locations = locations.len(), %overlap, "computed overlap");
    overlap
}

fn bucket_in_window(utc_hour: i64, offset: f64, window: BusinessWindow, rounding: OffsetRounding) -> bool {
    match rounding {
        OffsetRounding::Floor => {
            let adjusted = (utc_hour.rem_euclid(24) + offset.floor() as i64).rem_euclid(24) as u32;
            window.contains(adjusted)
        }
        OffsetRounding::Exact => {
            let local = (utc_hour.rem_euclid(24) as f64 + offset).rem_euclid(24.0);
            window.contains_fractional(local)
        }
    }
}
