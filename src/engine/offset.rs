//! Zone resolution, UTC offsets and local wall-clock labels.

use crate::{Error, Result};
use chrono::{DateTime, Offset, Utc};
use chrono_tz::Tz;

/// Label shown in place of a local time when the zone does not resolve.
pub const INVALID_TIMEZONE: &str = "Invalid Timezone";

/// Resolve an IANA identifier against the bundled timezone database.
pub(crate) fn resolve(timezone_id: &str) -> Result<Tz> {
    timezone_id.parse::<Tz>().map_err(|_| Error::UnknownTimeZone(timezone_id.to_string()))
}

/// UTC offset of `timezone_id` at `instant`, in (possibly fractional) hours.
///
/// Honors the DST rules in force at `instant`: `America/New_York` is `-5.0`
/// in January and `-4.0` in July.
pub fn utc_offset_hours(timezone_id: &str, instant: DateTime<Utc>) -> Result<f64> {
    let tz = resolve(timezone_id)?;
    let seconds = instant.with_timezone(&tz).offset().fix().local_minus_utc();
    Ok(f64::from(seconds) / 3600.0)
}

/// Local wall clock (`HH:MM`) of `timezone_id` at `instant`.
pub fn try_local_time(timezone_id: &str, instant: DateTime<Utc>) -> Result<String> {
    let tz = resolve(timezone_id)?;
    Ok(instant.with_timezone(&tz).format("%H:%M").to_string())
}

/// Like [`try_local_time`], but an unknown zone yields [`INVALID_TIMEZONE`]
/// so one bad entry never blanks the whole view.
pub fn local_time(timezone_id: &str, instant: DateTime<Utc>) -> String {
    try_local_time(timezone_id, instant).unwrap_or_else(|err| {
        tracing::warn!(%err, "local time unavailable");
        INVALID_TIMEZONE.to_string()
    })
}
