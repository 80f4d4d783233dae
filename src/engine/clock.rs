//! "Now" indicator helpers.

use chrono::{DateTime, Timelike, Utc};

/// Position of `instant` on a 24-hour UTC axis, in `[0, 24)`:
/// `hour + minute/60 + second/3600`.
pub fn current_hour_fraction(instant: DateTime<Utc>) -> f64 {
    f64::from(instant.hour()) + f64::from(instant.minute()) / 60.0 + f64::from(instant.second()) / 3600.0
}

/// Angle of a 12-hour clock hand in degrees, zero pointing right and growing
/// clockwise, so 12 o'clock is `-90`.
pub fn clock_hand_degrees(instant: DateTime<Utc>) -> f64 {
    (f64::from(instant.hour() % 12) + f64::from(instant.minute()) / 60.0) * 30.0 - 90.0
}
