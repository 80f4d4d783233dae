//! Overlap engine.
//!
//! Everything in here is a pure function of its inputs plus the instant being
//! rendered. Nothing is cached between calls; a redraw simply calls back in.
//!
//! ## How the parts work together
//!
//! ```text
//! timezone_id ── resolve (offset.rs) ──┬─ local_time / try_local_time
//!                                      └─ utc_offset_hours ──┐
//!                                                            v
//! utc_hour 0..24 ── is_business_hour (business.rs) ── BusinessWindow (window.rs)
//!                                                            │
//!                        business_hours per location ────────┤
//!                                                            v
//!                        overlap_hours = AND of all masks  (HourMask, mask.rs)
//!                                                            │
//!                                                            v
//!                        overlap_windows / longest_overlap  (mask.rs)
//!
//! instant ── current_hour_fraction / clock_hand_degrees (clock.rs)
//! ```
//!
//! ## Offset rounding
//!
//! A UTC hour bucket `h` is mapped to local time as
//! `(h + floor(offset)).rem_euclid(24)`. Half- and quarter-hour zones
//! (Asia/Kolkata, Australia/Adelaide, Asia/Kathmandu) are therefore shifted to
//! the whole hour below. That is the established behavior and stays the
//! default; [`OffsetRounding::Exact`] compares the fractional local start of
//! the bucket instead.
//!
//! ## Unknown zones
//!
//! Resolution failures are reported as [`crate::Error::UnknownTimeZone`] by the
//! `try_*`/offset functions. The display-facing functions swallow them: a label
//! becomes [`INVALID_TIMEZONE`], a business-hour test becomes `false`.

#[path = "engine/business.rs"]
mod business;
#[path = "engine/clock.rs"]
mod clock;
#[path = "engine/mask.rs"]
mod mask;
#[path = "engine/offset.rs"]
mod offset;
#[path = "engine/window.rs"]
mod window;

#[cfg(test)]
#[path = "engine/tests.rs"]
mod tests;

pub use business::{business_hours, is_business_hour, is_business_hour_with, overlap_hours, overlap_hours_with};
pub use clock::{clock_hand_degrees, current_hour_fraction};
pub use mask::{HourMask, OverlapWindow, longest_overlap, overlap_windows};
pub use offset::{INVALID_TIMEZONE, local_time, try_local_time, utc_offset_hours};
pub(crate) use offset::resolve;
pub use window::{BusinessWindow, OffsetRounding};
