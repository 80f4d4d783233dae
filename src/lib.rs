use std::fmt;
use std::str::FromStr;

#[macro_use]
mod macros;
mod api;
mod catalog;
mod engine;
mod error;
mod registry;

pub use api::{CatalogKind, Context, DashboardSnapshot, LocationRow, Options, RefreshSchedule, Session};
pub use catalog::{CatalogEntry, CatalogSource, CuratedTable, TimezoneCatalog, TzDatabase};
pub use engine::{
    BusinessWindow, HourMask, INVALID_TIMEZONE, OffsetRounding, OverlapWindow, business_hours, clock_hand_degrees,
    current_hour_fraction, is_business_hour, is_business_hour_with, local_time, longest_overlap, overlap_hours,
    overlap_hours_with, overlap_windows, try_local_time, utc_offset_hours,
};
pub use error::{Error, Result};
pub use registry::{DEFAULT_LOCATIONS, LocationRegistry, MAX_LOCATIONS};

// --- Shared types -----------------------------------------------------------

/// A tracked place: a display name plus the IANA zone it lives in.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Location {
    /// Display name, e.g. `"New York"`.
    pub city: String,
    /// IANA identifier, e.g. `"America/New_York"`.
    pub timezone_id: String,
}

impl Location {
    pub fn new(city: impl Into<String>, timezone_id: impl Into<String>) -> Self {
        Location { city: city.into(), timezone_id: timezone_id.into() }
    }

    /// Build a location whose display name is derived from the zone id
    /// (`"America/Sao_Paulo"` -> `"Sao Paulo"`).
    pub fn from_zone(timezone_id: impl Into<String>) -> Self {
        let timezone_id = timezone_id.into();
        Location { city: city_name(&timezone_id), timezone_id }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.city, self.timezone_id)
    }
}

/// Parses `"City=Area/Zone"` or a bare `"Area/Zone"`.
///
/// Only the shape is checked here; whether the zone resolves is decided by
/// [`LocationRegistry::add`].
impl FromStr for Location {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let re = static_regex!(r"^\s*(?:(?P<city>[^=]*[^=\s])\s*=\s*)?(?P<zone>[A-Za-z][A-Za-z0-9_+\-/]*)\s*$");
        let caps = re.captures(s).ok_or_else(|| Error::InvalidLocationSpec(s.to_string()))?;
        let zone = &caps["zone"];

        Ok(match caps.name("city") {
            Some(city) => Location::new(city.as_str(), zone),
            None => Location::from_zone(zone),
        })
    }
}

/// City-like display name for a zone id: the last path segment with
/// underscores turned into spaces.
pub(crate) fn city_name(zone_id: &str) -> String {
    zone_id.rsplit('/').next().unwrap_or(zone_id).replace('_', " ")
}
