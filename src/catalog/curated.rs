use super::source::CatalogSource;

// Keep to zones people actually schedule across; one or two per major hub.
const CURATED_ZONES: &[&str] = &[
    "Africa/Cairo",
    "Africa/Johannesburg",
    "Africa/Lagos",
    "Africa/Nairobi",
    "America/Chicago",
    "America/Denver",
    "America/Los_Angeles",
    "America/Mexico_City",
    "America/New_York",
    "America/Sao_Paulo",
    "America/St_Johns",
    "America/Toronto",
    "Asia/Dubai",
    "Asia/Hong_Kong",
    "Asia/Kathmandu",
    "Asia/Kolkata",
    "Asia/Seoul",
    "Asia/Shanghai",
    "Asia/Singapore",
    "Asia/Tokyo",
    "Australia/Adelaide",
    "Australia/Perth",
    "Australia/Sydney",
    "Europe/Berlin",
    "Europe/Istanbul",
    "Europe/London",
    "Europe/Madrid",
    "Europe/Moscow",
    "Europe/Paris",
    "Pacific/Auckland",
    "Pacific/Honolulu",
    "UTC",
];

/// A short static list of well-known zones.
#[derive(Debug, Clone, Copy, Default)]
pub struct CuratedTable;

impl CuratedTable {
    pub fn zones() -> &'static [&'static str] {
        CURATED_ZONES
    }
}

impl CatalogSource for CuratedTable {
    fn name(&self) -> &'static str {
        "curated"
    }

    fn zone_ids(&self) -> Vec<&'static str> {
        CURATED_ZONES.to_vec()
    }
}
