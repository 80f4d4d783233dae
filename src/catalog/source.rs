//! Catalog sources.

/// Supplies the raw identifiers a [`super::TimezoneCatalog`] groups and labels.
///
/// Implementations must only return ids that resolve in the timezone
/// database; order does not matter.
pub trait CatalogSource: Send + Sync {
    /// Short name for logs and `Debug` output.
    fn name(&self) -> &'static str;

    fn zone_ids(&self) -> Vec<&'static str>;
}

/// Every zone in the bundled IANA database.
#[derive(Debug, Clone, Copy, Default)]
pub struct TzDatabase;

impl CatalogSource for TzDatabase {
    fn name(&self) -> &'static str {
        "tz-database"
    }

    fn zone_ids(&self) -> Vec<&'static str> {
        chrono_tz::TZ_VARIANTS.iter().map(|tz| tz.name()).collect()
    }
}
