//! Timezone catalog: the grouped, labelled list of zones a user can pick from.
//!
//! The catalog is a view over a [`CatalogSource`]. Two sources ship with the
//! crate:
//!
//! - [`TzDatabase`]: every identifier in the bundled IANA database.
//! - [`CuratedTable`]: a short, hand-picked list of well-known cities.
//!
//! Grouping is by region prefix, i.e. the text before the first `/`
//! (`"America/Argentina/Salta"` -> `"America"`). Ids without a slash
//! (`"UTC"`, `"EST5EDT"`) form their own one-entry region.
//!
//! ```text
//! source.zone_ids() ──▶ group by prefix ──▶ BTreeMap<region, Vec<CatalogEntry>>
//!                                            (regions sorted, entries by label)
//!                                 │
//!                                 └─▶ available(region, excluded)
//! ```
//!
//! Nothing is cached; the database is static for the life of the process, so
//! recomputing on demand is always consistent.

#[path = "catalog/curated.rs"]
mod curated;
#[path = "catalog/source.rs"]
mod source;

pub use curated::CuratedTable;
pub use source::{CatalogSource, TzDatabase};

use crate::{Error, Result, city_name};
use std::collections::{BTreeMap, HashSet};
use std::fmt;

/// One selectable zone.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CatalogEntry {
    /// `"<city-like suffix> (<full id>)"`, e.g. `"New York (America/New_York)"`.
    pub label: String,
    pub timezone_id: String,
}

impl CatalogEntry {
    pub fn new(timezone_id: &str) -> Self {
        CatalogEntry { label: format!("{} ({})", city_name(timezone_id), timezone_id), timezone_id: timezone_id.to_string() }
    }

    /// City name used when this entry is added as a location.
    pub fn city(&self) -> String {
        city_name(&self.timezone_id)
    }
}

pub struct TimezoneCatalog {
    source: Box<dyn CatalogSource>,
}

impl TimezoneCatalog {
    pub fn new(source: impl CatalogSource + 'static) -> Self {
        TimezoneCatalog { source: Box::new(source) }
    }

    /// Catalog over the full timezone database.
    pub fn full() -> Self {
        TimezoneCatalog::new(TzDatabase)
    }

    /// Catalog over the curated table.
    pub fn curated() -> Self {
        TimezoneCatalog::new(CuratedTable)
    }

    pub fn source_name(&self) -> &'static str {
        self.source.name()
    }

    /// All zones grouped by region; regions sorted by name, entries by label.
    pub fn regions(&self) -> Result<BTreeMap<String, Vec<CatalogEntry>>> {
        let ids = self.source.zone_ids();
        if ids.is_empty() {
            return Err(Error::EmptyCatalog);
        }

        let mut regions: BTreeMap<String, Vec<CatalogEntry>> = BTreeMap::new();
        for id in ids {
            let region = id.split('/').next().unwrap_or(id);
            regions.entry(region.to_string()).or_default().push(CatalogEntry::new(id));
        }

        for entries in regions.values_mut() {
            entries.sort_by(|a, b| a.label.cmp(&b.label).then_with(|| a.timezone_id.cmp(&b.timezone_id)));
            entries.dedup();
        }

        tracing::debug!(source = self.source.name(), regions = regions.len(), "catalog grouped");
        Ok(regions)
    }

    pub fn region_names(&self) -> Result<Vec<String>> {
        Ok(self.regions()?.into_keys().collect())
    }

    /// Entries of `region` whose id is not in `excluded_ids`, in catalog
    /// order. An unknown region yields nothing.
    pub fn available(&self, region: &str, excluded_ids: &HashSet<String>) -> Result<Vec<CatalogEntry>> {
        let mut regions = self.regions()?;
        let entries = regions.remove(region).unwrap_or_default();
        Ok(entries.into_iter().filter(|e| !excluded_ids.contains(&e.timezone_id)).collect())
    }
}

impl fmt::Debug for TimezoneCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimezoneCatalog").field("source", &self.source.name()).finish()
    }
}

impl Default for TimezoneCatalog {
    fn default() -> Self {
        TimezoneCatalog::full()
    }
}
