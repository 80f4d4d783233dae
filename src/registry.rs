//! The session's ordered list of tracked locations.
//!
//! A registry holds at most [`MAX_LOCATIONS`] entries, each with a distinct
//! timezone. Entries keep insertion order; the only mutations are append and
//! remove-by-index, and a failed mutation leaves the list untouched.

use crate::engine::resolve;
use crate::{Error, Location, Result};
use std::collections::HashSet;

/// Hard cap on tracked locations.
pub const MAX_LOCATIONS: usize = 6;

/// `(city, timezone_id)` pairs every new session starts with.
pub const DEFAULT_LOCATIONS: [(&str, &str); 3] =
    [("New York", "America/New_York"), ("London", "Europe/London"), ("Tokyo", "Asia/Tokyo")];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationRegistry {
    locations: Vec<Location>,
}

impl LocationRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        LocationRegistry { locations: Vec::with_capacity(MAX_LOCATIONS) }
    }

    /// A registry seeded with [`DEFAULT_LOCATIONS`].
    pub fn with_defaults() -> Self {
        let locations = DEFAULT_LOCATIONS.iter().map(|(city, zone)| Location::new(*city, *zone)).collect();
        LocationRegistry { locations }
    }

    /// Append a location.
    ///
    /// Checks, in order: capacity, duplicate zone, zone resolves.
    pub fn add(&mut self, city: impl Into<String>, timezone_id: impl Into<String>) -> Result<()> {
        let location = Location::new(city, timezone_id);

        if self.is_full() {
            return Err(Error::CapacityExceeded { capacity: MAX_LOCATIONS });
        }
        if self.contains_zone(&location.timezone_id) {
            return Err(Error::DuplicateZone(location.timezone_id));
        }
        resolve(&location.timezone_id)?;

        tracing::debug!(city = %location.city, zone = %location.timezone_id, "location added");
        self.locations.push(location);
        Ok(())
    }

    /// Append an already-built [`Location`].
    pub fn push(&mut self, location: Location) -> Result<()> {
        self.add(location.city, location.timezone_id)
    }

    /// Remove and return the entry at `index`; later entries shift left.
    pub fn remove(&mut self, index: usize) -> Result<Location> {
        if index >= self.locations.len() {
            return Err(Error::IndexOutOfRange { index, len: self.locations.len() });
        }

        let removed = self.locations.remove(index);
        tracing::debug!(index, city = %removed.city, "location removed");
        Ok(removed)
    }

    pub fn list(&self) -> &[Location] {
        &self.locations
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.locations.len() >= MAX_LOCATIONS
    }

    pub fn capacity(&self) -> usize {
        MAX_LOCATIONS
    }

    pub fn contains_zone(&self, timezone_id: &str) -> bool {
        self.locations.iter().any(|l| l.timezone_id == timezone_id)
    }

    /// Zone ids currently tracked; pass to [`crate::TimezoneCatalog::available`]
    /// to hide zones that cannot be added again.
    pub fn zone_ids(&self) -> HashSet<String> {
        self.locations.iter().map(|l| l.timezone_id.clone()).collect()
    }

    /// Fraction of the cap in use, `0.0..=1.0`.
    pub fn usage_ratio(&self) -> f64 {
        self.locations.len() as f64 / MAX_LOCATIONS as f64
    }
}

impl Default for LocationRegistry {
    fn default() -> Self {
        LocationRegistry::with_defaults()
    }
}
