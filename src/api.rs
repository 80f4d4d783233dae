use crate::engine::{
    BusinessWindow, HourMask, OffsetRounding, OverlapWindow, business_hours, clock_hand_degrees, current_hour_fraction,
    local_time, longest_overlap, overlap_hours_with, overlap_windows, utc_offset_hours,
};
use crate::{LocationRegistry, TimezoneCatalog};
use chrono::{DateTime, Duration, TimeZone, Utc};

/// Render context.
///
/// Holds the instant a snapshot is computed for.
#[derive(Debug, Clone)]
pub struct Context {
    pub instant: DateTime<Utc>,
}

impl Context {
    pub fn at(instant: DateTime<Utc>) -> Self {
        Context { instant }
    }
}

impl Default for Context {
    fn default() -> Self {
        if cfg!(test) {
            Self { instant: Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).single().unwrap_or_default() }
        } else {
            Self { instant: Utc::now() }
        }
    }
}

/// Which catalog source a session offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CatalogKind {
    /// Every zone in the timezone database.
    #[default]
    Full,
    /// The short curated table.
    Curated,
}

/// Options that affect overlap computation and the catalog offered.
#[derive(Debug, Clone, Default)]
pub struct Options {
    pub window: BusinessWindow,
    pub rounding: OffsetRounding,
    pub catalog: CatalogKind,
}

/// One tracked location as it should be drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationRow {
    pub city: String,
    pub timezone_id: String,
    /// `HH:MM`, or [`crate::INVALID_TIMEZONE`].
    pub local_time: String,
    /// `None` when the zone does not resolve.
    pub utc_offset: Option<f64>,
    /// UTC buckets inside the business window.
    pub business_hours: HourMask,
}

/// Everything a renderer needs for one redraw.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSnapshot {
    pub instant: DateTime<Utc>,
    pub window: BusinessWindow,
    pub rows: Vec<LocationRow>,
    /// UTC buckets shared by every row; empty when there are no rows.
    pub overlap: HourMask,
    pub overlap_windows: Vec<OverlapWindow>,
    /// Position of `instant` on the 24-hour axis, `[0, 24)`.
    pub now_fraction: f64,
    /// 12-hour clock hand angle in degrees (12 o'clock is `-90`).
    pub clock_hand: f64,
    pub used: usize,
    pub capacity: usize,
}

impl DashboardSnapshot {
    pub fn longest_overlap(&self) -> Option<OverlapWindow> {
        longest_overlap(self.overlap)
    }

    /// Whether the current UTC hour is a shared business hour.
    pub fn overlapping_now(&self) -> bool {
        self.overlap.contains_hour(self.now_fraction as u32)
    }

    /// The overlap run holding the current UTC hour, if any.
    pub fn current_overlap(&self) -> Option<OverlapWindow> {
        let now = self.now_fraction as u32 % 24;
        self.overlap_windows.iter().copied().find(|w| (now + 24 - w.start_hour) % 24 < w.hours)
    }
}

/// A single user's dashboard state: the locations they track, their options,
/// and the catalog they pick new locations from.
///
/// Owned by whoever drives the view; there is no process-wide instance.
#[derive(Debug)]
pub struct Session {
    registry: LocationRegistry,
    options: Options,
    catalog: TimezoneCatalog,
}

impl Session {
    /// A session seeded with the default locations.
    pub fn new(options: Options) -> Self {
        Session::with_registry(LocationRegistry::with_defaults(), options)
    }

    /// A session with no locations.
    pub fn empty(options: Options) -> Self {
        Session::with_registry(LocationRegistry::new(), options)
    }

    pub fn with_registry(registry: LocationRegistry, options: Options) -> Self {
        let catalog = match options.catalog {
            CatalogKind::Full => TimezoneCatalog::full(),
            CatalogKind::Curated => TimezoneCatalog::curated(),
        };
        Session { registry, options, catalog }
    }

    pub fn registry(&self) -> &LocationRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut LocationRegistry {
        &mut self.registry
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn catalog(&self) -> &TimezoneCatalog {
        &self.catalog
    }

    /// Compute everything needed to draw the dashboard at `context.instant`.
    pub fn snapshot(&self, context: &Context) -> DashboardSnapshot {
        let instant = context.instant;
        let Options { window, rounding, .. } = self.options;
        let locations = self.registry.list();

        let rows = locations
            .iter()
            .map(|loc| LocationRow {
                city: loc.city.clone(),
                timezone_id: loc.timezone_id.clone(),
                local_time: local_time(&loc.timezone_id, instant),
                utc_offset: utc_offset_hours(&loc.timezone_id, instant).ok(),
                business_hours: business_hours(&loc.timezone_id, instant, window, rounding),
            })
            .collect();

        let overlap = overlap_hours_with(locations, instant, window, rounding);
        tracing::debug!(%instant, locations = locations.len(), %overlap, "snapshot");

        DashboardSnapshot {
            instant,
            window,
            rows,
            overlap,
            overlap_windows: overlap_windows(overlap),
            now_fraction: current_hour_fraction(instant),
            clock_hand: clock_hand_degrees(instant),
            used: self.registry.len(),
            capacity: self.registry.capacity(),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Session::new(Options::default())
    }
}

/// Caller-driven redraw cadence.
///
/// The library never sleeps or spawns; a front end asks for the next tick and
/// waits for it on its own thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshSchedule {
    pub interval: Duration,
}

impl RefreshSchedule {
    pub fn every(interval: Duration) -> Self {
        RefreshSchedule { interval }
    }

    /// First tick strictly after `instant`, aligned to multiples of the
    /// interval since the Unix epoch. Saturates to `instant` at the end of
    /// chrono's range.
    pub fn next_tick(&self, instant: DateTime<Utc>) -> DateTime<Utc> {
        let step = self.interval.num_milliseconds().max(1);
        let now = instant.timestamp_millis();
        now.div_euclid(step)
            .checked_add(1)
            .and_then(|n| n.checked_mul(step))
            .and_then(DateTime::from_timestamp_millis)
            .or_else(|| instant.checked_add_signed(self.interval))
            .unwrap_or(instant)
    }

    /// Endless sequence of ticks following `start`.
    pub fn ticks(self, start: DateTime<Utc>) -> impl Iterator<Item = DateTime<Utc>> {
        std::iter::successors(Some(self.next_tick(start)), move |t| Some(self.next_tick(*t)))
    }
}

impl Default for RefreshSchedule {
    fn default() -> Self {
        RefreshSchedule { interval: Duration::seconds(1) }
    }
}
