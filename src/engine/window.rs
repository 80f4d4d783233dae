//! Business window and offset rounding policy.

use crate::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Local working hours, both bounds inclusive.
///
/// `start > end` describes a window that wraps midnight (e.g. `22-6`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BusinessWindow {
    start: u32,
    end: u32,
}

impl BusinessWindow {
    /// 8:00 to 18:00.
    pub const STANDARD: BusinessWindow = BusinessWindow { start: 8, end: 18 };

    pub fn new(start: u32, end: u32) -> Result<Self> {
        if start > 23 || end > 23 {
            return Err(Error::InvalidWindow { start, end });
        }
        Ok(BusinessWindow { start, end })
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    pub fn end(&self) -> u32 {
        self.end
    }

    pub fn wraps_midnight(&self) -> bool {
        self.start > self.end
    }

    /// Whether a whole local hour falls inside the window.
    pub fn contains(&self, hour: u32) -> bool {
        if self.wraps_midnight() { hour >= self.start || hour <= self.end } else { (self.start..=self.end).contains(&hour) }
    }

    /// Whether a fractional local hour in `[0, 24)` falls inside the window.
    pub fn contains_fractional(&self, hour: f64) -> bool {
        let (start, end) = (f64::from(self.start), f64::from(self.end));
        if self.wraps_midnight() { hour >= start || hour <= end } else { hour >= start && hour <= end }
    }
}

impl Default for BusinessWindow {
    fn default() -> Self {
        BusinessWindow::STANDARD
    }
}

impl fmt::Display for BusinessWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:00-{:02}:00", self.start, self.end)
    }
}

/// Parses `"8-18"` (also `"08-18"`).
impl FromStr for BusinessWindow {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let re = static_regex!(r"^\s*(\d{1,2})\s*-\s*(\d{1,2})\s*$");
        let invalid = || Error::InvalidWindowSpec(s.to_string());
        let caps = re.captures(s).ok_or_else(invalid)?;
        let start = caps[1].parse().map_err(|_| invalid())?;
        let end = caps[2].parse().map_err(|_| invalid())?;
        BusinessWindow::new(start, end)
    }
}

/// How a fractional UTC offset is applied to an hour bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OffsetRounding {
    /// `floor(offset)` whole hours; UTC+5:30 behaves like UTC+5.
    #[default]
    Floor,
    /// Compare the fractional local start of the bucket (`h + offset`).
    Exact,
}
