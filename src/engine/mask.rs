//! 24-bucket hour sets and contiguous overlap windows.

use std::fmt;

bitflags::bitflags! {
    /// A set of UTC hour buckets; bit `h` stands for `h:00..h:59` UTC.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct HourMask: u32 {
        const H00 = 1 << 0;
        const H01 = 1 << 1;
        const H02 = 1 << 2;
        const H03 = 1 << 3;
        const H04 = 1 << 4;
        const H05 = 1 << 5;
        const H06 = 1 << 6;
        const H07 = 1 << 7;
        const H08 = 1 << 8;
        const H09 = 1 << 9;
        const H10 = 1 << 10;
        const H11 = 1 << 11;
        const H12 = 1 << 12;
        const H13 = 1 << 13;
        const H14 = 1 << 14;
        const H15 = 1 << 15;
        const H16 = 1 << 16;
        const H17 = 1 << 17;
        const H18 = 1 << 18;
        const H19 = 1 << 19;
        const H20 = 1 << 20;
        const H21 = 1 << 21;
        const H22 = 1 << 22;
        const H23 = 1 << 23;
    }
}

impl HourMask {
    /// Mask holding the single bucket `hour` (taken modulo 24).
    pub fn hour(hour: u32) -> Self {
        HourMask::from_bits_truncate(1 << (hour % 24))
    }

    pub fn from_hours(hours: impl IntoIterator<Item = u32>) -> Self {
        hours.into_iter().fold(HourMask::empty(), |acc, h| acc | HourMask::hour(h))
    }

    pub fn contains_hour(&self, hour: u32) -> bool {
        self.contains(HourMask::hour(hour))
    }

    /// Set buckets in ascending order.
    pub fn hours(&self) -> impl Iterator<Item = u32> + '_ {
        (0..24).filter(move |h| self.contains_hour(*h))
    }

    /// One boolean per UTC hour, index = hour.
    pub fn to_bitmap(&self) -> [bool; 24] {
        std::array::from_fn(|h| self.contains_hour(h as u32))
    }

    pub fn count(&self) -> u32 {
        self.bits().count_ones()
    }
}

impl fmt::Display for HourMask {
    /// `"13-18"`, `"0-2,22-23"`, or `"-"` when empty.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("-");
        }

        let mut first = true;
        let mut hours = self.hours().peekable();
        while let Some(start) = hours.next() {
            let mut end = start;
            while hours.peek() == Some(&(end + 1)) {
                end += 1;
                hours.next();
            }
            if !first {
                f.write_str(",")?;
            }
            first = false;
            if start == end { write!(f, "{start}")? } else { write!(f, "{start}-{end}")? }
        }
        Ok(())
    }
}

/// A maximal run of consecutive overlap buckets, possibly wrapping past 23.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlapWindow {
    /// First UTC hour of the run.
    pub start_hour: u32,
    /// Number of one-hour buckets in the run (1..=24).
    pub hours: u32,
}

impl OverlapWindow {
    /// Exclusive end hour, modulo 24.
    pub fn end_hour(&self) -> u32 {
        (self.start_hour + self.hours) % 24
    }
}

/// Split a mask into its maximal circular runs, ordered by start hour.
///
/// A run that crosses midnight (`22, 23, 0, 1`) is reported once, starting at
/// 22. A full mask is a single 24-hour run starting at 0.
pub fn overlap_windows(mask: HourMask) -> Vec<OverlapWindow> {
    if mask.is_empty() {
        return Vec::new();
    }
    if mask.is_all() {
        return vec![OverlapWindow { start_hour: 0, hours: 24 }];
    }

    let mut windows: Vec<OverlapWindow> = (0..24)
        .filter(|&h| mask.contains_hour(h) && !mask.contains_hour((h + 23) % 24))
        .map(|start_hour| {
            let hours = (0..24u32).take_while(|i| mask.contains_hour((start_hour + i) % 24)).count() as u32;
            OverlapWindow { start_hour, hours }
        })
        .collect();

    windows.sort_by_key(|w| w.start_hour);
    windows
}

/// Longest run in `mask`; the earliest one wins a tie.
pub fn longest_overlap(mask: HourMask) -> Option<OverlapWindow> {
    overlap_windows(mask).into_iter().fold(None, |best, w| match best {
        Some(b) if b.hours >= w.hours => Some(b),
        _ => Some(w),
    })
}
