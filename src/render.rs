use meridian::{CatalogEntry, DashboardSnapshot, HourMask, LocationRow, overlap_windows};
use std::fmt::Write as _;
use std::str::FromStr;

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const MAGENTA: &str = "\x1b[35m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    /// Per-location colors, cycled in registry order.
    pub const RING: [&str; 6] = [GREEN, CYAN, YELLOW, MAGENTA, BLUE, RED];

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", BOLD, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", DIM, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }
    }
}

pub use ansi::Palette;

/// Draws the chart part of a dashboard snapshot.
pub trait ChartRenderer {
    fn render(&self, snapshot: &DashboardSnapshot, palette: &Palette) -> String;
}

/// Horizontal 24-hour bars, one per location, plus an overlap bar.
pub struct Timeline;

/// Concentric-ring view: business arcs per location around a 12-hour hand.
pub struct Dial;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartKind {
    #[default]
    Timeline,
    Dial,
}

impl ChartKind {
    pub fn renderer(self) -> Box<dyn ChartRenderer> {
        match self {
            ChartKind::Timeline => Box::new(Timeline),
            ChartKind::Dial => Box::new(Dial),
        }
    }
}

impl FromStr for ChartKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "timeline" => Ok(ChartKind::Timeline),
            "dial" => Ok(ChartKind::Dial),
            other => Err(format!("error: unknown chart '{other}' (expected timeline or dial)")),
        }
    }
}

const CELL: usize = 2;

impl ChartRenderer for Timeline {
    fn render(&self, snapshot: &DashboardSnapshot, palette: &Palette) -> String {
        let name_width = snapshot.rows.iter().map(|r| r.city.chars().count()).max().unwrap_or(0).max("Overlap".len());
        let lead = name_width + 1 + 5 + 1 + 9 + 2;
        let mut out = String::new();

        // Hour ruler, labelled every 3 hours.
        let ruler: String = (0..24).step_by(3).map(|h| format!("{:<width$}", h, width = 3 * CELL)).collect();
        let _ = writeln!(out, "{}{}", " ".repeat(lead), palette.paint(ruler.trim_end(), ansi::GRAY));

        let marker_col = (snapshot.now_fraction as usize).min(23) * CELL;
        let _ = writeln!(out, "{}{}", " ".repeat(lead + marker_col), palette.paint("▼", ansi::RED));

        for (idx, row) in snapshot.rows.iter().enumerate() {
            let color = ansi::RING[idx % ansi::RING.len()];
            let _ = writeln!(
                out,
                "{:<name_width$} {:>5} {:>9} │{}│",
                row.city,
                row_time(row),
                offset_label(row.utc_offset),
                bar(row.business_hours, color, palette),
            );
        }

        let _ = writeln!(
            out,
            "{:<name_width$} {:>5} {:>9} │{}│",
            "Overlap",
            "",
            "",
            bar(snapshot.overlap, ansi::GREEN, palette),
        );
        let _ = writeln!(out, "{}{}", " ".repeat(lead), palette.dim(format!("UTC hours {}", snapshot.overlap)));
        out
    }
}

impl ChartRenderer for Dial {
    fn render(&self, snapshot: &DashboardSnapshot, palette: &Palette) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "  {} {}",
            palette.paint("◷ hand", ansi::RED),
            palette.dim(format!("{:.1}° ({:05.2}h UTC)", snapshot.clock_hand, snapshot.now_fraction)),
        );

        for (idx, row) in snapshot.rows.iter().enumerate() {
            let color = ansi::RING[idx % ansi::RING.len()];
            let arcs: Vec<String> = overlap_windows(row.business_hours)
                .iter()
                .map(|w| format!("{:02}:00-{:02}:00", w.start_hour, w.end_hour()))
                .collect();
            let arcs = if arcs.is_empty() { "no business hours".to_string() } else { arcs.join(", ") };
            let _ = writeln!(
                out,
                "  {} {} {} {}",
                palette.paint(format!("ring {}", idx + 1), ansi::GRAY),
                palette.bold(palette.paint(&row.city, color)),
                palette.dim(format!("{} {}", row_time(row), offset_label(row.utc_offset))),
                palette.paint(arcs, color),
            );
        }

        let _ = writeln!(out, "\n  {}", caption(snapshot, palette));
        out
    }
}

/// "we can chat in …" summary for the longest shared window.
pub fn caption(snapshot: &DashboardSnapshot, palette: &Palette) -> String {
    if snapshot.rows.is_empty() {
        return palette.dim("add a location to see shared hours");
    }
    if let Some(w) = snapshot.current_overlap() {
        return format!("{} {}", palette.paint("we can chat now", ansi::GREEN), palette.dim(format!("({}h window)", w.hours)));
    }
    match snapshot.longest_overlap() {
        Some(w) => format!(
            "{} {} {}",
            palette.paint("we can chat at", ansi::GREEN),
            palette.bold(format!("{:02}:00 UTC", w.start_hour)),
            palette.paint(format!("for up to {}", plural_hours(w.hours)), ansi::YELLOW),
        ),
        None => palette.paint("no shared business hours", ansi::YELLOW),
    }
}

pub fn print_dashboard(snapshot: &DashboardSnapshot, chart: ChartKind, palette: &Palette) {
    println!(
        "\n{}  {}  {}",
        palette.bold(palette.paint("⚡ Global Time Sync", ansi::CYAN)),
        palette.paint(snapshot.instant.format("%Y-%m-%d %H:%M:%S UTC").to_string(), ansi::GREEN),
        palette.dim(format!("business hours {}", snapshot.window)),
    );
    println!("\n{}", chart.renderer().render(snapshot, palette));
    if chart == ChartKind::Timeline {
        println!("  {}", caption(snapshot, palette));
    }
    println!("\n  {}", usage_bar(snapshot.used, snapshot.capacity, palette));
}

pub fn print_regions(regions: &[(String, usize)], palette: &Palette) {
    for (name, count) in regions {
        println!("  {} {}", palette.paint(format!("{name:<12}"), ansi::CYAN), palette.dim(format!("{count} zones")));
    }
}

pub fn print_entries(region: &str, entries: &[CatalogEntry], palette: &Palette) {
    println!("{}", palette.bold(palette.paint(region, ansi::CYAN)));
    if entries.is_empty() {
        println!("  {}", palette.dim("nothing left to add"));
    }
    for entry in entries {
        println!("  {}", entry.label);
    }
}

fn bar(mask: HourMask, color: &str, palette: &Palette) -> String {
    mask.to_bitmap()
        .iter()
        .map(|on| if *on { palette.paint("█".repeat(CELL), color) } else { palette.dim("·".repeat(CELL)) })
        .collect()
}

fn usage_bar(used: usize, capacity: usize, palette: &Palette) -> String {
    let filled = "█".repeat(used);
    let empty = "░".repeat(capacity.saturating_sub(used));
    format!("Using {used}/{capacity} locations {}{}", palette.paint(filled, ansi::GREEN), palette.dim(empty))
}

fn row_time(row: &LocationRow) -> &str {
    if row.utc_offset.is_some() { &row.local_time } else { "--:--" }
}

/// `UTC+5:30`, `UTC-5`, `UTC`; `UTC?` when the zone did not resolve.
pub fn offset_label(offset: Option<f64>) -> String {
    let Some(offset) = offset else {
        return "UTC?".to_string();
    };
    let minutes = (offset * 60.0).round() as i64;
    if minutes == 0 {
        return "UTC".to_string();
    }
    let sign = if minutes < 0 { '-' } else { '+' };
    let (h, m) = (minutes.abs() / 60, minutes.abs() % 60);
    if m == 0 { format!("UTC{sign}{h}") } else { format!("UTC{sign}{h}:{m:02}") }
}

fn plural_hours(hours: u32) -> String {
    if hours == 1 { "1 hour".to_string() } else { format!("{hours} hours") }
}

#[cfg(test)]
mod tests {
    use super::*;
    use meridian::{BusinessWindow, Context, Options, Session};

    fn snapshot() -> DashboardSnapshot {
        let mut session = Session::default();
        session.registry_mut().remove(2).unwrap();
        let instant = "2024-01-15T12:00:00Z".parse().unwrap();
        session.snapshot(&Context::at(instant))
    }

    #[test]
    fn offset_labels() {
        assert_eq!(offset_label(Some(-5.0)), "UTC-5");
        assert_eq!(offset_label(Some(5.5)), "UTC+5:30");
        assert_eq!(offset_label(Some(5.75)), "UTC+5:45");
        assert_eq!(offset_label(Some(-3.5)), "UTC-3:30");
        assert_eq!(offset_label(Some(0.0)), "UTC");
        assert_eq!(offset_label(None), "UTC?");
    }

    #[test]
    fn chart_kind_from_str() {
        assert_eq!("dial".parse::<ChartKind>(), Ok(ChartKind::Dial));
        assert_eq!("timeline".parse::<ChartKind>(), Ok(ChartKind::Timeline));
        assert!("polar".parse::<ChartKind>().is_err());
    }

    #[test]
    fn timeline_without_color() {
        let out = Timeline.render(&snapshot(), &Palette::new(false));
        let lines: Vec<&str> = out.lines().collect();

        assert!(lines[0].trim_start().starts_with("0     3     6"));
        assert!(lines[1].ends_with('▼'));
        assert!(lines[2].starts_with("New York 07:00     UTC-5 │"));
        assert!(lines[3].starts_with("London   12:00       UTC │"));

        let overlap_bar = lines[4].split('│').nth(1).unwrap();
        assert_eq!(overlap_bar, format!("{}{}{}", "··".repeat(13), "██".repeat(6), "··".repeat(5)));
        assert!(lines[5].ends_with("UTC hours 13-18"));
    }

    #[test]
    fn dial_lists_arcs_and_caption() {
        let out = Dial.render(&snapshot(), &Palette::new(false));
        assert!(out.contains("ring 1 New York 07:00 UTC-5 13:00-00:00"));
        assert!(out.contains("ring 2 London 12:00 UTC 08:00-19:00"));
        assert!(out.contains("we can chat at 13:00 UTC for up to 6 hours"));
    }

    #[test]
    fn caption_variants() {
        let palette = Palette::new(false);
        let empty = Session::empty(Options::default()).snapshot(&Context::default());
        assert_eq!(caption(&empty, &palette), "add a location to see shared hours");

        let none = Session::default().snapshot(&Context::at("2024-01-15T12:00:00Z".parse().unwrap()));
        assert_eq!(caption(&none, &palette), "no shared business hours");

        let mut session = Session::default();
        session.registry_mut().remove(2).unwrap();
        let now = session.snapshot(&Context::at("2024-01-15T14:00:00Z".parse().unwrap()));
        assert_eq!(caption(&now, &palette), "we can chat now (6h window)");
    }

    #[test]
    fn caption_reports_the_run_in_progress() {
        let palette = Palette::new(false);
        let options = Options { window: BusinessWindow::new(0, 20).unwrap(), ..Options::default() };
        let mut session = Session::empty(options);
        session.registry_mut().add("London", "Europe/London").unwrap();
        session.registry_mut().add("Tokyo", "Asia/Tokyo").unwrap();

        // Shared hours are 00-11 and 15-20 UTC.
        let afternoon = session.snapshot(&Context::at("2024-01-15T16:00:00Z".parse().unwrap()));
        assert_eq!(caption(&afternoon, &palette), "we can chat now (6h window)");

        let morning = session.snapshot(&Context::at("2024-01-15T03:00:00Z".parse().unwrap()));
        assert_eq!(caption(&morning, &palette), "we can chat now (12h window)");

        let gap = session.snapshot(&Context::at("2024-01-15T13:00:00Z".parse().unwrap()));
        assert_eq!(caption(&gap, &palette), "we can chat at 00:00 UTC for up to 12 hours");
    }

    #[test]
    fn usage_bar_counts() {
        assert_eq!(usage_bar(3, 6, &Palette::new(false)), "Using 3/6 locations ███░░░");
    }
}
