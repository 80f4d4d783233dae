use super::*;
use crate::{Error, Location};
use chrono::{DateTime, TimeZone, Utc};
use proptest::prelude::*;

fn winter() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap()
}

fn summer() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 7, 15, 12, 0, 0).unwrap()
}

fn defaults() -> Vec<Location> {
    vec![
        Location::new("New York", "America/New_York"),
        Location::new("London", "Europe/London"),
        Location::new("Tokyo", "Asia/Tokyo"),
    ]
}

#[test]
fn offsets_follow_daylight_saving() {
    // (zone, winter offset, summer offset)
    let cases: Vec<(&str, f64, f64)> = vec![
        ("America/New_York", -5.0, -4.0),
        ("Europe/London", 0.0, 1.0),
        ("Asia/Tokyo", 9.0, 9.0),
        ("Asia/Kolkata", 5.5, 5.5),
        ("Asia/Kathmandu", 5.75, 5.75),
        ("America/St_Johns", -3.5, -2.5),
        ("Australia/Adelaide", 10.5, 9.5),
        ("UTC", 0.0, 0.0),
    ];

    for (zone, jan, jul) in cases {
        assert_eq!(utc_offset_hours(zone, winter()).unwrap(), jan, "{zone} in January");
        assert_eq!(utc_offset_hours(zone, summer()).unwrap(), jul, "{zone} in July");
    }
}

#[test]
fn unknown_zone_is_reported() {
    assert_eq!(utc_offset_hours("Mars/Olympus_Mons", winter()), Err(Error::UnknownTimeZone("Mars/Olympus_Mons".into())));
    assert_eq!(try_local_time("Not/A_Zone", winter()), Err(Error::UnknownTimeZone("Not/A_Zone".into())));
}

#[test]
fn local_time_labels() {
    assert_eq!(local_time("America/New_York", winter()), "07:00");
    assert_eq!(local_time("America/New_York", summer()), "08:00");
    assert_eq!(local_time("Asia/Kolkata", winter()), "17:30");
    assert_eq!(local_time("Asia/Tokyo", winter()), "21:00");
}

#[test]
fn local_time_sentinel_for_unknown_zone() {
    assert_eq!(local_time("Invalid/Zone", winter()), INVALID_TIMEZONE);
    assert_eq!(local_time("", winter()), "Invalid Timezone");
}

#[test]
fn business_hour_examples() {
    let w = BusinessWindow::STANDARD;
    let t = winter();

    // UTC 13: New York 08, London 13, Tokyo 22.
    assert!(is_business_hour(13, "America/New_York", t, w));
    assert!(is_business_hour(13, "Europe/London", t, w));
    assert!(!is_business_hour(13, "Asia/Tokyo", t, w));

    // UTC 9: New York 04.
    assert!(!is_business_hour(9, "America/New_York", t, w));
    assert!(is_business_hour(9, "Europe/London", t, w));
    assert!(is_business_hour(9, "Asia/Tokyo", t, w));

    // Both window bounds are inclusive: London 18:00.
    assert!(is_business_hour(18, "Europe/London", t, w));
    assert!(!is_business_hour(19, "Europe/London", t, w));
}

#[test]
fn unknown_zone_is_never_business_hour() {
    for h in 0..24 {
        assert!(!is_business_hour(h, "Nowhere/Land", winter(), BusinessWindow::STANDARD));
    }
    assert!(business_hours("Nowhere/Land", winter(), BusinessWindow::STANDARD, OffsetRounding::Floor).is_empty());
}

#[test]
fn per_zone_business_masks() {
    let w = BusinessWindow::STANDARD;
    let floor = OffsetRounding::Floor;

    // (zone, instant, expected UTC buckets)
    let cases: Vec<(&str, DateTime<Utc>, HourMask)> = vec![
        ("America/New_York", winter(), HourMask::from_hours(13..=23)),
        ("America/New_York", summer(), HourMask::from_hours(12..=22)),
        ("Europe/London", winter(), HourMask::from_hours(8..=18)),
        ("Asia/Tokyo", winter(), HourMask::from_hours([23, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9])),
        ("Asia/Kolkata", winter(), HourMask::from_hours(3..=13)),
        ("America/St_Johns", winter(), HourMask::from_hours(12..=22)),
    ];

    for (zone, instant, expected) in cases {
        assert_eq!(business_hours(zone, instant, w, floor), expected, "{zone} at {instant}");
    }
}

#[test]
fn exact_rounding_differs_only_for_fractional_offsets() {
    let w = BusinessWindow::STANDARD;
    let t = winter();

    // Floor treats Kolkata (+5:30) as +5; exact drops the 13:00 UTC bucket (18:30 local).
    assert!(is_business_hour_with(13, "Asia/Kolkata", t, w, OffsetRounding::Floor));
    assert!(!is_business_hour_with(13, "Asia/Kolkata", t, w, OffsetRounding::Exact));
    assert_eq!(business_hours("Asia/Kolkata", t, w, OffsetRounding::Exact), HourMask::from_hours(3..=12));

    // St John's (-3:30): floor(-3.5) = -4.
    assert_eq!(business_hours("America/St_Johns", t, w, OffsetRounding::Exact), HourMask::from_hours(12..=21));

    for zone in ["America/New_York", "Europe/London", "Asia/Tokyo"] {
        assert_eq!(
            business_hours(zone, t, w, OffsetRounding::Floor),
            business_hours(zone, t, w, OffsetRounding::Exact),
            "{zone}"
        );
    }
}

#[test]
fn extreme_hours_wrap_without_overflow() {
    let t = winter();
    let w = BusinessWindow::STANDARD;
    for (h, zone) in [(i64::MAX, "Asia/Tokyo"), (i64::MIN, "America/New_York"), (i64::MIN, "Asia/Kolkata")] {
        for rounding in [OffsetRounding::Floor, OffsetRounding::Exact] {
            assert_eq!(
                is_business_hour_with(h, zone, t, w, rounding),
                is_business_hour_with(h.rem_euclid(24), zone, t, w, rounding),
                "{zone} at {h} ({rounding:?})"
            );
        }
    }
    // i64::MAX is 7 mod 24: 16:00 in Tokyo.
    assert!(is_business_hour(i64::MAX, "Asia/Tokyo", t, w));
}

#[test]
fn wrapping_window_masks() {
    let night = BusinessWindow::new(22, 6).unwrap();
    let mask = business_hours("Europe/London", winter(), night, OffsetRounding::Floor);
    assert_eq!(mask, HourMask::from_hours([22, 23, 0, 1, 2, 3, 4, 5, 6]));
}

#[test]
fn overlap_of_default_locations() {
    let t = winter();
    let overlap = overlap_hours(&defaults(), t);

    // New York 13-23, London 8-18, Tokyo 23-9: no common bucket.
    assert!(!overlap.contains_hour(13));
    assert!(!overlap.contains_hour(9));
    assert_eq!(overlap, HourMask::empty());
}

#[test]
fn overlap_of_pairs() {
    let t = winter();
    let ny = Location::new("New York", "America/New_York");
    let london = Location::new("London", "Europe/London");
    let tokyo = Location::new("Tokyo", "Asia/Tokyo");

    assert_eq!(overlap_hours(&[ny.clone(), london.clone()], t), HourMask::from_hours(13..=18));
    assert_eq!(overlap_hours(&[london.clone(), tokyo.clone()], t), HourMask::from_hours([8, 9]));
    assert_eq!(overlap_hours(&[ny.clone(), tokyo], t), HourMask::H23);

    // Summer time moves New York an hour earlier.
    assert_eq!(overlap_hours(&[ny, london], summer()), HourMask::from_hours(12..=17));
}

#[test]
fn overlap_of_nothing_is_empty() {
    assert_eq!(overlap_hours(&[], winter()), HourMask::empty());
    assert_eq!(overlap_hours(&[], summer()), HourMask::empty());
}

#[test]
fn overlap_with_a_bad_entry_is_empty() {
    let mut locations = defaults();
    locations.truncate(1);
    locations.push(Location::new("Atlantis", "Ocean/Atlantis"));
    assert_eq!(overlap_hours(&locations, winter()), HourMask::empty());
}

#[test]
fn overlap_windows_of_real_zones() {
    let locations = vec![Location::new("London", "Europe/London"), Location::new("Berlin", "Europe/Berlin")];
    let overlap = overlap_hours(&locations, winter());
    assert_eq!(overlap, HourMask::from_hours(8..=17));
    assert_eq!(longest_overlap(overlap), Some(OverlapWindow { start_hour: 8, hours: 10 }));
}

proptest! {
    #[test]
    fn business_hour_repeats_every_day(
        h in prop_oneof![-200i64..200, any::<i64>(), Just(i64::MIN), Just(i64::MAX)],
        zone_idx in 0usize..5,
        exact in any::<bool>(),
    ) {
        let zones = ["America/New_York", "Europe/London", "Asia/Tokyo", "Asia/Kolkata", "America/St_Johns"];
        let zone = zones[zone_idx];
        let w = BusinessWindow::STANDARD;
        let rounding = if exact { OffsetRounding::Exact } else { OffsetRounding::Floor };
        let base = is_business_hour_with(h, zone, winter(), w, rounding);
        if let Some(next_day) = h.checked_add(24) {
            prop_assert_eq!(base, is_business_hour_with(next_day, zone, winter(), w, rounding));
        }
        if let Some(prev_day) = h.checked_sub(24) {
            prop_assert_eq!(base, is_business_hour_with(prev_day, zone, winter(), w, rounding));
        }
        prop_assert_eq!(base, is_business_hour_with(h.rem_euclid(24), zone, winter(), w, rounding));
    }

    #[test]
    fn overlap_is_subset_of_every_location(mask_idx in proptest::collection::vec(0usize..6, 1..5)) {
        let zones = ["America/New_York", "Europe/London", "Asia/Tokyo", "Asia/Kolkata", "Australia/Sydney", "America/Los_Angeles"];
        let locations: Vec<Location> = mask_idx.iter().map(|i| Location::from_zone(zones[*i])).collect();
        let overlap = overlap_hours(&locations, winter());
        for loc in &locations {
            let own = business_hours(&loc.timezone_id, winter(), BusinessWindow::STANDARD, OffsetRounding::Floor);
            prop_assert!(own.contains(overlap));
        }
    }
}
