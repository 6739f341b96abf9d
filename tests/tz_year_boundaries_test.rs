use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeDelta, Utc};
use chrono_tz::Tz;
use yearbound::{
    lookup_zone, to_end_of_next_tz_year, to_end_of_previous_tz_year, to_end_of_tz_year,
    to_end_of_tz_year_named, to_start_of_next_tz_year, to_start_of_previous_tz_year,
    to_start_of_tz_year, to_start_of_year, Result, YearBoundError, YearWindow, ZoneRules, TICK,
};

fn utc(s: &str) -> DateTime<Utc> {
    s.parse().unwrap()
}

/// Offset that grows by one hour per calendar year since 2000; enough to show
/// where conversion happens in each pipeline.
struct DriftingZone;

impl DriftingZone {
    fn offset_for_year(year: i32) -> TimeDelta {
        TimeDelta::hours(((year - 2000) % 12).into())
    }
}

impl ZoneRules for DriftingZone {
    fn zone_name(&self) -> String {
        "Test/Drifting".to_string()
    }

    fn to_local(&self, utc: DateTime<Utc>) -> Result<NaiveDateTime> {
        use chrono::Datelike;
        Ok(utc.naive_utc() + Self::offset_for_year(utc.year()))
    }

    fn to_utc(&self, local: NaiveDateTime) -> Result<DateTime<Utc>> {
        use chrono::Datelike;
        Ok((local - Self::offset_for_year(local.year())).and_utc())
    }
}

#[test]
fn test_zero_offset_zone_matches_naive_result() {
    let zero = FixedOffset::east_opt(0).unwrap();
    for s in ["2024-06-15T10:30:00Z", "2024-01-01T00:00:00Z", "1999-12-31T23:59:59Z"] {
        let t = utc(s);
        let naive = to_start_of_year(t.naive_utc()).unwrap().and_utc();
        assert_eq!(to_start_of_tz_year(t, &zero).unwrap(), naive);
        assert_eq!(to_start_of_tz_year(t, &Utc).unwrap(), naive);
        assert_eq!(to_start_of_tz_year(t, &Tz::UTC).unwrap(), naive);
    }
}

#[test]
fn test_utc_minus_five_scenario() {
    let zone = FixedOffset::west_opt(5 * 3600).unwrap();
    let t = utc("2024-01-01T03:00:00Z");
    assert_eq!(to_start_of_tz_year(t, &zone).unwrap(), utc("2023-01-01T05:00:00Z"));
}

#[test]
fn test_end_variants_are_one_tick_before_starts() {
    let zone = Tz::Europe__Berlin;
    let t = utc("2024-06-15T10:30:00Z");

    assert_eq!(
        to_end_of_tz_year(t, &zone).unwrap() + TICK,
        to_start_of_next_tz_year(t, &zone).unwrap()
    );
    assert_eq!(
        to_end_of_previous_tz_year(t, &zone).unwrap() + TICK,
        to_start_of_tz_year(t, &zone).unwrap()
    );
    assert_eq!(to_start_of_tz_year(t, &zone).unwrap(), utc("2023-12-31T23:00:00Z"));
}

#[test]
fn test_previous_and_next_offset_the_utc_start() {
    let zone = DriftingZone;
    let t = utc("2005-06-01T00:00:00Z");

    // Local start of 2005 is 2005-01-01T00:00 at +5h.
    let start = to_start_of_tz_year(t, &zone).unwrap();
    assert_eq!(start, utc("2004-12-31T19:00:00Z"));

    // The flat one-year offset keeps the +5h shift instead of using 2004's +4h.
    assert_eq!(
        to_start_of_previous_tz_year(t, &zone).unwrap(),
        utc("2003-12-31T19:00:00Z")
    );
    assert_eq!(
        to_end_of_next_tz_year(t, &zone).unwrap(),
        utc("2005-12-31T18:59:59.999999999Z")
    );

    // Next-year start is computed in local time, so it carries 2006's +6h.
    assert_eq!(
        to_start_of_next_tz_year(t, &zone).unwrap(),
        utc("2005-12-31T18:00:00Z")
    );
}

#[test]
fn test_window_in_zone_contains_input() {
    let zone = lookup_zone("Pacific/Auckland").unwrap();
    for s in ["2024-12-31T11:00:00Z", "2024-12-31T10:59:59Z", "2024-07-01T00:00:00Z"] {
        let t = utc(s);
        assert!(YearWindow::in_zone(t, &zone).unwrap().contains(&t), "{}", s);
    }
}

#[test]
fn test_dst_zone_uses_winter_offset_at_new_year() {
    let zone = Tz::America__New_York;
    let t = utc("2024-07-04T16:00:00Z");
    assert_eq!(to_start_of_tz_year(t, &zone).unwrap(), utc("2024-01-01T05:00:00Z"));
    assert_eq!(
        to_end_of_tz_year(t, &zone).unwrap(),
        utc("2025-01-01T04:59:59.999999999Z")
    );
}

#[test]
fn test_dyn_zone_rules() {
    let zones: Vec<Box<dyn ZoneRules>> = vec![
        Box::new(Utc),
        Box::new(FixedOffset::east_opt(3600).unwrap()),
        Box::new(Tz::Asia__Kolkata),
    ];
    let t = utc("2024-06-15T10:30:00Z");
    for zone in &zones {
        let start = to_start_of_tz_year(t, zone.as_ref()).unwrap();
        let end = to_end_of_tz_year(t, zone.as_ref()).unwrap();
        assert!(start <= t && t <= end, "{}", zone.zone_name());
    }
}

#[test]
fn test_invalid_zone_names() {
    let t = utc("2024-06-15T10:30:00Z");
    for name in ["", "Invalid/Zone", "EST+5 nonsense"] {
        assert!(matches!(
            to_end_of_tz_year_named(t, name),
            Err(YearBoundError::InvalidTimeZone { .. })
        ));
    }
}

#[test]
fn test_out_of_range_in_zone() {
    let t = DateTime::<Utc>::MAX_UTC;
    assert!(matches!(
        to_start_of_next_tz_year(t, &Utc),
        Err(YearBoundError::OutOfRange { .. })
    ));
}
