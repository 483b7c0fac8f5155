use jiff::{civil::date, RoundMode, Timestamp, ToSpan, Unit, Zoned};
use jiff_fns::RoundOptions;

use crate::Result;

fn utc(s: &str) -> std::result::Result<Timestamp, jiff::Error> {
    s.parse()
}

#[test]
fn arithmetic_preserves_time_zone() -> Result {
    let zdt: Zoned = "2025-03-29T10:00:00+01:00[Europe/Paris]".parse()?;
    // Paris moves to summer time on 2025-03-30.
    let got = jiff_fns::add_days(&zdt, 1)?;
    assert_eq!(got.to_string(), "2025-03-30T10:00:00+02:00[Europe/Paris]");
    let got = jiff_fns::add_hours(&zdt, 24)?;
    assert_eq!(got.to_string(), "2025-03-30T11:00:00+02:00[Europe/Paris]");
    let got = jiff_fns::sub(&got, 1.day().hours(1))?;
    assert_eq!(got, zdt);
    Ok(())
}

#[test]
fn arithmetic_on_timestamps() -> Result {
    let ts = utc("2024-01-31T08:00:00Z")?;
    let got = jiff_fns::add_months(ts, 1)?;
    assert_eq!(got.to_string(), "2024-02-29T08:00:00+00:00[UTC]");
    let got = jiff_fns::sub_milliseconds(ts, 1)?;
    assert_eq!(got.timestamp().to_string(), "2024-01-31T07:59:59.999Z");
    Ok(())
}

#[test]
fn comparisons() -> Result {
    let a = utc("2025-01-20T15:00:00Z")?;
    // 2025-01-21T02:00:00+11:00
    let b = a.in_tz("Australia/Sydney")?;
    assert!(jiff_fns::is_equal(a, &b));
    // Days are compared in the time zone of the first argument.
    assert!(jiff_fns::is_same_day(a, &b));
    assert!(jiff_fns::is_same_day(&b, a));
    // 2025-01-20T23:00:00+11:00
    let c = utc("2025-01-20T12:00:00Z")?;
    assert!(jiff_fns::is_same_day(a, c));
    assert!(!jiff_fns::is_same_day(&b, c));

    let mut times = vec![
        jiff_fns::add_days(a, 3)?,
        jiff_fns::normalize(a),
        jiff_fns::sub_days(a, 3)?,
    ];
    times.sort_by(|x, y| jiff_fns::compare(x, y));
    assert_eq!(times[0].date(), date(2025, 1, 17));
    times.sort_by(|x, y| jiff_fns::compare_desc(x, y));
    assert_eq!(times[0].date(), date(2025, 1, 23));
    assert_eq!(jiff_fns::min(&times), Some(times[2].clone()));
    assert_eq!(jiff_fns::max(&times), Some(times[0].clone()));
    Ok(())
}

#[test]
fn differences() -> Result {
    let tz = "America/New_York";
    let right = date(2020, 2, 29).at(0, 0, 0, 0).in_tz(tz)?;
    let left = date(2025, 1, 20).at(12, 0, 0, 0).in_tz(tz)?;
    assert_eq!(jiff_fns::difference_in_years(&left, &right)?, 4);
    assert_eq!(jiff_fns::difference_in_months(&left, &right)?, 58);
    assert_eq!(jiff_fns::difference_in_years(&right, &left)?, -4);

    let span = jiff_fns::difference(&left, &right, Unit::Year)?;
    assert_eq!(span.get_years(), 4);
    assert_eq!(span.get_months(), 10);
    assert_eq!(span.get_days(), 22);
    assert_eq!(span.get_hours(), 12);
    Ok(())
}

#[test]
fn rounding_and_periods() -> Result {
    let zdt = date(2025, 1, 20).at(13, 37, 0, 0).in_tz("Europe/London")?;
    let got = jiff_fns::round(&zdt, (Unit::Minute, 30))?;
    assert_eq!(got.datetime(), date(2025, 1, 20).at(13, 30, 0, 0));
    let opts = RoundOptions::new(Unit::Hour).mode(RoundMode::Ceil);
    let got = jiff_fns::round(&zdt, opts)?;
    assert_eq!(got.datetime(), date(2025, 1, 20).at(14, 0, 0, 0));

    let start = jiff_fns::start_of_year(&zdt)?;
    let end = jiff_fns::end_of_year(&zdt)?;
    assert_eq!(
        start.to_string(),
        "2025-01-01T00:00:00+00:00[Europe/London]",
    );
    assert_eq!(
        end.to_string(),
        "2025-12-31T23:59:59.999999999+00:00[Europe/London]",
    );
    assert!(jiff_fns::is_within(&zdt, &start, &end));
    assert_eq!(jiff_fns::difference_in_days(&end, &start)?, 364);
    Ok(())
}

#[test]
fn relative_phrases() -> Result {
    let right = utc("2025-01-20T12:00:00Z")?;
    let left = jiff_fns::add_weeks(right, 3)?;
    assert_eq!(jiff_fns::format_distance(&left, right)?, "in 21 days");
    assert_eq!(jiff_fns::format_distance(right, &left)?, "21 days ago");
    assert_eq!(jiff_fns::format_relative(-5, Unit::Minute)?, "5 minutes ago");
    Ok(())
}

#[test]
fn time_zones() -> Result {
    let ts = utc("2025-07-01T00:00:00Z")?;
    let zdt = jiff_fns::in_time_zone(ts, "America/Los_Angeles")?;
    assert_eq!(zdt.datetime(), date(2025, 6, 30).at(17, 0, 0, 0));
    let err = jiff_fns::in_time_zone(ts, "Nowhere/Special").unwrap_err();
    assert!(err.is_jiff());
    Ok(())
}
