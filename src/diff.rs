/*!
Measuring the difference between two points in time.

Every `difference_in_*` function returns the number of whole units from
`right` to `left`. The result is positive when `left` is later than `right`
and any fractional unit is truncated toward zero. Calendar units are
measured in `right`'s time zone, so a day is a calendar day in that time
zone and not necessarily 24 hours.

```
use jiff::civil::date;

let right = date(2025, 1, 31).at(12, 0, 0, 0).in_tz("UTC")?;
let left = date(2025, 3, 30).at(12, 0, 0, 0).in_tz("UTC")?;
assert_eq!(jiff_fns::difference_in_months(&left, &right)?, 1);
assert_eq!(jiff_fns::difference_in_months(&right, &left)?, -1);
assert_eq!(jiff_fns::difference_in_days(&left, &right)?, 58);

# Ok::<(), Box<dyn std::error::Error>>(())
```
*/

use jiff::{Span, Unit};

use crate::{
    error::Error,
    input::{normalize, Temporal},
};

/// Returns the span from `right` to `left` with `largest` as its largest
/// unit.
///
/// This is the general form of all of the `difference_in_*` functions. The
/// span is balanced, e.g., with a largest unit of days, the span returned
/// may have days, hours, minutes and so on, but never weeks or months.
///
/// # Errors
///
/// This returns an error when the span can't be represented, e.g., because
/// the number of units would overflow.
///
/// # Example
///
/// ```
/// use jiff::{civil::date, Unit};
///
/// let right = date(2025, 1, 20).at(9, 0, 0, 0).in_tz("UTC")?;
/// let left = date(2025, 3, 22).at(10, 30, 0, 0).in_tz("UTC")?;
/// let span = jiff_fns::difference(&left, &right, Unit::Month)?;
/// assert_eq!(span.get_months(), 2);
/// assert_eq!(span.get_days(), 2);
/// assert_eq!(span.get_hours(), 1);
/// assert_eq!(span.get_minutes(), 30);
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn difference(
    left: impl Into<Temporal>,
    right: impl Into<Temporal>,
    largest: Unit,
) -> Result<Span, Error> {
    let right = normalize(right);
    let left = normalize(left).with_time_zone(right.time_zone().clone());
    Ok(right.until((largest, &left))?)
}

macro_rules! difference_fns {
    ($($unit:literal, $name:ident, $largest:expr, $get:ident;)*) => {
        $(
            #[doc = concat!(
                "Returns the number of whole ", $unit,
                " from `right` to `left`.",
            )]
            ///
            /// The result is negative when `left` is before `right`.
            ///
            /// # Errors
            ///
            /// This returns an error when the difference can't be
            /// represented.
            pub fn $name(
                left: impl Into<Temporal>,
                right: impl Into<Temporal>,
            ) -> Result<i64, Error> {
                let span = difference(left, right, $largest)?;
                Ok(i64::from(span.$get()))
            }
        )*
    }
}

difference_fns! {
    "years", difference_in_years, Unit::Year, get_years;
    "months", difference_in_months, Unit::Month, get_months;
    "weeks", difference_in_weeks, Unit::Week, get_weeks;
    "days", difference_in_days, Unit::Day, get_days;
    "hours", difference_in_hours, Unit::Hour, get_hours;
    "minutes", difference_in_minutes, Unit::Minute, get_minutes;
    "seconds", difference_in_seconds, Unit::Second, get_seconds;
    "milliseconds", difference_in_milliseconds, Unit::Millisecond,
        get_milliseconds;
}

#[cfg(test)]
mod tests {
    use jiff::{civil::date, Timestamp};

    use super::*;

    fn utc(s: &str) -> Timestamp {
        s.parse().unwrap()
    }

    #[test]
    fn calendar_units_truncate() {
        let right = date(2024, 2, 29).at(0, 0, 0, 0).in_tz("UTC").unwrap();
        let left = date(2025, 2, 28).at(0, 0, 0, 0).in_tz("UTC").unwrap();
        assert_eq!(difference_in_years(&left, &right).unwrap(), 0);
        assert_eq!(difference_in_months(&left, &right).unwrap(), 11);
        assert_eq!(difference_in_weeks(&left, &right).unwrap(), 52);
        assert_eq!(difference_in_days(&left, &right).unwrap(), 365);

        let left = date(2025, 3, 1).at(0, 0, 0, 0).in_tz("UTC").unwrap();
        assert_eq!(difference_in_years(&left, &right).unwrap(), 1);
        assert_eq!(difference_in_years(&right, &left).unwrap(), -1);
    }

    #[test]
    fn time_units() {
        let right = utc("2025-01-20T00:00:00Z");
        let left = utc("2025-01-20T01:30:45.5Z");
        assert_eq!(difference_in_hours(left, right).unwrap(), 1);
        assert_eq!(difference_in_minutes(left, right).unwrap(), 90);
        assert_eq!(difference_in_seconds(left, right).unwrap(), 5_445);
        assert_eq!(
            difference_in_milliseconds(left, right).unwrap(),
            5_445_500,
        );
        assert_eq!(difference_in_seconds(right, left).unwrap(), -5_445);
    }

    #[test]
    fn days_are_calendar_days() {
        // 2024-03-10 is 23 hours long in New York.
        let right = date(2024, 3, 9)
            .at(12, 0, 0, 0)
            .in_tz("America/New_York")
            .unwrap();
        let left = date(2024, 3, 10)
            .at(12, 0, 0, 0)
            .in_tz("America/New_York")
            .unwrap();
        assert_eq!(difference_in_days(&left, &right).unwrap(), 1);
        assert_eq!(difference_in_hours(&left, &right).unwrap(), 23);
    }

    #[test]
    fn measured_in_right_time_zone() {
        // One calendar day in New York, but only 23 hours in UTC.
        let right = date(2024, 3, 9)
            .at(12, 0, 0, 0)
            .in_tz("America/New_York")
            .unwrap();
        let left = utc("2024-03-10T16:00:00Z");
        assert_eq!(difference_in_days(left, &right).unwrap(), 1);
        assert_eq!(difference_in_days(&right, left).unwrap(), 0);
        assert_eq!(difference_in_hours(&right, left).unwrap(), -23);
    }

    #[test]
    fn balanced_span() {
        let right = utc("2025-01-20T00:00:00Z");
        let left = utc("2025-01-21T02:03:04Z");
        let span = difference(left, right, Unit::Day).unwrap();
        assert_eq!(
            (span.get_days(), span.get_hours(), span.get_minutes()),
            (1, 2, 3),
        );
        assert_eq!(span.get_seconds(), 4);
        assert_eq!(span.get_weeks(), 0);
    }
}
