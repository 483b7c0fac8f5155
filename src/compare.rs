/*!
Comparing points in time.

The ordering functions ([`compare`], [`is_before`], [`is_after`],
[`is_equal`], [`min`] and [`max`]) compare absolute instants. The time zone
of each input doesn't matter.

The `is_same_*` functions compare calendar and clock fields instead. Since
the same instant can fall on different days in different time zones, the
second input is first converted to the time zone of the first input. So
`is_same_day(a, b)` asks "is `b` on the same day as `a`, from `a`'s point of
view?"

```
use jiff::Zoned;

let a: Zoned = "2025-01-20T23:00-05[America/New_York]".parse()?;
let b: Zoned = "2025-01-21T04:30Z[UTC]".parse()?;
// `b` is 2025-01-20T23:30 in New York.
assert!(jiff_fns::is_same_day(&a, &b));
// And in UTC, both are on 2025-01-21.
assert!(jiff_fns::is_same_day(&b, &a));
assert!(jiff_fns::is_before(&a, &b));

# Ok::<(), Box<dyn std::error::Error>>(())
```
*/

use core::cmp::Ordering;

use jiff::Zoned;

use crate::input::{normalize, Temporal};

/// Compares two inputs by the instant in time they represent.
///
/// This returns `Ordering::Less` when `a` is before `b`. This is suitable for
/// sorting in ascending order.
///
/// # Example
///
/// ```
/// use jiff::Zoned;
///
/// let mut times: Vec<Zoned> = vec![
///     "2025-01-20T12:00-05[America/New_York]".parse()?,
///     "2025-01-20T12:00+01[Europe/Paris]".parse()?,
///     "2025-01-20T12:00Z[UTC]".parse()?,
/// ];
/// times.sort_by(|a, b| jiff_fns::compare(a, b));
/// let zones: Vec<_> = times
///     .iter()
///     .map(|zdt| zdt.time_zone().iana_name().unwrap())
///     .collect();
/// assert_eq!(zones, ["Europe/Paris", "UTC", "America/New_York"]);
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn compare(a: impl Into<Temporal>, b: impl Into<Temporal>) -> Ordering {
    normalize(a).timestamp().cmp(&normalize(b).timestamp())
}

/// Compares two inputs by the instant in time they represent, in reverse.
///
/// This is suitable for sorting in descending order.
pub fn compare_desc(
    a: impl Into<Temporal>,
    b: impl Into<Temporal>,
) -> Ordering {
    compare(a, b).reverse()
}

/// Returns true when `a` is strictly before `b`.
pub fn is_before(a: impl Into<Temporal>, b: impl Into<Temporal>) -> bool {
    compare(a, b) == Ordering::Less
}

/// Returns true when `a` is strictly after `b`.
pub fn is_after(a: impl Into<Temporal>, b: impl Into<Temporal>) -> bool {
    compare(a, b) == Ordering::Greater
}

/// Returns true when `a` and `b` represent the same instant in time.
///
/// The time zones of `a` and `b` may differ.
pub fn is_equal(a: impl Into<Temporal>, b: impl Into<Temporal>) -> bool {
    compare(a, b) == Ordering::Equal
}

/// Returns true when `input` is between `start` and `end`, inclusive.
///
/// When `start` is after `end`, this always returns false.
pub fn is_within(
    input: impl Into<Temporal>,
    start: impl Into<Temporal>,
    end: impl Into<Temporal>,
) -> bool {
    let ts = normalize(input).timestamp();
    normalize(start).timestamp() <= ts && ts <= normalize(end).timestamp()
}

/// Returns the earliest of the given inputs.
///
/// When there are ties, the first one is returned. When there are no inputs,
/// `None` is returned.
pub fn min<T: Into<Temporal>>(
    inputs: impl IntoIterator<Item = T>,
) -> Option<Zoned> {
    inputs
        .into_iter()
        .map(normalize)
        .reduce(|min, zdt| {
            if zdt.timestamp() < min.timestamp() {
                zdt
            } else {
                min
            }
        })
}

/// Returns the latest of the given inputs.
///
/// When there are ties, the first one is returned. When there are no inputs,
/// `None` is returned.
pub fn max<T: Into<Temporal>>(
    inputs: impl IntoIterator<Item = T>,
) -> Option<Zoned> {
    inputs
        .into_iter()
        .map(normalize)
        .reduce(|max, zdt| {
            if zdt.timestamp() > max.timestamp() {
                zdt
            } else {
                max
            }
        })
}

/// Normalizes both inputs and puts `b` into the time zone of `a`.
fn aligned(a: impl Into<Temporal>, b: impl Into<Temporal>) -> (Zoned, Zoned) {
    let a = normalize(a);
    let b = normalize(b).with_time_zone(a.time_zone().clone());
    (a, b)
}

/// Returns true when both inputs fall in the same year.
pub fn is_same_year(a: impl Into<Temporal>, b: impl Into<Temporal>) -> bool {
    let (a, b) = aligned(a, b);
    a.year() == b.year()
}

/// Returns true when both inputs fall in the same quarter of the same year.
pub fn is_same_quarter(
    a: impl Into<Temporal>,
    b: impl Into<Temporal>,
) -> bool {
    let (a, b) = aligned(a, b);
    let quarter = |zdt: &Zoned| (zdt.month() + 2) / 3;
    a.year() == b.year() && quarter(&a) == quarter(&b)
}

/// Returns true when both inputs fall in the same month of the same year.
pub fn is_same_month(a: impl Into<Temporal>, b: impl Into<Temporal>) -> bool {
    let (a, b) = aligned(a, b);
    a.year() == b.year() && a.month() == b.month()
}

/// Returns true when both inputs fall in the same week.
///
/// Weeks start on Monday. This compares ISO 8601 week dates, so a week that
/// straddles the end of a year is still one week.
///
/// # Example
///
/// ```
/// use jiff::civil::date;
///
/// // A Sunday and the following Monday.
/// let sun = date(2024, 12, 29).in_tz("UTC")?;
/// let mon = date(2024, 12, 30).in_tz("UTC")?;
/// let wed = date(2025, 1, 1).in_tz("UTC")?;
/// assert!(!jiff_fns::is_same_week(&sun, &mon));
/// assert!(jiff_fns::is_same_week(&mon, &wed));
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn is_same_week(a: impl Into<Temporal>, b: impl Into<Temporal>) -> bool {
    let (a, b) = aligned(a, b);
    let (wa, wb) = (a.date().iso_week_date(), b.date().iso_week_date());
    wa.year() == wb.year() && wa.week() == wb.week()
}

/// Returns true when both inputs fall on the same calendar day.
pub fn is_same_day(a: impl Into<Temporal>, b: impl Into<Temporal>) -> bool {
    let (a, b) = aligned(a, b);
    a.date() == b.date()
}

/// Returns true when both inputs fall in the same hour of the same day.
pub fn is_same_hour(a: impl Into<Temporal>, b: impl Into<Temporal>) -> bool {
    let (a, b) = aligned(a, b);
    a.date() == b.date() && a.hour() == b.hour()
}

/// Returns true when both inputs fall in the same minute of the same hour.
pub fn is_same_minute(
    a: impl Into<Temporal>,
    b: impl Into<Temporal>,
) -> bool {
    let (a, b) = aligned(a, b);
    a.date() == b.date() && a.hour() == b.hour() && a.minute() == b.minute()
}

/// Returns true when both inputs fall in the same second of the same minute.
pub fn is_same_second(
    a: impl Into<Temporal>,
    b: impl Into<Temporal>,
) -> bool {
    let (a, b) = aligned(a, b);
    a.date() == b.date()
        && a.hour() == b.hour()
        && a.minute() == b.minute()
        && a.second() == b.second()
}
