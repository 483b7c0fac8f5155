/*!
Rounding to a unit and snapping to the boundaries of calendar periods.

[`round`] rounds an input to the nearest multiple of a unit. It's
configured by [`RoundOptions`], which can also be created from a bare
[`Unit`]:

```
use jiff::{civil::date, RoundMode, Unit};
use jiff_fns::RoundOptions;

let zdt = date(2025, 1, 20).at(9, 46, 0, 0).in_tz("UTC")?;
assert_eq!(jiff_fns::round(&zdt, Unit::Hour)?.hour(), 10);

let options = RoundOptions::new(Unit::Minute)
    .mode(RoundMode::Floor)
    .increment(15);
assert_eq!(jiff_fns::round(&zdt, options)?.minute(), 45);

# Ok::<(), Box<dyn std::error::Error>>(())
```

The `start_of_*` and `end_of_*` functions return the first and last
instants of the period containing the input, in the input's time zone. The
last instant of a period is its final nanosecond. Weeks start on Monday.
*/

use jiff::{RoundMode, Span, Unit, Zoned, ZonedRound};

use crate::{
    error::Error,
    input::{normalize, Temporal},
};

/// Options for [`round`].
///
/// The defaults are to round half away from zero (`RoundMode::HalfExpand`)
/// with an increment of `1`. The smallest unit has no default and must
/// always be given.
#[derive(Clone, Copy, Debug)]
pub struct RoundOptions {
    smallest: Unit,
    mode: RoundMode,
    increment: i64,
}

impl RoundOptions {
    /// Creates options that round to the nearest `smallest` unit.
    pub fn new(smallest: Unit) -> RoundOptions {
        RoundOptions { smallest, mode: RoundMode::HalfExpand, increment: 1 }
    }

    /// Sets the rounding mode.
    pub fn mode(self, mode: RoundMode) -> RoundOptions {
        RoundOptions { mode, ..self }
    }

    /// Sets the rounding increment.
    ///
    /// For example, an increment of `15` with a smallest unit of minutes
    /// rounds to the nearest quarter hour. The increment must divide evenly
    /// into the next largest unit, otherwise [`round`] returns an error.
    pub fn increment(self, increment: i64) -> RoundOptions {
        RoundOptions { increment, ..self }
    }

    /// Returns the smallest unit to round to.
    pub fn get_smallest(&self) -> Unit {
        self.smallest
    }

    /// Returns the rounding mode.
    pub fn get_mode(&self) -> RoundMode {
        self.mode
    }

    /// Returns the rounding increment.
    pub fn get_increment(&self) -> i64 {
        self.increment
    }
}

impl From<Unit> for RoundOptions {
    fn from(smallest: Unit) -> RoundOptions {
        RoundOptions::new(smallest)
    }
}

impl From<(Unit, i64)> for RoundOptions {
    fn from((smallest, increment): (Unit, i64)) -> RoundOptions {
        RoundOptions::new(smallest).increment(increment)
    }
}

impl From<RoundOptions> for ZonedRound {
    fn from(options: RoundOptions) -> ZonedRound {
        ZonedRound::new()
            .smallest(options.smallest)
            .mode(options.mode)
            .increment(options.increment)
    }
}

/// Rounds the input according to the options given.
///
/// Rounding happens on the civil datetime in the input's time zone. Units
/// bigger than days aren't supported.
///
/// # Errors
///
/// This returns an error when the smallest unit is bigger than a day, when
/// the increment is invalid for the unit or when the result would overflow.
pub fn round(
    input: impl Into<Temporal>,
    options: impl Into<RoundOptions>,
) -> Result<Zoned, Error> {
    let options = options.into();
    trace!("rounding with {options:?}");
    Ok(normalize(input).round(ZonedRound::from(options))?)
}

fn truncate(zdt: &Zoned, unit: Unit) -> Result<Zoned, Error> {
    Ok(zdt.round(ZonedRound::new().smallest(unit).mode(RoundMode::Trunc))?)
}

/// Returns the last instant before the period of length `span` that starts
/// at `start`.
fn last_instant(start: &Zoned, span: Span) -> Result<Zoned, Error> {
    let next = start.checked_add(span)?;
    Ok(next.checked_sub(Span::new().nanoseconds(1))?)
}

/// Returns the first instant of the day containing the input.
///
/// This is usually midnight. On days where midnight doesn't exist because
/// of a time zone transition, it's the first instant that does.
///
/// # Errors
///
/// This returns an error when the result would overflow.
pub fn start_of_day(input: impl Into<Temporal>) -> Result<Zoned, Error> {
    Ok(normalize(input).start_of_day()?)
}

/// Returns the last instant of the day containing the input.
///
/// # Errors
///
/// This returns an error when the result would overflow.
pub fn end_of_day(input: impl Into<Temporal>) -> Result<Zoned, Error> {
    Ok(normalize(input).end_of_day()?)
}

/// Returns the first instant of the week containing the input.
///
/// Weeks start on Monday.
///
/// # Errors
///
/// This returns an error when the result would overflow.
///
/// # Example
///
/// ```
/// use jiff::civil::date;
///
/// let zdt = date(2025, 1, 1).at(12, 0, 0, 0).in_tz("UTC")?;
/// let start = jiff_fns::start_of_week(&zdt)?;
/// assert_eq!(start.datetime(), date(2024, 12, 30).at(0, 0, 0, 0));
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn start_of_week(input: impl Into<Temporal>) -> Result<Zoned, Error> {
    let zdt = normalize(input);
    let offset = zdt.weekday().to_monday_zero_offset();
    let monday = zdt.checked_sub(Span::new().days(offset))?;
    Ok(monday.start_of_day()?)
}

/// Returns the last instant of the week containing the input.
///
/// Weeks end on Sunday.
///
/// # Errors
///
/// This returns an error when the result would overflow.
pub fn end_of_week(input: impl Into<Temporal>) -> Result<Zoned, Error> {
    let zdt = normalize(input);
    let offset = 6 - zdt.weekday().to_monday_zero_offset();
    let sunday = zdt.checked_add(Span::new().days(offset))?;
    Ok(sunday.end_of_day()?)
}

/// Returns the first instant of the month containing the input.
///
/// # Errors
///
/// This returns an error when the result would overflow.
pub fn start_of_month(input: impl Into<Temporal>) -> Result<Zoned, Error> {
    Ok(normalize(input).first_of_month()?.start_of_day()?)
}

/// Returns the last instant of the month containing the input.
///
/// # Errors
///
/// This returns an error when the result would overflow.
///
/// # Example
///
/// ```
/// use jiff::civil::date;
///
/// let zdt = date(2024, 2, 10).at(12, 0, 0, 0).in_tz("UTC")?;
/// let end = jiff_fns::end_of_month(&zdt)?;
/// assert_eq!(end.datetime(), date(2024, 2, 29).at(23, 59, 59, 999_999_999));
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn end_of_month(input: impl Into<Temporal>) -> Result<Zoned, Error> {
    Ok(normalize(input).last_of_month()?.end_of_day()?)
}

/// Returns the first instant of the year containing the input.
///
/// # Errors
///
/// This returns an error when the result would overflow.
pub fn start_of_year(input: impl Into<Temporal>) -> Result<Zoned, Error> {
    Ok(normalize(input).first_of_year()?.start_of_day()?)
}

/// Returns the last instant of the year containing the input.
///
/// # Errors
///
/// This returns an error when the result would overflow.
pub fn end_of_year(input: impl Into<Temporal>) -> Result<Zoned, Error> {
    Ok(normalize(input).last_of_year()?.end_of_day()?)
}

/// Returns the first instant of the hour containing the input.
///
/// # Errors
///
/// This returns an error when the result would overflow.
pub fn start_of_hour(input: impl Into<Temporal>) -> Result<Zoned, Error> {
    truncate(&normalize(input), Unit::Hour)
}

/// Returns the last instant of the hour containing the input.
///
/// # Errors
///
/// This returns an error when the result would overflow.
pub fn end_of_hour(input: impl Into<Temporal>) -> Result<Zoned, Error> {
    let start = start_of_hour(input)?;
    last_instant(&start, Span::new().hours(1))
}

/// Returns the first instant of the minute containing the input.
///
/// # Errors
///
/// This returns an error when the result would overflow.
pub fn start_of_minute(input: impl Into<Temporal>) -> Result<Zoned, Error> {
    truncate(&normalize(input), Unit::Minute)
}

/// Returns the last instant of the minute containing the input.
///
/// # Errors
///
/// This returns an error when the result would overflow.
pub fn end_of_minute(input: impl Into<Temporal>) -> Result<Zoned, Error> {
    let start = start_of_minute(input)?;
    last_instant(&start, Span::new().minutes(1))
}
