/*!
Adding and subtracting units of time.

Every function in this module accepts anything that converts into a
[`Temporal`], normalizes it to a [`Zoned`] and returns a new [`Zoned`]. The
arithmetic itself is done by Jiff, which means it is time zone aware. For
example, adding one day across a daylight saving time transition yields the
same wall clock time on the next day, even if that day was 23 or 25 hours
long. Adding hours (or smaller units) always adds an exact amount of
elapsed time.

When adding months or years, the day is clamped to the last day of the
resulting month:

```
use jiff::civil::date;

let zdt = date(2025, 1, 31).at(9, 0, 0, 0).in_tz("UTC")?;
let got = jiff_fns::add_months(&zdt, 1)?;
assert_eq!(got.date(), date(2025, 2, 28));

# Ok::<(), Box<dyn std::error::Error>>(())
```
*/

use jiff::{Span, Zoned};

use crate::{
    error::Error,
    input::{normalize, Temporal},
};

/// Adds the given span to the input.
///
/// This is the general form of all of the `add_*` functions in this module.
///
/// # Errors
///
/// This returns an error when the result would overflow Jiff's supported
/// range.
///
/// # Example
///
/// ```
/// use jiff::{civil::date, ToSpan};
///
/// let zdt = date(2025, 1, 20).at(12, 0, 0, 0).in_tz("America/New_York")?;
/// let got = jiff_fns::add(&zdt, 1.month().days(2).hours(3))?;
/// assert_eq!(
///     got.to_string(),
///     "2025-02-22T15:00:00-05:00[America/New_York]",
/// );
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn add(input: impl Into<Temporal>, span: Span) -> Result<Zoned, Error> {
    Ok(normalize(input).checked_add(span)?)
}

/// Subtracts the given span from the input.
///
/// # Errors
///
/// This returns an error when the result would overflow Jiff's supported
/// range.
pub fn sub(input: impl Into<Temporal>, span: Span) -> Result<Zoned, Error> {
    Ok(normalize(input).checked_sub(span)?)
}

macro_rules! unit_fns {
    ($($unit:literal, $add:ident, $sub:ident, $try_unit:ident;)*) => {
        $(
            #[doc = concat!(
                "Adds the given number of ", $unit, " to the input.",
            )]
            ///
            /// A negative amount moves backwards in time.
            ///
            /// # Errors
            ///
            /// This returns an error when the amount or the result would
            /// overflow Jiff's supported range.
            pub fn $add(
                input: impl Into<Temporal>,
                amount: i64,
            ) -> Result<Zoned, Error> {
                add(input, Span::new().$try_unit(amount)?)
            }

            #[doc = concat!(
                "Subtracts the given number of ", $unit, " from the input.",
            )]
            ///
            /// A negative amount moves forwards in time.
            ///
            /// # Errors
            ///
            /// This returns an error when the amount or the result would
            /// overflow Jiff's supported range.
            pub fn $sub(
                input: impl Into<Temporal>,
                amount: i64,
            ) -> Result<Zoned, Error> {
                sub(input, Span::new().$try_unit(amount)?)
            }
        )*
    }
}

unit_fns! {
    "years", add_years, sub_years, try_years;
    "months", add_months, sub_months, try_months;
    "weeks", add_weeks, sub_weeks, try_weeks;
    "days", add_days, sub_days, try_days;
    "hours", add_hours, sub_hours, try_hours;
    "minutes", add_minutes, sub_minutes, try_minutes;
    "seconds", add_seconds, sub_seconds, try_seconds;
    "milliseconds", add_milliseconds, sub_milliseconds, try_milliseconds;
}
