/*!
Describing amounts of time relative to now, or to another point in time.

```
use jiff::{civil::date, Unit};

assert_eq!(jiff_fns::format_relative(3, Unit::Day)?, "in 3 days");
assert_eq!(jiff_fns::format_relative(-1, Unit::Hour)?, "1 hour ago");

let right = date(2025, 1, 20).at(12, 0, 0, 0).in_tz("UTC")?;
let left = date(2025, 3, 25).at(9, 0, 0, 0).in_tz("UTC")?;
assert_eq!(jiff_fns::format_distance(&left, &right)?, "in 2 months");
assert_eq!(jiff_fns::format_distance(&right, &left)?, "2 months ago");

# Ok::<(), Box<dyn std::error::Error>>(())
```

Phrases come from [`FieldNames::relative_time`], so a custom names
provider can supply them in other languages. The built-in providers only
have English phrases.
*/

use alloc::string::String;

use jiff::{Span, Unit};

use crate::{
    diff::difference,
    error::Error,
    fmt::{Config, FieldNames},
    input::Temporal,
};

/// Units considered by [`format_distance`], from largest to smallest.
static DISTANCE_UNITS: &[Unit] = &[
    Unit::Year,
    Unit::Month,
    Unit::Day,
    Unit::Hour,
    Unit::Minute,
    Unit::Second,
];

/// Returns the value of `unit` in `span`, for the units in
/// `DISTANCE_UNITS`.
fn get(span: &Span, unit: Unit) -> i64 {
    match unit {
        Unit::Year => i64::from(span.get_years()),
        Unit::Month => i64::from(span.get_months()),
        Unit::Day => i64::from(span.get_days()),
        Unit::Hour => i64::from(span.get_hours()),
        Unit::Minute => span.get_minutes(),
        _ => span.get_seconds(),
    }
}

/// Describes `value` units of time relative to now.
///
/// Positive values are in the future and negative values are in the past.
/// Zero is described as being in the future, e.g., `in 0 days`.
///
/// # Errors
///
/// This returns an error when `unit` is smaller than seconds.
pub fn format_relative(value: i64, unit: Unit) -> Result<String, Error> {
    Config::new().format_relative(value, unit)
}

/// Describes `left` relative to `right`, using the largest unit in which
/// they differ.
///
/// The difference is truncated to a whole number of that unit. Smaller
/// units are dropped. When `left` and `right` are equal to the second, this
/// returns `in 0 seconds`.
///
/// # Errors
///
/// This returns an error when the difference can't be computed.
pub fn format_distance(
    left: impl Into<Temporal>,
    right: impl Into<Temporal>,
) -> Result<String, Error> {
    Config::new().format_distance(left, right)
}

impl<N: FieldNames> Config<N> {
    /// Describes `value` units of time relative to now, in this
    /// configuration's locale.
    ///
    /// See [`format_relative`].
    ///
    /// # Errors
    ///
    /// This returns an error when the names provider doesn't support the
    /// locale or unit.
    pub fn format_relative(
        &self,
        value: i64,
        unit: Unit,
    ) -> Result<String, Error> {
        self.get_names().relative_time(value, unit, self.get_locale())
    }

    /// Describes `left` relative to `right`, in this configuration's
    /// locale.
    ///
    /// See [`format_distance`].
    ///
    /// # Errors
    ///
    /// This returns an error when the difference can't be computed or when
    /// the names provider doesn't support the locale.
    pub fn format_distance(
        &self,
        left: impl Into<Temporal>,
        right: impl Into<Temporal>,
    ) -> Result<String, Error> {
        let span = difference(left, right, Unit::Year)?;
        let (unit, value) = DISTANCE_UNITS
            .iter()
            .map(|&unit| (unit, get(&span, unit)))
            .find(|&(_, value)| value != 0)
            .unwrap_or((Unit::Second, 0));
        trace!("distance {span} described as {value} {unit:?}");
        self.format_relative(value, unit)
    }
}
