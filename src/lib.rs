/*!
Small, composable helpers for working with dates and times, built on
[Jiff].

This crate provides a flat collection of functions in the style of
[date-fns]: formatting with a token pattern language, adding and
subtracting units, comparing, measuring differences, rounding and
describing relative time. Jiff does all of the hard work. This crate is
mostly about convenient, consistent entry points.

# Inputs

Every function accepts anything that converts into a [`Temporal`]. That is,
a [`jiff::Timestamp`] or a [`jiff::Zoned`] (owned or borrowed). Inputs are
[`normalize`]d to a `Zoned` first. A `Timestamp` is put into UTC, and a
`Zoned` keeps its time zone. Results are always `Zoned` values.

```
use jiff::{Timestamp, ToSpan};

let ts: Timestamp = "2025-01-20T12:00:00Z".parse()?;
let zdt = jiff_fns::add_days(ts, 3)?;
assert_eq!(zdt.to_string(), "2025-01-23T12:00:00+00:00[UTC]");

let zdt = ts.in_tz("America/New_York")?;
let later = jiff_fns::add(&zdt, 1.month().hours(2))?;
assert_eq!(
    later.to_string(),
    "2025-02-20T09:00:00-05:00[America/New_York]",
);

# Ok::<(), Box<dyn std::error::Error>>(())
```

# Formatting

Dates are formatted with patterns like `EEEE, MMMM do, yyyy`. See the
[`fmt`] module for the full list of tokens and for localization.

```
use jiff::civil::date;

let d = date(2025, 1, 20);
assert_eq!(
    jiff_fns::fmt::format("EEEE, MMMM do, yyyy", d)?,
    "Monday, January 20th, 2025",
);

# Ok::<(), Box<dyn std::error::Error>>(())
```

# Comparing and measuring

```
use jiff::{civil::date, Unit};

let a = date(2025, 1, 20).at(9, 0, 0, 0).in_tz("UTC")?;
let b = date(2025, 3, 1).at(17, 0, 0, 0).in_tz("UTC")?;
assert!(jiff_fns::is_before(&a, &b));
assert!(jiff_fns::is_same_quarter(&a, &b));
assert_eq!(jiff_fns::difference_in_days(&b, &a)?, 40);
assert_eq!(jiff_fns::format_distance(&b, &a)?, "in 1 month");
assert_eq!(jiff_fns::round(&b, Unit::Day)?.date(), date(2025, 3, 2));
assert_eq!(jiff_fns::start_of_month(&b)?.date(), date(2025, 3, 1));

# Ok::<(), Box<dyn std::error::Error>>(())
```

# Crate features

* **std** (enabled by default) - When enabled, this crate provides
  [`now`], [`now_utc`], [`local_time_zone`] and an implementation of
  `std::error::Error` for [`Error`].
* **locale** (enabled by default) - When enabled, month and weekday names
  are available in locales other than English. The locale data comes from
  `chrono`. When disabled, only English names are available.
* **logging** - When enabled, the `log` crate is used to emit messages
  about formatting and locale lookups. This is useful for debugging why a
  pattern or locale doesn't do what you expect.

[Jiff]: https://docs.rs/jiff
[date-fns]: https://date-fns.org
*/

#![no_std]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
// We generally want all types to impl Debug.
#![warn(missing_debug_implementations)]

#[cfg(any(test, feature = "std"))]
extern crate std;

extern crate alloc;

pub use crate::{
    arith::{
        add, add_days, add_hours, add_milliseconds, add_minutes, add_months,
        add_seconds, add_weeks, add_years, sub, sub_days, sub_hours,
        sub_milliseconds, sub_minutes, sub_months, sub_seconds, sub_weeks,
        sub_years,
    },
    compare::{
        compare, compare_desc, is_after, is_before, is_equal, is_same_day,
        is_same_hour, is_same_minute, is_same_month, is_same_quarter,
        is_same_second, is_same_week, is_same_year, is_within, max, min,
    },
    diff::{
        difference, difference_in_days, difference_in_hours,
        difference_in_milliseconds, difference_in_minutes,
        difference_in_months, difference_in_seconds, difference_in_weeks,
        difference_in_years,
    },
    error::Error,
    input::{in_time_zone, normalize, Temporal},
    relative::{format_distance, format_relative},
    round::{
        end_of_day, end_of_hour, end_of_minute, end_of_month, end_of_week,
        end_of_year, round, start_of_day, start_of_hour, start_of_minute,
        start_of_month, start_of_week, start_of_year, RoundOptions,
    },
};

#[cfg(feature = "std")]
pub use crate::input::{local_time_zone, now, now_utc};

#[macro_use]
mod logging;

mod arith;
mod compare;
mod diff;
mod error;
pub mod fmt;
mod input;
mod relative;
mod round;
