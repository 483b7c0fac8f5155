/*!
Support for formatting dates with a token based pattern language.

The pattern language is the one popularized by [date-fns] (and which is in
turn loosely based on [Unicode date field symbols]). A pattern is made up of
tokens, literal text and quoted literal text. For example, the pattern
`EEEE, MMMM do, yyyy` formats January 20, 2025 as `Monday, January 20th,
2025`.

Only date fields are supported. There are no tokens for the time of day.

# Tokens

| Token(s) | Meaning | Example output |
|---|---|---|
| `yyyy`, `yyy` | year, zero padded to 4 or 3 digits | `2025`, `0007` |
| `yy` | last two digits of the year | `25` |
| `y` | year | `2025` |
| `QQQQ` | ordinal quarter | `1st quarter` |
| `QQQ` | short quarter | `Q1` |
| `QQ` | quarter, zero padded | `01` |
| `Q`, `QQQQQ` | quarter | `1` |
| `MMMMM` | narrow month name | `J` |
| `MMMM` | month name | `January` |
| `MMM` | abbreviated month name | `Jan` |
| `MM` | month, zero padded | `01` |
| `Mo` | ordinal month | `1st` |
| `M` | month | `1` |
| `dd` | day, zero padded | `09` |
| `do` | ordinal day | `9th` |
| `d` | day | `9` |
| `EEEEEE` | two letter weekday name | `Mo` |
| `EEEEE` | narrow weekday name | `M` |
| `EEEE` | weekday name | `Monday` |
| `EEE`, `EE`, `E` | abbreviated weekday name | `Mon` |
| `GGGGG` | narrow era | `A` |
| `GGGG` | era | `Anno Domini` |
| `GGG`, `GG`, `G` | abbreviated era | `AD` |

Runs of the same letter are matched greedily. For example, `yyyy` is a four
digit year and not four unpadded years. A run that is longer than any token
for that letter is split into the longest token followed by whatever is left.
So `ddd` is `dd` followed by `d`.

Anything that isn't a token is copied to the output as-is. To write out
letters that would otherwise be tokens, wrap them in single quotes. Two
single quotes in a row write out a single quote, both inside and outside of a
quoted section:

```
use jiff::civil::date;
use jiff_fns::fmt;

let d = date(2025, 1, 20);
assert_eq!(fmt::format("'Today is' EEEE", d)?, "Today is Monday");
assert_eq!(fmt::format("h 'o''clock'", d)?, "h o'clock");
assert_eq!(fmt::format("yyyy''yy", d)?, "2025'25");

# Ok::<(), Box<dyn std::error::Error>>(())
```

# Localization

Names of months, weekdays and eras are looked up through a [`FieldNames`]
provider in a particular locale. The default locale is [`DEFAULT_LOCALE`].
The default provider, [`DefaultNames`], uses locale data from `chrono`
when the `locale` crate feature is enabled:

```
use jiff::civil::date;
use jiff_fns::fmt;

let d = date(2025, 1, 20);
# #[cfg(feature = "locale")] {
assert_eq!(fmt::format_with_locale("MMMM", d, "es-ES")?, "enero");
assert_eq!(fmt::format_with_locale("EEEE", d, "fr-FR")?, "lundi");
# }
// English names are always available.
assert_eq!(fmt::format_with_locale("MMMM", d, "en-US")?, "January");

# Ok::<(), Box<dyn std::error::Error>>(())
```

Since only names are localized, the ordinal suffixes of `do`, `Mo` and
`QQQQ` are always English.

[date-fns]: https://date-fns.org/docs/format
[Unicode date field symbols]: https://www.unicode.org/reports/tr35/tr35-dates.html#Date_Field_Symbol_Table
*/

use alloc::{boxed::Box, string::String};

use jiff::civil::Date;

use crate::{error::Error, input::Temporal};

pub use self::{
    names::{DefaultNames, EnglishNames, Field, FieldNames, NameStyle},
    ordinal::ordinal_suffix,
};

#[cfg(feature = "locale")]
pub use self::names::LocaleNames;

mod format;
pub(crate) mod names;
mod ordinal;
mod render;
mod token;

/// The locale used when one isn't given.
pub const DEFAULT_LOCALE: &str = "en-US";

/// Formats the date given according to the pattern given.
///
/// This uses the default configuration. That is, [`DEFAULT_LOCALE`] and
/// [`DefaultNames`].
///
/// # Errors
///
/// This only returns an error when looking up a name fails. With the default
/// configuration, this never happens.
///
/// # Example
///
/// ```
/// use jiff::civil::date;
///
/// let d = date(2025, 1, 20);
/// assert_eq!(jiff_fns::fmt::format("yyyy-MM-dd", d)?, "2025-01-20");
/// assert_eq!(
///     jiff_fns::fmt::format("EEEE, MMMM do, yyyy", d)?,
///     "Monday, January 20th, 2025",
/// );
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn format(fmt: &str, date: impl Into<Date>) -> Result<String, Error> {
    Config::new().format(fmt, date)
}

/// Formats the date given according to the pattern given, using names from
/// the locale given.
///
/// # Errors
///
/// This returns an error when the pattern needs a name and the locale isn't
/// supported by [`DefaultNames`].
///
/// # Example
///
/// ```
/// use jiff::civil::date;
///
/// let d = date(2025, 1, 20);
/// # #[cfg(feature = "locale")] {
/// let got = jiff_fns::fmt::format_with_locale("d MMMM yyyy", d, "es-ES")?;
/// assert_eq!(got, "20 enero 2025");
/// # }
///
/// // No names are needed, so any locale is fine.
/// let got = jiff_fns::fmt::format_with_locale("yyyy", d, "xx-NOPE")?;
/// assert_eq!(got, "2025");
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn format_with_locale(
    fmt: &str,
    date: impl Into<Date>,
    locale: &str,
) -> Result<String, Error> {
    Config::new().locale(locale).format(fmt, date)
}

/// Normalizes the input given and formats its civil date.
///
/// The date is the one observed in the input's time zone. A
/// [`jiff::Timestamp`] is observed in UTC.
///
/// # Example
///
/// ```
/// use jiff::Timestamp;
///
/// let ts: Timestamp = "2025-01-20T23:30:00Z".parse()?;
/// assert_eq!(jiff_fns::fmt::format_zoned("yyyy-MM-dd", ts)?, "2025-01-20");
///
/// let zdt = ts.in_tz("Asia/Tokyo")?;
/// assert_eq!(jiff_fns::fmt::format_zoned("yyyy-MM-dd", &zdt)?, "2025-01-21");
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn format_zoned(
    fmt: &str,
    input: impl Into<Temporal>,
) -> Result<String, Error> {
    let zdt = crate::input::normalize(input);
    format(fmt, zdt.date())
}

/// Configuration for formatting dates.
///
/// A configuration is made up of a locale and a provider of names in that
/// locale. The provider is the type parameter `N`.
///
/// # Example
///
/// ```
/// use jiff::civil::date;
/// use jiff_fns::fmt::{Config, EnglishNames};
///
/// let config = Config::new().locale("en-GB").names(EnglishNames);
/// let got = config.format("EEEE do MMMM yyyy", date(2025, 1, 20))?;
/// assert_eq!(got, "Monday 20th January 2025");
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug)]
pub struct Config<N = DefaultNames> {
    locale: Box<str>,
    names: N,
}

impl Config {
    /// Creates a new configuration with [`DEFAULT_LOCALE`] and
    /// [`DefaultNames`].
    pub fn new() -> Config {
        let names = DefaultNames::default();
        Config { locale: DEFAULT_LOCALE.into(), names }
    }
}

impl<N: FieldNames> Config<N> {
    /// Sets the locale used to look up names.
    ///
    /// Locales are BCP 47 style identifiers, e.g., `en-US` or `es-ES`.
    /// Whether a locale is supported is up to the names provider. An
    /// unsupported locale is only reported when a name is actually needed.
    pub fn locale(self, locale: &str) -> Config<N> {
        Config { locale: locale.into(), ..self }
    }

    /// Sets the provider of localized names.
    pub fn names<M: FieldNames>(self, names: M) -> Config<M> {
        Config { locale: self.locale, names }
    }

    /// Returns the locale on this configuration.
    pub fn get_locale(&self) -> &str {
        &self.locale
    }

    /// Returns the names provider on this configuration.
    pub fn get_names(&self) -> &N {
        &self.names
    }

    /// Formats the date given according to the pattern given.
    ///
    /// # Errors
    ///
    /// This returns an error when the names provider fails to return a name
    /// that the pattern requires.
    pub fn format(
        &self,
        fmt: &str,
        date: impl Into<Date>,
    ) -> Result<String, Error> {
        let mut buf = String::with_capacity(fmt.len());
        self.format_to(fmt, date, &mut buf)?;
        Ok(buf)
    }

    /// Formats the date given according to the pattern given, writing the
    /// result to `wtr`.
    ///
    /// # Errors
    ///
    /// This returns an error when the names provider fails to return a name
    /// that the pattern requires, or when writing to `wtr` fails. When an
    /// error occurs, some output may have already been written.
    pub fn format_to<W: core::fmt::Write>(
        &self,
        fmt: &str,
        date: impl Into<Date>,
        wtr: &mut W,
    ) -> Result<(), Error> {
        let mut formatter =
            format::Formatter { config: self, fmt, date: date.into(), wtr };
        formatter.format()
    }
}

impl Default for Config {
    fn default() -> Config {
        Config::new()
    }
}
