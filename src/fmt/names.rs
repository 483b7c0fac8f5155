use alloc::{
    format,
    string::{String, ToString},
};

use jiff::{
    civil::{Date, Era, Weekday},
    Unit,
};

use crate::error::{err, Error};

/// A calendar field that has a name, as opposed to a number.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Field {
    /// The era, e.g., `AD` or `BC`.
    Era,
    /// The month of the year, e.g., `January`.
    Month,
    /// The day of the week, e.g., `Monday`.
    Weekday,
}

/// How verbose a name should be.
///
/// Formatters can build other styles out of these. For example, the two
/// letter weekday style (`EEEEEE`) is the first two characters of the
/// `Short` style.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum NameStyle {
    /// Usually a single character, e.g., `J` for January.
    Narrow,
    /// An abbreviation, e.g., `Jan` for January.
    Short,
    /// The full name, e.g., `January`.
    Long,
}

/// A provider of localized calendar field names.
///
/// This is the one piece of locale specific behavior that the formatter
/// needs. Everything else it renders is numeric. Implementations are free
/// to source names from anywhere: compiled in tables, ICU4X data, a database
/// and so on.
///
/// Locales are given as BCP 47 style identifiers, e.g., `en-US` or `es-ES`.
/// Implementations should report an unsupported locale via an error rather
/// than silently falling back to another language.
///
/// # Example
///
/// A provider that shouts:
///
/// ```
/// use jiff::civil::{date, Date};
/// use jiff_fns::fmt::{Config, EnglishNames, Field, FieldNames, NameStyle};
///
/// #[derive(Debug)]
/// struct Loud;
///
/// impl FieldNames for Loud {
///     fn field_name(
///         &self,
///         date: Date,
///         field: Field,
///         style: NameStyle,
///         locale: &str,
///     ) -> Result<String, jiff_fns::Error> {
///         let name = EnglishNames.field_name(date, field, style, locale)?;
///         Ok(name.to_uppercase())
///     }
/// }
///
/// let config = Config::new().names(Loud);
/// let got = config.format("EEEE, MMMM do", date(2025, 1, 20))?;
/// assert_eq!(got, "MONDAY, JANUARY 20th");
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait FieldNames: core::fmt::Debug + Send + Sync {
    /// Returns the name of `field` for `date` in `locale` at the given
    /// verbosity.
    fn field_name(
        &self,
        date: Date,
        field: Field,
        style: NameStyle,
        locale: &str,
    ) -> Result<String, Error>;

    /// Returns a phrase describing a relative amount of time, e.g., `in 3
    /// days` or `2 hours ago`.
    ///
    /// Negative values are in the past. The default implementation only
    /// supports English locales.
    fn relative_time(
        &self,
        value: i64,
        unit: Unit,
        locale: &str,
    ) -> Result<String, Error> {
        if !is_english(locale) {
            return Err(Error::unknown_locale(locale));
        }
        let magnitude = value.unsigned_abs();
        let unit = unit_name_english(unit, magnitude == 1)?;
        Ok(if value < 0 {
            format!("{magnitude} {unit} ago")
        } else {
            format!("in {magnitude} {unit}")
        })
    }
}

impl<'a, N: FieldNames + ?Sized> FieldNames for &'a N {
    fn field_name(
        &self,
        date: Date,
        field: Field,
        style: NameStyle,
        locale: &str,
    ) -> Result<String, Error> {
        (**self).field_name(date, field, style, locale)
    }

    fn relative_time(
        &self,
        value: i64,
        unit: Unit,
        locale: &str,
    ) -> Result<String, Error> {
        (**self).relative_time(value, unit, locale)
    }
}

/// The name provider used when one isn't given explicitly.
///
/// When the `locale` crate feature is enabled (it is by default), this is
/// [`LocaleNames`]. Otherwise, it is [`EnglishNames`].
#[cfg(feature = "locale")]
pub type DefaultNames = LocaleNames;

/// The name provider used when one isn't given explicitly.
///
/// When the `locale` crate feature is enabled (it is by default), this is
/// `LocaleNames`. Otherwise, it is [`EnglishNames`].
#[cfg(not(feature = "locale"))]
pub type DefaultNames = EnglishNames;

/// A name provider with compiled in English names.
///
/// This supports any locale whose language is `en`. Era names are always
/// English, even when used as a fallback by `LocaleNames`.
#[derive(Clone, Copy, Debug, Default)]
pub struct EnglishNames;

impl FieldNames for EnglishNames {
    fn field_name(
        &self,
        date: Date,
        field: Field,
        style: NameStyle,
        locale: &str,
    ) -> Result<String, Error> {
        if !is_english(locale) {
            #[cfg(feature = "locale")]
            {
                return Err(Error::unknown_locale(locale));
            }
            #[cfg(not(feature = "locale"))]
            {
                return Err(Error::locale_requires_feature(locale, "locale"));
            }
        }
        let name = match field {
            Field::Era => return Ok(era_name(date, style).to_string()),
            Field::Month => match style {
                NameStyle::Short => month_name_abbrev(date.month()),
                NameStyle::Long | NameStyle::Narrow => {
                    month_name_full(date.month())
                }
            },
            Field::Weekday => match style {
                NameStyle::Short => weekday_name_abbrev(date.weekday()),
                NameStyle::Long | NameStyle::Narrow => {
                    weekday_name_full(date.weekday())
                }
            },
        };
        Ok(match style {
            NameStyle::Narrow => narrow(name),
            NameStyle::Short | NameStyle::Long => name.to_string(),
        })
    }
}

/// A name provider backed by the locale tables shipped with `chrono`.
///
/// These tables are derived from glibc's locale data. Locale identifiers
/// may be given in BCP 47 form (`es-ES`) or POSIX form (`es_ES`). A bare
/// language (`es`) is tried as `es_ES`.
///
/// Month and weekday names are localized. Era names are not available in
/// these tables, so they are always English.
///
/// Note that the casing of names follows the locale's conventions. For
/// example, Spanish month names are lowercase.
#[cfg(feature = "locale")]
#[derive(Clone, Copy, Debug, Default)]
pub struct LocaleNames;

#[cfg(feature = "locale")]
impl FieldNames for LocaleNames {
    fn field_name(
        &self,
        date: Date,
        field: Field,
        style: NameStyle,
        locale: &str,
    ) -> Result<String, Error> {
        if is_english(locale) {
            return EnglishNames.field_name(date, field, style, locale);
        }
        let directive = match (field, style) {
            (Field::Era, _) => {
                return Ok(era_name(date, style).to_string());
            }
            (Field::Month, NameStyle::Short) => "%b",
            (Field::Month, NameStyle::Long | NameStyle::Narrow) => "%B",
            (Field::Weekday, NameStyle::Short) => "%a",
            (Field::Weekday, NameStyle::Long | NameStyle::Narrow) => "%A",
        };
        let chrono_locale = chrono_locale(locale)?;
        let naive = chrono::NaiveDate::from_ymd_opt(
            i32::from(date.year()),
            u32::from(date.month().unsigned_abs()),
            u32::from(date.day().unsigned_abs()),
        )
        .ok_or_else(|| err!("date {date} is not supported by `chrono`"))?;
        let name = naive.format_localized(directive, chrono_locale).to_string();
        Ok(match style {
            NameStyle::Narrow => narrow(&name),
            NameStyle::Short | NameStyle::Long => name,
        })
    }
}

/// Maps a BCP 47 style locale identifier to one of `chrono`'s locales.
#[cfg(feature = "locale")]
fn chrono_locale(locale: &str) -> Result<chrono::Locale, Error> {
    let posix = locale.replace('-', "_");
    if let Ok(found) = chrono::Locale::try_from(posix.as_str()) {
        return Ok(found);
    }
    if !posix.contains('_') {
        let guess = format!("{posix}_{}", posix.to_ascii_uppercase());
        if let Ok(found) = chrono::Locale::try_from(guess.as_str()) {
            debug!("mapped locale {locale:?} to {guess:?}");
            return Ok(found);
        }
    }
    warn!("no locale data found for {locale:?}");
    Err(Error::unknown_locale(locale))
}

/// Returns true when the language of the given locale identifier is English.
pub(crate) fn is_english(locale: &str) -> bool {
    let lang = locale.split(['-', '_']).next().unwrap_or(locale);
    lang.eq_ignore_ascii_case("en")
}

/// Returns the first character of a name, in uppercase.
fn narrow(name: &str) -> String {
    name.chars().take(1).flat_map(char::to_uppercase).collect()
}

fn era_name(date: Date, style: NameStyle) -> &'static str {
    let (_, era) = date.era_year();
    match (era, style) {
        (Era::CE, NameStyle::Narrow) => "A",
        (Era::CE, NameStyle::Short) => "AD",
        (Era::CE, NameStyle::Long) => "Anno Domini",
        (Era::BCE, NameStyle::Narrow) => "B",
        (Era::BCE, NameStyle::Short) => "BC",
        (Era::BCE, NameStyle::Long) => "Before Christ",
    }
}

fn unit_name_english(
    unit: Unit,
    singular: bool,
) -> Result<&'static str, Error> {
    let (one, many) = match unit {
        Unit::Year => ("year", "years"),
        Unit::Month => ("month", "months"),
        Unit::Week => ("week", "weeks"),
        Unit::Day => ("day", "days"),
        Unit::Hour => ("hour", "hours"),
        Unit::Minute => ("minute", "minutes"),
        Unit::Second => ("second", "seconds"),
        unit => {
            return Err(err!(
                "relative time phrases for unit {unit:?} are not supported",
            ))
        }
    };
    Ok(if singular { one } else { many })
}

/// Returns the full name of the given weekday.
fn weekday_name_full(wd: Weekday) -> &'static str {
    match wd {
        Weekday::Sunday => "Sunday",
        Weekday::Monday => "Monday",
        Weekday::Tuesday => "Tuesday",
        Weekday::Wednesday => "Wednesday",
        Weekday::Thursday => "Thursday",
        Weekday::Friday => "Friday",
        Weekday::Saturday => "Saturday",
    }
}

/// Returns an abbreviated name of the given weekday.
fn weekday_name_abbrev(wd: Weekday) -> &'static str {
    match wd {
        Weekday::Sunday => "Sun",
        Weekday::Monday => "Mon",
        Weekday::Tuesday => "Tue",
        Weekday::Wednesday => "Wed",
        Weekday::Thursday => "Thu",
        Weekday::Friday => "Fri",
        Weekday::Saturday => "Sat",
    }
}

/// Returns the full name of the given month.
fn month_name_full(month: i8) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        unk => unreachable!("invalid month {unk}"),
    }
}

/// Returns the abbreviated month name.
fn month_name_abbrev(month: i8) -> &'static str {
    match month {
        1 => "Jan",
        2 => "Feb",
        3 => "Mar",
        4 => "Apr",
        5 => "May",
        6 => "Jun",
        7 => "Jul",
        8 => "Aug",
        9 => "Sep",
        10 => "Oct",
        11 => "Nov",
        12 => "Dec",
        unk => unreachable!("invalid month {unk}"),
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    fn english(field: Field, style: NameStyle, d: Date) -> String {
        EnglishNames.field_name(d, field, style, "en-US").unwrap()
    }

    #[test]
    fn english_months() {
        let d = date(2025, 9, 1);
        assert_eq!(english(Field::Month, NameStyle::Long, d), "September");
        assert_eq!(english(Field::Month, NameStyle::Short, d), "Sep");
        assert_eq!(english(Field::Month, NameStyle::Narrow, d), "S");
    }

    #[test]
    fn english_weekdays() {
        let d = date(2025, 1, 22);
        assert_eq!(english(Field::Weekday, NameStyle::Long, d), "Wednesday");
        assert_eq!(english(Field::Weekday, NameStyle::Short, d), "Wed");
        assert_eq!(english(Field::Weekday, NameStyle::Narrow, d), "W");
    }

    #[test]
    fn english_eras() {
        let ad = date(2025, 1, 1);
        let bc = date(-44, 3, 15);
        assert_eq!(english(Field::Era, NameStyle::Short, ad), "AD");
        assert_eq!(english(Field::Era, NameStyle::Long, ad), "Anno Domini");
        assert_eq!(english(Field::Era, NameStyle::Narrow, ad), "A");
        assert_eq!(english(Field::Era, NameStyle::Short, bc), "BC");
        assert_eq!(english(Field::Era, NameStyle::Long, bc), "Before Christ");
        assert_eq!(english(Field::Era, NameStyle::Narrow, bc), "B");
        // Year zero is 1 BC.
        assert_eq!(english(Field::Era, NameStyle::Short, date(0, 1, 1)), "BC");
    }

    #[test]
    fn english_locale_detection() {
        assert!(is_english("en"));
        assert!(is_english("en-US"));
        assert!(is_english("en_GB"));
        assert!(is_english("EN-au"));
        assert!(!is_english("eng"));
        assert!(!is_english("es-ES"));
        assert!(!is_english(""));
    }

    #[test]
    fn english_rejects_other_languages() {
        let got = EnglishNames.field_name(
            date(2025, 1, 1),
            Field::Month,
            NameStyle::Long,
            "fr-FR",
        );
        assert!(got.unwrap_err().is_locale());
    }

    #[test]
    fn relative_time_english() {
        let f = |value, unit| {
            EnglishNames.relative_time(value, unit, "en-US").unwrap()
        };
        assert_eq!(f(3, Unit::Day), "in 3 days");
        assert_eq!(f(1, Unit::Day), "in 1 day");
        assert_eq!(f(-1, Unit::Hour), "1 hour ago");
        assert_eq!(f(-2, Unit::Year), "2 years ago");
        assert_eq!(f(0, Unit::Second), "in 0 seconds");
        assert!(EnglishNames
            .relative_time(1, Unit::Nanosecond, "en-US")
            .is_err());
        assert!(EnglishNames
            .relative_time(1, Unit::Day, "de-DE")
            .unwrap_err()
            .is_locale());
    }

    #[cfg(feature = "locale")]
    #[test]
    fn spanish() {
        let _ = env_logger::try_init();

        let f = |field, style, d: Date, locale: &str| {
            LocaleNames.field_name(d, field, style, locale).unwrap()
        };
        let d = date(2025, 1, 20);
        assert_eq!(f(Field::Month, NameStyle::Long, d, "es-ES"), "enero");
        assert_eq!(f(Field::Month, NameStyle::Long, d, "es_ES"), "enero");
        assert_eq!(f(Field::Month, NameStyle::Long, d, "es"), "enero");
        assert_eq!(f(Field::Month, NameStyle::Narrow, d, "es-ES"), "E");
        assert_eq!(f(Field::Weekday, NameStyle::Long, d, "es-ES"), "lunes");
        assert_eq!(f(Field::Era, NameStyle::Short, d, "es-ES"), "AD");
    }

    #[cfg(feature = "locale")]
    #[test]
    fn unknown_locale() {
        let err = LocaleNames
            .field_name(
                date(2025, 1, 20),
                Field::Month,
                NameStyle::Long,
                "zz-NOWHERE",
            )
            .unwrap_err();
        assert!(err.is_locale());
        insta::assert_snapshot!(
            err.to_string(),
            @"unknown or unsupported locale `zz-NOWHERE`",
        );
    }
}
