use alloc::{boxed::Box, string::ToString};

/// Creates a new ad hoc error via `format_args!`.
macro_rules! err {
    ($($tt:tt)*) => {{
        crate::error::Error::adhoc_from_args(format_args!($($tt)*))
    }}
}

pub(crate) use err;

/// An error that can occur in this crate.
///
/// Most errors are produced by Jiff itself, for example, when adding a span
/// to a datetime overflows Jiff's supported range. The remaining errors come
/// from locale lookups, i.e., when a format string asks for a month or
/// weekday name in a locale that isn't known to the configured
/// [`FieldNames`](crate::fmt::FieldNames) provider.
///
/// Note that malformed format strings never produce an error. Anything the
/// formatter doesn't recognize is written out literally.
#[derive(Clone, Debug)]
pub struct Error {
    kind: ErrorKind,
}

impl Error {
    /// Creates an error from an arbitrary `core::fmt::Arguments`.
    pub(crate) fn adhoc_from_args<'a>(
        message: core::fmt::Arguments<'a>,
    ) -> Error {
        let kind = ErrorKind::Adhoc(AdhocError::from_display(message));
        Error { kind }
    }

    /// Creates an error indicating that the locale given isn't supported by
    /// a name provider.
    pub(crate) fn unknown_locale(locale: &str) -> Error {
        let kind = ErrorKind::Locale(LocaleError {
            locale: locale.into(),
            feature: None,
        });
        Error { kind }
    }

    /// Creates an error indicating that the locale given can only be
    /// supported when the named crate feature is enabled.
    pub(crate) fn locale_requires_feature(
        locale: &str,
        feature: &'static str,
    ) -> Error {
        let kind = ErrorKind::Locale(LocaleError {
            locale: locale.into(),
            feature: Some(feature),
        });
        Error { kind }
    }

    /// Returns true when this error originated from looking up a localized
    /// name (or phrase) for a locale that isn't supported.
    ///
    /// # Example
    ///
    /// ```
    /// use jiff::civil::date;
    /// use jiff_fns::fmt;
    ///
    /// let err = fmt::format_with_locale(
    ///     "MMMM",
    ///     date(2025, 1, 20),
    ///     "xx-NOPE",
    /// ).unwrap_err();
    /// assert!(err.is_locale());
    /// ```
    pub fn is_locale(&self) -> bool {
        matches!(self.kind, ErrorKind::Locale(_))
    }

    /// Returns true when this error was reported by Jiff.
    ///
    /// This occurs when a value or the result of arithmetic falls outside
    /// of Jiff's supported range, when a time zone couldn't be found or
    /// when rounding options are invalid. The underlying `jiff::Error` is
    /// available via `std::error::Error::source`.
    ///
    /// # Example
    ///
    /// ```
    /// use jiff::civil::date;
    ///
    /// let zdt = date(2025, 1, 20).in_tz("UTC")?;
    /// let err = jiff_fns::add_years(zdt, i64::MAX).unwrap_err();
    /// assert!(err.is_jiff());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn is_jiff(&self) -> bool {
        matches!(self.kind, ErrorKind::Jiff(_))
    }
}

#[derive(Clone, Debug)]
enum ErrorKind {
    Adhoc(AdhocError),
    Locale(LocaleError),
    Jiff(jiff::Error),
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self.kind {
            ErrorKind::Adhoc(ref err) => {
                core::fmt::Display::fmt(&err.message, f)
            }
            ErrorKind::Locale(ref err) => core::fmt::Display::fmt(err, f),
            ErrorKind::Jiff(ref err) => err.fmt(f),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.kind {
            ErrorKind::Adhoc(_) | ErrorKind::Locale(_) => None,
            ErrorKind::Jiff(ref err) => Some(err),
        }
    }
}

impl From<jiff::Error> for Error {
    fn from(e: jiff::Error) -> Error {
        Error { kind: ErrorKind::Jiff(e) }
    }
}

impl From<core::fmt::Error> for Error {
    fn from(_: core::fmt::Error) -> Error {
        err!("an error occurred when formatting an argument")
    }
}

/// A generic error message.
#[derive(Clone, Debug)]
struct AdhocError {
    message: Box<str>,
}

impl AdhocError {
    fn from_display<'a>(
        message: impl core::fmt::Display + 'a,
    ) -> AdhocError {
        let message = message.to_string().into_boxed_str();
        AdhocError { message }
    }
}

/// A locale couldn't be resolved by a name provider.
#[derive(Clone, Debug)]
struct LocaleError {
    locale: Box<str>,
    feature: Option<&'static str>,
}

impl core::fmt::Display for LocaleError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self.feature {
            None => {
                write!(f, "unknown or unsupported locale `{}`", self.locale)
            }
            Some(feature) => write!(
                f,
                "locale `{}` requires enabling the `{feature}` crate \
                 feature of `jiff-fns`",
                self.locale,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn locale_messages() {
        insta::assert_snapshot!(
            Error::unknown_locale("xx-NOPE").to_string(),
            @"unknown or unsupported locale `xx-NOPE`",
        );
        insta::assert_snapshot!(
            Error::locale_requires_feature("es-ES", "locale").to_string(),
            @"locale `es-ES` requires enabling the `locale` crate feature of `jiff-fns`",
        );
    }

    #[test]
    fn predicates() {
        assert!(Error::unknown_locale("xx").is_locale());
        assert!(!Error::unknown_locale("xx").is_jiff());
        assert!(!err!("whoops {}", 1).is_locale());
        assert_eq!(err!("whoops {}", 1).to_string(), "whoops 1");
    }
}
