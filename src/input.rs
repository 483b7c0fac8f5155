use jiff::{tz::TimeZone, Timestamp, Zoned};

use crate::error::Error;

/// An input to any of the helper functions in this crate.
///
/// This unifies the two representations of a point in time that Jiff
/// provides: an absolute [`Timestamp`] with no time zone, and a [`Zoned`]
/// datetime that is attached to a time zone. Every helper in this crate
/// accepts an `impl Into<Temporal>` and immediately [`normalize`]s it, so
/// that all arithmetic, comparison and field extraction only needs to be
/// written once against `Zoned`.
///
/// Callers rarely need to name this type. It exists mostly for its `From`
/// impls.
///
/// # Example
///
/// ```
/// use jiff::{Timestamp, Zoned};
/// use jiff_fns::Temporal;
///
/// let ts: Timestamp = "2025-01-20T12:00:00Z".parse()?;
/// let zdt: Zoned = "2025-01-20T07:00:00-05[America/New_York]".parse()?;
///
/// let a = jiff_fns::normalize(Temporal::from(ts));
/// let b = jiff_fns::normalize(&zdt);
/// assert_eq!(a.timestamp(), b.timestamp());
/// assert_eq!(a.time_zone().iana_name(), Some("UTC"));
/// assert_eq!(b.time_zone().iana_name(), Some("America/New_York"));
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug)]
pub enum Temporal {
    /// An absolute instant in time.
    Timestamp(Timestamp),
    /// An instant observed in a particular time zone.
    Zoned(Zoned),
}

impl From<Timestamp> for Temporal {
    fn from(ts: Timestamp) -> Temporal {
        Temporal::Timestamp(ts)
    }
}

impl From<Zoned> for Temporal {
    fn from(zdt: Zoned) -> Temporal {
        Temporal::Zoned(zdt)
    }
}

impl<'a> From<&'a Zoned> for Temporal {
    fn from(zdt: &'a Zoned) -> Temporal {
        Temporal::Zoned(zdt.clone())
    }
}

impl<'a> From<&'a Timestamp> for Temporal {
    fn from(ts: &'a Timestamp) -> Temporal {
        Temporal::Timestamp(*ts)
    }
}

/// Converts any supported input into a [`Zoned`] datetime.
///
/// A [`Timestamp`] is anchored to [`TimeZone::UTC`], whose IANA name is
/// always `UTC`. A [`Zoned`] is returned as-is. In particular, its time
/// zone is preserved and is _not_ forced to UTC.
///
/// This never fails.
///
/// # Example
///
/// ```
/// use jiff::{Timestamp, Zoned};
///
/// let ts = Timestamp::UNIX_EPOCH;
/// let zdt = jiff_fns::normalize(ts);
/// assert_eq!(zdt.to_string(), "1970-01-01T00:00:00+00:00[UTC]");
///
/// let zdt: Zoned = "2024-03-10T03:00-04[America/New_York]".parse()?;
/// assert_eq!(jiff_fns::normalize(&zdt), zdt);
/// assert_eq!(
///     jiff_fns::normalize(&zdt).time_zone().iana_name(),
///     Some("America/New_York"),
/// );
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn normalize(input: impl Into<Temporal>) -> Zoned {
    match input.into() {
        Temporal::Timestamp(ts) => ts.to_zoned(TimeZone::UTC),
        Temporal::Zoned(zdt) => zdt,
    }
}

/// Returns the current instant in the system's configured time zone.
///
/// The system time zone is determined by Jiff. On Unix, this respects the
/// `TZ` environment variable. If no time zone could be found, Jiff falls back
/// to UTC.
#[cfg(feature = "std")]
pub fn now() -> Zoned {
    Zoned::now()
}

/// Returns the current instant as a datetime in UTC.
#[cfg(feature = "std")]
pub fn now_utc() -> Zoned {
    normalize(Timestamp::now())
}

/// Returns the time zone configured on the host.
///
/// This is the time zone used by [`now`]. It's what a "local" datetime means
/// in this crate.
#[cfg(feature = "std")]
pub fn local_time_zone() -> TimeZone {
    TimeZone::system()
}

/// Re-expresses the given input in the IANA time zone named.
///
/// The instant is unchanged. Only the wall clock fields and offset change.
///
/// # Errors
///
/// This returns an error when the time zone name couldn't be found in the
/// time zone database.
///
/// # Example
///
/// ```
/// use jiff::Timestamp;
///
/// let ts: Timestamp = "2025-01-20T12:00:00Z".parse()?;
/// let zdt = jiff_fns::in_time_zone(ts, "Asia/Tokyo")?;
/// assert_eq!(zdt.to_string(), "2025-01-20T21:00:00+09:00[Asia/Tokyo]");
///
/// assert!(jiff_fns::in_time_zone(ts, "Mars/Olympus_Mons").is_err());
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn in_time_zone(
    input: impl Into<Temporal>,
    name: &str,
) -> Result<Zoned, Error> {
    let zdt = normalize(input);
    let tz = TimeZone::get(name)?;
    Ok(zdt.with_time_zone(tz))
}
