use jiff::{civil::date, Timestamp, Zoned};
use jiff_fns::fmt::{self, Config, EnglishNames};

use crate::Result;

#[test]
fn numeric_patterns() -> Result {
    let d = date(2025, 1, 20);
    assert_eq!(fmt::format("yyyy-MM-dd", d)?, "2025-01-20");
    assert_eq!(fmt::format("Q", date(2025, 4, 15))?, "2");
    assert_eq!(fmt::format("yy", date(1999, 6, 1))?, "99");
    assert_eq!(fmt::format("yy", date(2000, 6, 1))?, "00");
    assert_eq!(fmt::format("yyy", date(7, 6, 1))?, "007");
    Ok(())
}

#[test]
fn named_patterns() -> Result {
    let d = date(2025, 1, 20);
    assert_eq!(
        fmt::format("EEEE, MMMM do, yyyy", d)?,
        "Monday, January 20th, 2025",
    );
    assert_eq!(fmt::format("QQQQ", d)?, "1st quarter");
    assert_eq!(fmt::format("GGGG", date(-43, 3, 15))?, "Before Christ");
    Ok(())
}

#[test]
fn ordinal_days() -> Result {
    let got: Vec<String> = [1, 2, 3, 11, 12, 13, 21, 22, 23]
        .into_iter()
        .map(|day| fmt::format("do", date(2025, 1, day)))
        .collect::<std::result::Result<_, _>>()?;
    assert_eq!(
        got,
        ["1st", "2nd", "3rd", "11th", "12th", "13th", "21st", "22nd", "23rd"],
    );
    Ok(())
}

#[test]
fn escapes_and_literals() -> Result {
    let d = date(2025, 1, 20);
    assert_eq!(fmt::format("'literal'", d)?, "literal");
    assert_eq!(fmt::format("''", d)?, "'");
    assert_eq!(fmt::format("yyyy''yy", d)?, "2025'25");
    assert_eq!(fmt::format("[ , / : ]", d)?, "[ , / : ]");
    Ok(())
}

#[test]
fn normalized_inputs() -> Result {
    let ts: Timestamp = "2025-01-20T12:00:00Z".parse()?;
    let zdt = jiff_fns::normalize(ts);
    assert_eq!(zdt.time_zone().iana_name(), Some("UTC"));

    let zdt: Zoned = "2025-01-20T12:00:00+09:00[Asia/Tokyo]".parse()?;
    let got = jiff_fns::normalize(&zdt);
    assert_eq!(got.time_zone().iana_name(), Some("Asia/Tokyo"));
    assert_eq!(got, zdt);
    Ok(())
}

#[test]
fn zoned_dates_are_local() -> Result {
    let ts: Timestamp = "2025-01-20T20:00:00Z".parse()?;
    assert_eq!(fmt::format_zoned("EEEE", ts)?, "Monday");
    let zdt = ts.in_tz("Pacific/Auckland")?;
    assert_eq!(fmt::format_zoned("EEEE", &zdt)?, "Tuesday");
    Ok(())
}

#[test]
fn custom_names_provider() -> Result {
    use jiff_fns::fmt::FieldNames;

    #[derive(Debug)]
    struct Shouty;

    impl FieldNames for Shouty {
        fn field_name(
            &self,
            date: jiff::civil::Date,
            field: fmt::Field,
            style: fmt::NameStyle,
            locale: &str,
        ) -> std::result::Result<String, jiff_fns::Error> {
            let name = EnglishNames.field_name(date, field, style, locale)?;
            Ok(name.to_uppercase())
        }
    }

    let config = Config::new().names(Shouty);
    let got = config.format("EEE d MMM yyyy", date(2025, 1, 20))?;
    assert_eq!(got, "MON 20 JAN 2025");
    assert_eq!(config.format_relative(2, jiff::Unit::Day)?, "in 2 days");
    Ok(())
}

#[cfg(feature = "locale")]
#[test]
fn localized_names() -> Result {
    let d = date(2025, 1, 20);
    assert_eq!(fmt::format_with_locale("MMMM", d, "es-ES")?, "enero");
    assert_eq!(fmt::format_with_locale("EEEE", d, "de-DE")?, "Montag");
    assert_eq!(fmt::format_with_locale("MMMM", d, "en-GB")?, "January");
    let err = fmt::format_with_locale("MMMM", d, "xx-NOPE").unwrap_err();
    assert!(err.is_locale());
    Ok(())
}

#[cfg(not(feature = "locale"))]
#[test]
fn localized_names_need_feature() -> Result {
    let d = date(2025, 1, 20);
    let err = fmt::format_with_locale("MMMM", d, "es-ES").unwrap_err();
    assert!(err.is_locale());
    assert_eq!(fmt::format_with_locale("MMMM", d, "en-GB")?, "January");
    Ok(())
}
