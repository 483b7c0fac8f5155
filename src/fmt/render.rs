use core::fmt::Write;

use jiff::civil::Date;

use crate::{
    error::Error,
    fmt::{
        names::{Field, FieldNames, NameStyle},
        ordinal::ordinal_suffix,
        token::Token,
    },
};

/// Renders a single token for the given date.
///
/// Numeric tokens are written directly. Named tokens (eras, months and
/// weekdays) are looked up via `names` in the given locale.
pub(super) fn render<N: FieldNames, W: Write>(
    token: Token,
    date: Date,
    locale: &str,
    names: &N,
    wtr: &mut W,
) -> Result<(), Error> {
    let year = i64::from(date.year());
    let month = i64::from(date.month());
    let day = i64::from(date.day());
    let quarter = (month + 2) / 3;
    let name = |field, style| names.field_name(date, field, style, locale);

    match token {
        Token::EraShort => {
            wtr.write_str(&name(Field::Era, NameStyle::Short)?)?
        }
        Token::EraLong => {
            wtr.write_str(&name(Field::Era, NameStyle::Long)?)?
        }
        Token::EraNarrow => {
            wtr.write_str(&name(Field::Era, NameStyle::Narrow)?)?
        }
        Token::Year => write_int(wtr, year, 0)?,
        Token::YearTwoDigit => write_int(wtr, year % 100, 2)?,
        Token::YearPadded3 => write_int(wtr, year, 3)?,
        Token::YearPadded4 => write_int(wtr, year, 4)?,
        Token::Quarter => write_int(wtr, quarter, 0)?,
        Token::QuarterPadded => write_int(wtr, quarter, 2)?,
        Token::QuarterShort => write!(wtr, "Q{quarter}")?,
        Token::QuarterLong => {
            write!(wtr, "{quarter}{} quarter", ordinal_suffix(quarter))?
        }
        Token::Month => write_int(wtr, month, 0)?,
        Token::MonthOrdinal => write_ordinal(wtr, month)?,
        Token::MonthPadded => write_int(wtr, month, 2)?,
        Token::MonthShort => {
            wtr.write_str(&name(Field::Month, NameStyle::Short)?)?
        }
        Token::MonthLong => {
            wtr.write_str(&name(Field::Month, NameStyle::Long)?)?
        }
        Token::MonthNarrow => {
            wtr.write_str(&name(Field::Month, NameStyle::Narrow)?)?
        }
        Token::Day => write_int(wtr, day, 0)?,
        Token::DayOrdinal => write_ordinal(wtr, day)?,
        Token::DayPadded => write_int(wtr, day, 2)?,
        Token::WeekdayShort => {
            wtr.write_str(&name(Field::Weekday, NameStyle::Short)?)?
        }
        Token::WeekdayLong => {
            wtr.write_str(&name(Field::Weekday, NameStyle::Long)?)?
        }
        Token::WeekdayNarrow => {
            wtr.write_str(&name(Field::Weekday, NameStyle::Narrow)?)?
        }
        Token::WeekdayTwoLetter => {
            let short = name(Field::Weekday, NameStyle::Short)?;
            let end =
                short.char_indices().nth(2).map_or(short.len(), |(i, _)| i);
            wtr.write_str(&short[..end])?
        }
    }
    Ok(())
}

/// Writes `value` in decimal, zero padded to at least `width` digits.
///
/// The sign of a negative number doesn't count toward the width.
fn write_int<W: Write>(
    wtr: &mut W,
    value: i64,
    width: usize,
) -> Result<(), Error> {
    if value < 0 {
        wtr.write_char('-')?;
    }
    write!(wtr, "{:0width$}", value.unsigned_abs())?;
    Ok(())
}

fn write_ordinal<W: Write>(wtr: &mut W, value: i64) -> Result<(), Error> {
    write!(wtr, "{value}{}", ordinal_suffix(value))?;
    Ok(())
}
