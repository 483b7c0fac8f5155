/// The longest token in the vocabulary, `EEEEEE`.
const MAX_TOKEN_LEN: usize = 6;

/// A single recognized formatting directive.
///
/// Several token strings can map to the same variant. For example, `E`,
/// `EE` and `EEE` all render the abbreviated weekday name.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum Token {
    /// `G`, `GG`, `GGG`
    EraShort,
    /// `GGGG`
    EraLong,
    /// `GGGGG`
    EraNarrow,
    /// `y`
    Year,
    /// `yy`
    YearTwoDigit,
    /// `yyy`
    YearPadded3,
    /// `yyyy`
    YearPadded4,
    /// `Q` and `QQQQQ`
    Quarter,
    /// `QQ`
    QuarterPadded,
    /// `QQQ`
    QuarterShort,
    /// `QQQQ`
    QuarterLong,
    /// `M`
    Month,
    /// `Mo`
    MonthOrdinal,
    /// `MM`
    MonthPadded,
    /// `MMM`
    MonthShort,
    /// `MMMM`
    MonthLong,
    /// `MMMMM`
    MonthNarrow,
    /// `d`
    Day,
    /// `do`
    DayOrdinal,
    /// `dd`
    DayPadded,
    /// `E`, `EE`, `EEE`
    WeekdayShort,
    /// `EEEE`
    WeekdayLong,
    /// `EEEEE`
    WeekdayNarrow,
    /// `EEEEEE`
    WeekdayTwoLetter,
}

/// Every token formed by repeating a single letter.
///
/// The ordinal tokens `do` and `Mo` aren't in here since they aren't runs of
/// one letter. See `scan`.
static VOCABULARY: &[(&[u8], Token)] = &[
    (b"G", Token::EraShort),
    (b"GG", Token::EraShort),
    (b"GGG", Token::EraShort),
    (b"GGGG", Token::EraLong),
    (b"GGGGG", Token::EraNarrow),
    (b"y", Token::Year),
    (b"yy", Token::YearTwoDigit),
    (b"yyy", Token::YearPadded3),
    (b"yyyy", Token::YearPadded4),
    (b"Q", Token::Quarter),
    (b"QQ", Token::QuarterPadded),
    (b"QQQ", Token::QuarterShort),
    (b"QQQQ", Token::QuarterLong),
    (b"QQQQQ", Token::Quarter),
    (b"M", Token::Month),
    (b"MM", Token::MonthPadded),
    (b"MMM", Token::MonthShort),
    (b"MMMM", Token::MonthLong),
    (b"MMMMM", Token::MonthNarrow),
    (b"d", Token::Day),
    (b"dd", Token::DayPadded),
    (b"E", Token::WeekdayShort),
    (b"EE", Token::WeekdayShort),
    (b"EEE", Token::WeekdayShort),
    (b"EEEE", Token::WeekdayLong),
    (b"EEEEE", Token::WeekdayNarrow),
    (b"EEEEEE", Token::WeekdayTwoLetter),
];

/// Looks for a token at the start of `fmt`.
///
/// When one is found, the token is returned along with the number of bytes
/// it matched. Otherwise, `None` is returned and the caller should treat the
/// first character of `fmt` as a literal.
///
/// Matching is greedy: a run of identical letters is matched against the
/// longest token it could be, so `yyyy` is one 4-digit year and not four
/// unpadded years. A run longer than any token (e.g., `dddd`) matches the
/// longest token possible and leaves the rest to be scanned again.
pub(super) fn scan(fmt: &[u8]) -> Option<(Token, usize)> {
    // These two aren't runs of a single letter, so they get checked first.
    if fmt.starts_with(b"do") {
        return Some((Token::DayOrdinal, 2));
    }
    if fmt.starts_with(b"Mo") {
        return Some((Token::MonthOrdinal, 2));
    }

    let &first = fmt.first()?;
    if !first.is_ascii_alphabetic() {
        return None;
    }
    let run = fmt.iter().take_while(|&&b| b == first).count();
    let longest = run.min(MAX_TOKEN_LEN);
    (1..=longest).rev().find_map(|len| {
        let candidate = &fmt[..len];
        VOCABULARY
            .iter()
            .find(|&&(text, _)| text == candidate)
            .map(|&(_, token)| (token, len))
    })
}
