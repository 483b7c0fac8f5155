/// Returns the English ordinal suffix for the integer given.
///
/// This handles the usual exceptions for numbers ending in `11`, `12` and
/// `13`. No validation is performed on the value. It doesn't need to be a
/// valid day of the month.
///
/// # Example
///
/// ```
/// use jiff_fns::fmt::ordinal_suffix;
///
/// assert_eq!(ordinal_suffix(1), "st");
/// assert_eq!(ordinal_suffix(2), "nd");
/// assert_eq!(ordinal_suffix(3), "rd");
/// assert_eq!(ordinal_suffix(4), "th");
/// assert_eq!(ordinal_suffix(11), "th");
/// assert_eq!(ordinal_suffix(12), "th");
/// assert_eq!(ordinal_suffix(13), "th");
/// assert_eq!(ordinal_suffix(21), "st");
/// assert_eq!(ordinal_suffix(111), "th");
/// assert_eq!(ordinal_suffix(101), "st");
/// ```
pub fn ordinal_suffix(n: i64) -> &'static str {
    let (j, k) = (n % 10, n % 100);
    if j == 1 && k != 11 {
        "st"
    } else if j == 2 && k != 12 {
        "nd"
    } else if j == 3 && k != 13 {
        "rd"
    } else {
        "th"
    }
}
