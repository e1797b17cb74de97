//! Display helpers shared by the calculation outputs.

/// Formats a value as a whole number, rounding to the nearest integer.
///
/// Ties go to the even neighbour, so `2.5` shows as `2`.
///
/// # Examples
///
/// ```
/// use recraft_core::calculations::common::format_whole;
///
/// assert_eq!(format_whole(999.6), "1000");
/// assert_eq!(format_whole(-12.4), "-12");
/// assert_eq!(format_whole(117.0), "117");
/// ```
pub fn format_whole(value: f64) -> String {
    format!("{value:.0}")
}
