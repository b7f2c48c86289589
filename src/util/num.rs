/// Parses text as a finite `f64`.
///
/// Leading and trailing whitespace is ignored. Values the standard parser
/// accepts but that are not finite (`inf`, `NaN`, or a literal too large for
/// `f64` such as `1e400`) are rejected.
///
/// ## Returns
/// - `Some(f64)`: The parsed value.
/// - `None`: If the text is not a finite number.
///
/// ## Example
/// ```
/// use arith_eval::util::num::parse_finite;
///
/// assert_eq!(parse_finite(" 2.5 "), Some(2.5));
/// assert_eq!(parse_finite("-1e3"), Some(-1000.0));
/// assert_eq!(parse_finite("inf"), None);
/// assert_eq!(parse_finite("1e400"), None);
/// assert_eq!(parse_finite("abc"), None);
/// ```
#[must_use]
pub fn parse_finite(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Largest number of fractional digits [`format_number`] prints.
pub const MAX_PRECISION: usize = 64;
/// Magnitude from which results print in scientific notation.
pub const SCIENTIFIC_ABOVE: f64 = 1e16;
/// Non-zero magnitude below which results print in scientific notation.
pub const SCIENTIFIC_BELOW: f64 = 1e-6;

/// Formats a number for display.
///
/// Without a precision the shortest representation that round-trips is used,
/// so whole numbers print without a fractional part. Negative zero prints as
/// `0`. Magnitudes of at least [`SCIENTIFIC_ABOVE`] or below
/// [`SCIENTIFIC_BELOW`] use scientific notation. A precision above
/// [`MAX_PRECISION`] is capped.
///
/// ## Example
/// ```
/// use arith_eval::util::num::format_number;
///
/// assert_eq!(format_number(5.0, None), "5");
/// assert_eq!(format_number(3.5, None), "3.5");
/// assert_eq!(format_number(2.0 / 3.0, Some(3)), "0.667");
/// assert_eq!(format_number(-0.0, None), "0");
/// assert_eq!(format_number(1e300, None), "1e300");
/// assert_eq!(format_number(1.5e-7, Some(2)), "1.50e-7");
/// ```
#[must_use]
pub fn format_number(value: f64, precision: Option<usize>) -> String {
    let value = if value == 0.0 { 0.0 } else { value };
    let magnitude = value.abs();
    let scientific =
        magnitude >= SCIENTIFIC_ABOVE || (magnitude > 0.0 && magnitude < SCIENTIFIC_BELOW);

    match (precision.map(|digits| digits.min(MAX_PRECISION)), scientific) {
        (Some(digits), true) => format!("{value:.digits$e}"),
        (Some(digits), false) => format!("{value:.digits$}"),
        (None, true) => format!("{value:e}"),
        (None, false) => format!("{value}"),
    }
}
