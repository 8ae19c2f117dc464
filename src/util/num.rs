/// Values closer than this to the nearest integer are shown as integers.
pub const INTEGRAL_TOLERANCE: f64 = 1e-12;
/// Divisors with a smaller magnitude than this count as zero.
pub const ZERO_TOLERANCE: f64 = 1e-12;
/// Significant digits shown for non-integral values.
pub const SIGNIFICANT_DIGITS: usize = 12;

/// Returns `true` if `value` is within [`INTEGRAL_TOLERANCE`] of an integer.
///
/// Non-finite values are never integral.
#[must_use]
pub fn is_integral(value: f64) -> bool {
    value.is_finite() && (value - value.round()).abs() < INTEGRAL_TOLERANCE
}

/// Returns `true` if `value` is too small in magnitude to divide by.
#[must_use]
pub fn is_zero(value: f64) -> bool {
    value.abs() < ZERO_TOLERANCE
}

/// Formats a number for traces and results.
///
/// Values within [`INTEGRAL_TOLERANCE`] of an integer are written as that
/// integer with no decimal point. Everything else is written with up to
/// [`SIGNIFICANT_DIGITS`] significant digits and trailing zeros trimmed,
/// switching to scientific notation for very small or very large magnitudes
/// (the same rules as C's `%.12g`).
///
/// ## Parameters
/// - `value`: The number to format.
///
/// ## Returns
/// The formatted string. Identical inputs always give identical strings.
///
/// ## Example
/// ```
/// use stepcalc::util::num::format_number;
///
/// assert_eq!(format_number(2.0), "2");
/// assert_eq!(format_number(-0.0), "0");
/// assert_eq!(format_number(1.0 / 3.0), "0.333333333333");
/// assert_eq!(format_number(2.5), "2.5");
/// assert_eq!(format_number(1.5e-7), "1.5e-07");
/// assert_eq!(format_number(f64::INFINITY), "inf");
/// ```
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if is_integral(value) {
        // Adding zero folds `-0.0` into `0.0`.
        return format!("{:.0}", value.round() + 0.0);
    }

    format_significant(value, SIGNIFICANT_DIGITS)
}

/// Formats a finite, non-zero value with `digits` significant digits.
///
/// The decimal exponent is taken after rounding, so a value that rounds up to
/// the next power of ten is laid out by its rounded magnitude.
fn format_significant(value: f64, digits: usize) -> String {
    let scientific = format!("{:.*e}", digits.saturating_sub(1), value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return scientific;
    };
    let max_exponent = i32::try_from(digits).unwrap_or(i32::MAX);

    if exponent < -4 || exponent >= max_exponent {
        let sign = if exponent < 0 { '-' } else { '+' };
        return format!("{}e{sign}{:02}",
                       trim_fraction(mantissa),
                       exponent.unsigned_abs());
    }

    let decimals = usize::try_from(max_exponent - 1 - exponent).unwrap_or(0);
    trim_fraction(&format!("{value:.decimals$}")).to_string()
}

/// Strips trailing zeros after a decimal point, and the point itself if
/// nothing remains behind it.
fn trim_fraction(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}
