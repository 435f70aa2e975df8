//! Tick label formatting
//!
//! Follows the C `%g` conversion: values print in fixed notation unless
//! their decimal exponent is below -4 or at least the precision, and
//! trailing zeros are removed in both notations.

/// Format `value` with `precision` significant digits using `%g` rules.
///
/// ```rust
/// use trueno_parcoords::axis::format_general;
///
/// assert_eq!(format_general(100.0, 3), "100");
/// assert_eq!(format_general(1000.0, 3), "1e+03");
/// assert_eq!(format_general(0.001, 3), "0.001");
/// assert_eq!(format_general(31.622_776, 3), "31.6");
/// ```
#[must_use]
pub fn format_general(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let precision = precision.max(1);
    // Rounding to `precision` digits first fixes the exponent (9.999 -> 1.00e1).
    let scientific = format!("{:.*e}", precision - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return scientific;
    };

    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    let precision_exp = precision as i32;
    if exponent < -4 || exponent >= precision_exp {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{sign}{:02}",
            strip_trailing_zeros(mantissa),
            exponent.unsigned_abs()
        )
    } else {
        #[allow(clippy::cast_sign_loss)]
        let decimals = (precision_exp - 1 - exponent) as usize;
        strip_trailing_zeros(&format!("{value:.decimals$}")).to_string()
    }
}

fn strip_trailing_zeros(digits: &str) -> &str {
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.')
    } else {
        digits
    }
}
