/// Formats a number like C's `%g`: six significant digits, trailing zeros
/// removed, scientific notation for very small or large magnitudes.
pub fn format_g(value: f64) -> String {
    const PRECISION: i32 = 6;

    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    // The exponent must be taken after rounding to the target precision.
    let scientific = format!("{:.*e}", (PRECISION - 1) as usize, value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };

    if exponent < -4 || exponent >= PRECISION {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            trim_fraction(mantissa),
            sign,
            exponent.abs()
        )
    } else {
        let decimals = (PRECISION - 1 - exponent) as usize;
        trim_fraction(&format!("{:.*}", decimals, value))
    }
}

fn trim_fraction(text: &str) -> String {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers_have_no_fraction() {
        assert_eq!(format_g(3.0), "3");
        assert_eq!(format_g(5.0), "5");
        assert_eq!(format_g(100.0), "100");
    }

    #[test]
    fn test_six_significant_digits() {
        assert_eq!(format_g(2.5), "2.5");
        assert_eq!(format_g(13.0_f64.sqrt()), "3.60555");
        assert_eq!(format_g(123456.7), "123457");
        assert_eq!(format_g(0.0001), "0.0001");
    }

    #[test]
    fn test_scientific_range() {
        assert_eq!(format_g(1_000_000.0), "1e+06");
        assert_eq!(format_g(999_999.7), "1e+06");
        assert_eq!(format_g(0.00001), "1e-05");
        assert_eq!(format_g(1.5e-7), "1.5e-07");
    }
}
