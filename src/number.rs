//! Numeric conversion of flag values.
//!
//! [`to_number`] accepts a lenient numeric grammar and [`number_to_string`]
//! produces the canonical text of a number. A value is guessed to be numeric
//! only when the two round-trip exactly.

/// Convert `text` to a number, yielding NaN when it isn't numeric.
///
/// Surrounding whitespace is ignored and empty text is zero. Accepts decimal
/// literals with an optional sign, fraction and exponent, unsigned `0x`, `0o`
/// and `0b` literals, and a signed `Infinity`.
pub fn to_number(text: &str) -> f64 {
    let text = text.trim();
    if text.is_empty() {
        return 0.0;
    }

    if let Some(value) = parse_radix(text) {
        return value;
    }

    match text {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    // f64::from_str also takes "inf" and "nan" spellings, which aren't numbers here.
    if !text
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'))
    {
        return f64::NAN;
    }

    text.parse::<f64>().unwrap_or(f64::NAN)
}

fn parse_radix(text: &str) -> Option<f64> {
    let (digits, radix) = match text.get(..2) {
        Some("0x") | Some("0X") => (&text[2..], 16),
        Some("0o") | Some("0O") => (&text[2..], 8),
        Some("0b") | Some("0B") => (&text[2..], 2),
        _ => return None,
    };
    if digits.is_empty() || digits.starts_with(['+', '-']) {
        return Some(f64::NAN);
    }
    Some(
        u128::from_str_radix(digits, radix)
            .map(|v| v as f64)
            .unwrap_or(f64::NAN),
    )
}

/// Canonical text of a number.
///
/// Integral values print without a fraction, magnitudes at or above 1e21 or
/// below 1e-6 use exponent form (`1e+21`, `1e-7`), and negative zero prints
/// as `0`.
pub fn number_to_string(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if magnitude >= 1e21 || magnitude < 1e-6 {
        let formatted = format!("{value:e}");
        match formatted.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
            _ => formatted,
        }
    } else {
        format!("{value}")
    }
}

/// Whether `text` is exactly the canonical form of the number it denotes.
///
/// The literal `NaN` is not a number by this test.
pub fn is_canonical_number(text: &str) -> bool {
    let value = to_number(text);
    !value.is_nan() && number_to_string(value) == text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal_literals() {
        assert_eq!(to_number("52"), 52.0);
        assert_eq!(to_number("-1.5"), -1.5);
        assert_eq!(to_number(" 7 "), 7.0);
        assert_eq!(to_number("1e3"), 1000.0);
        assert_eq!(to_number(".5"), 0.5);
        assert_eq!(to_number(""), 0.0);
    }

    #[test]
    fn test_radix_literals() {
        assert_eq!(to_number("0x10"), 16.0);
        assert_eq!(to_number("0o17"), 15.0);
        assert_eq!(to_number("0b101"), 5.0);
        assert!(to_number("0x").is_nan());
        assert!(to_number("0x-1").is_nan());
        assert!(to_number("0xZZ").is_nan());
    }

    #[test]
    fn test_non_numeric_is_nan() {
        assert!(to_number("this is a string tho").is_nan());
        assert!(to_number("inf").is_nan());
        assert!(to_number("nan").is_nan());
        assert!(to_number("1-2").is_nan());
        assert!(to_number("null").is_nan());
    }

    #[test]
    fn test_infinity() {
        assert_eq!(to_number("Infinity"), f64::INFINITY);
        assert_eq!(to_number("-Infinity"), f64::NEG_INFINITY);
    }

    #[test]
    fn test_canonical_text() {
        assert_eq!(number_to_string(52.0), "52");
        assert_eq!(number_to_string(0.1), "0.1");
        assert_eq!(number_to_string(-0.0), "0");
        assert_eq!(number_to_string(1e21), "1e+21");
        assert_eq!(number_to_string(1e-7), "1e-7");
        assert_eq!(number_to_string(123456.0), "123456");
        assert_eq!(number_to_string(f64::NAN), "NaN");
    }

    #[test]
    fn test_canonical_round_trip() {
        assert!(is_canonical_number("52"));
        assert!(is_canonical_number("-3.25"));
        assert!(is_canonical_number("Infinity"));
        assert!(!is_canonical_number("052"));
        assert!(!is_canonical_number("1.0"));
        assert!(!is_canonical_number("0x10"));
        assert!(!is_canonical_number(""));
        assert!(!is_canonical_number("potato"));
        assert!(!is_canonical_number("NaN"));
    }
}
