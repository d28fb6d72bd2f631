//! # Lenient Number Parsing
//!
//! Filter criteria arrive as strings (`"100-200"`, `"3.5"`) and product
//! payloads are not always strict about numeric fields. Criteria go through
//! [`parse_float`], which reads the longest leading decimal literal and
//! yields `NaN` when there is none. Numeric strings inside a payload go
//! through [`parse_number`], which accepts only a complete literal.
//!
//! ```text
//!   "4.5"      →  4.5
//!   "  100abc" →  100
//!   "1e3"      →  1000
//!   "abc" / "" →  NaN   (every comparison against NaN is false)
//! ```

/// Parses the leading decimal literal of `input`.
///
/// Leading whitespace is skipped. An optional sign, integer digits, an
/// optional fraction and an optional exponent are consumed; trailing text is
/// ignored. `Infinity` (optionally signed) is accepted. Anything else is
/// `NaN`.
pub fn parse_float(input: &str) -> f64 {
    scan_literal(input.trim_start()).map_or(f64::NAN, |(value, _)| value)
}

/// Converts a whole string to a number.
///
/// Used for numeric fields that arrive as strings. Surrounding whitespace is
/// ignored and a blank string is `0`; otherwise the entire text must be one
/// decimal literal (or `Infinity`), so `"150abc"` is `NaN`.
pub fn parse_number(input: &str) -> f64 {
    let s = input.trim();
    if s.is_empty() {
        return 0.0;
    }

    match scan_literal(s) {
        Some((value, consumed)) if consumed == s.len() => value,
        _ => f64::NAN,
    }
}

/// Reads the decimal literal at the start of `s`, returning its value and
/// length in bytes.
fn scan_literal(s: &str) -> Option<(f64, usize)> {
    let bytes = s.as_bytes();
    let len = bytes.len();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }

    if s[end..].starts_with("Infinity") {
        let value = if bytes.first() == Some(&b'-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
        return Some((value, end + "Infinity".len()));
    }

    let int_start = end;
    while end < len && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < len && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < len && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        return None;
    }

    if end < len && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < len && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < len && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        // "1e" keeps the mantissa only
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok().map(|value| (value, end))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_numbers() {
        assert_eq!(parse_float("100"), 100.0);
        assert_eq!(parse_float("4.5"), 4.5);
        assert_eq!(parse_float("-3"), -3.0);
        assert_eq!(parse_float("+7"), 7.0);
        assert_eq!(parse_float(".5"), 0.5);
        assert_eq!(parse_float("5."), 5.0);
    }

    #[test]
    fn test_leading_prefix_only() {
        assert_eq!(parse_float("  100abc"), 100.0);
        assert_eq!(parse_float("200 "), 200.0);
        assert_eq!(parse_float("1e3"), 1000.0);
        assert_eq!(parse_float("2e"), 2.0);
        assert_eq!(parse_float("3.5.1"), 3.5);
    }

    #[test]
    fn test_not_a_number() {
        assert!(parse_float("").is_nan());
        assert!(parse_float("abc").is_nan());
        assert!(parse_float("-").is_nan());
        assert!(parse_float(".").is_nan());
    }

    #[test]
    fn test_infinity() {
        assert_eq!(parse_float("Infinity"), f64::INFINITY);
        assert_eq!(parse_float("-Infinity"), f64::NEG_INFINITY);
        assert_eq!(parse_number("-Infinity"), f64::NEG_INFINITY);
    }

    #[test]
    fn test_whole_string_numbers() {
        assert_eq!(parse_number("150"), 150.0);
        assert_eq!(parse_number(" 99.5 "), 99.5);
        assert_eq!(parse_number("1e3"), 1000.0);
        assert_eq!(parse_number(""), 0.0);
        assert_eq!(parse_number("   "), 0.0);
        assert!(parse_number("150abc").is_nan());
        assert!(parse_number("1e").is_nan());
        assert!(parse_number("3.5.1").is_nan());
        assert!(parse_number("abc").is_nan());
    }
}
