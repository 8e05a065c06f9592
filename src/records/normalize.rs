//! Attribute normalization.
//!
//! Upstream attribute values are free text: plain numbers, numbers with a
//! unit suffix ("1000km"), or markers like "unknown" and "n/a". Scoring needs
//! numbers, so every value maps to an `f64` with `UNKNOWN` standing in for
//! anything that is not a number.

/// Sentinel for unknown or non-numeric data.
pub const UNKNOWN: f64 = -1.0;

/// Convert raw attribute text into a comparable value.
///
/// The literals `"unknown"` and `"n/a"` (case-sensitive) map to `UNKNOWN`.
/// Anything else is read as the longest numeric prefix after leading
/// whitespace, so `"1000km"` is `1000.0`. Text without a numeric prefix,
/// including the empty string, maps to `UNKNOWN`.
///
/// ```
/// use starship_duel::records::{normalize, UNKNOWN};
///
/// assert_eq!(normalize("n/a"), UNKNOWN);
/// assert_eq!(normalize("12.5"), 12.5);
/// assert_eq!(normalize(""), UNKNOWN);
/// ```
#[must_use]
pub fn normalize(value: &str) -> f64 {
    if value == "unknown" || value == "n/a" {
        return UNKNOWN;
    }
    match numeric_prefix(value.trim_start()) {
        Some(prefix) => prefix.parse::<f64>().unwrap_or(UNKNOWN),
        None => UNKNOWN,
    }
}

/// Whether a normalized value is the unknown sentinel.
#[must_use]
pub fn is_unknown(value: f64) -> bool {
    value == UNKNOWN
}

/// Longest prefix of `s` that forms a decimal float literal.
fn numeric_prefix(s: &str) -> Option<&str> {
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    if s[end..].starts_with("Infinity") {
        return Some(&s[..end + "Infinity".len()]);
    }

    let int_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut digits = end - int_start;

    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        if digits > 0 || frac_end > frac_start {
            digits += frac_end - frac_start;
            end = frac_end;
        }
    }

    if digits == 0 {
        return None;
    }

    // Exponent only counts when at least one digit follows it.
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    Some(&s[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markers() {
        assert_eq!(normalize("unknown"), UNKNOWN);
        assert_eq!(normalize("n/a"), UNKNOWN);
    }

    #[test]
    fn test_markers_are_case_sensitive() {
        // Not markers, and not numbers either.
        assert_eq!(normalize("Unknown"), UNKNOWN);
        assert_eq!(normalize("N/A"), UNKNOWN);
    }

    #[test]
    fn test_plain_numbers() {
        assert_eq!(normalize("1234"), 1234.0);
        assert_eq!(normalize("12.5"), 12.5);
        assert_eq!(normalize("0"), 0.0);
        assert_eq!(normalize("-30"), -30.0);
        assert_eq!(normalize(".5"), 0.5);
        assert_eq!(normalize("3.5e2"), 350.0);
    }

    #[test]
    fn test_empty_and_garbage() {
        assert_eq!(normalize(""), UNKNOWN);
        assert_eq!(normalize("   "), UNKNOWN);
        assert_eq!(normalize("abc"), UNKNOWN);
        assert_eq!(normalize("."), UNKNOWN);
        assert_eq!(normalize("-"), UNKNOWN);
    }

    #[test]
    fn test_numeric_prefix() {
        assert_eq!(normalize("1000km"), 1000.0);
        assert_eq!(normalize("  800"), 800.0);
        assert_eq!(normalize("30-165"), 30.0);
        assert_eq!(normalize("843,342"), 843.0);
        assert_eq!(normalize("5e"), 5.0);
        assert_eq!(normalize("7.e+"), 7.0);
    }

    #[test]
    fn test_infinity() {
        assert_eq!(normalize("Infinity"), f64::INFINITY);
        assert_eq!(normalize("-Infinity"), f64::NEG_INFINITY);
    }

    #[test]
    fn test_is_unknown() {
        assert!(is_unknown(normalize("n/a")));
        assert!(!is_unknown(normalize("0")));
    }
}
