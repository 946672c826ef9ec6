//! Number conversions
//!
//! String conversion of numbers follows the runtime's `Number.prototype.toString()`
//! for radix 10: integral values print without a fraction, and magnitudes
//! outside `[1e-6, 1e21)` switch to exponent notation with an explicit sign.

/// Convert a number to its display string
pub fn number_to_string(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        // Covers -0 as well
        return "0".to_string();
    }

    let abs = n.abs();
    if abs >= 1e21 || abs < 1e-6 {
        let formatted = format!("{:e}", n);
        return match formatted.split_once('e') {
            Some((mantissa, exponent)) if exponent.starts_with('-') => {
                format!("{}e{}", mantissa, exponent)
            }
            Some((mantissa, exponent)) => format!("{}e+{}", mantissa, exponent),
            None => formatted,
        };
    }

    format!("{}", n)
}

/// Convert a string to a number the way `Number(string)` does
///
/// Surrounding whitespace is ignored and an empty string is zero. Hex, octal
/// and binary prefixes are honored. Anything unparseable is NaN.
pub fn string_to_number(s: &str) -> f64 {
    let s = s.trim();
    if s.is_empty() {
        return 0.0;
    }

    match s {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    for (prefix, radix) in [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)] {
        if let Some(digits) = s.strip_prefix(prefix) {
            return u64::from_str_radix(digits, radix)
                .map(|v| v as f64)
                .unwrap_or(f64::NAN);
        }
    }

    // Rust accepts "inf" and "nan" spellings the runtime does not
    let numeric_chars = s
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'));
    if !numeric_chars {
        return f64::NAN;
    }

    s.parse().unwrap_or(f64::NAN)
}
