//! Coercion of raw form amounts into numbers.
//!
//! Submitted amounts are never validated. Two loose rules are applied,
//! and which one is used depends on the mutation:
//!
//! - [`to_number`] reads the whole string as a numeric literal
//!   (`"12.5"` -> 12.5, `""` -> 0, `"7abc"` -> NaN)
//! - [`parse_int`] reads the leading integer prefix
//!   (`"12.5"` -> 12, `""` -> NaN, `"7abc"` -> 7)
//!
//! Anything that cannot be read becomes `NaN` and flows into the balances.

/// Whole-string numeric coercion. A missing value is `NaN`.
///
/// Accepts surrounding whitespace, decimal literals with optional sign,
/// fraction and exponent, signed `Infinity`, and `0x`/`0o`/`0b` integers.
/// An empty or all-whitespace string is `0`.
pub fn to_number(raw: Option<&str>) -> f64 {
    let Some(raw) = raw else {
        return f64::NAN;
    };

    let s = raw.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
    if s.is_empty() {
        return 0.0;
    }

    match s {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    if let Some(value) = radix_literal(s) {
        return value;
    }

    // `str::parse` also accepts "inf" and "nan", which are not literals here.
    let literal_chars = s
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'));
    if literal_chars && s.bytes().any(|b| b.is_ascii_digit()) {
        s.parse().unwrap_or(f64::NAN)
    } else {
        f64::NAN
    }
}

/// `0x`, `0o` and `0b` literals. `None` if `s` has no such prefix.
fn radix_literal(s: &str) -> Option<f64> {
    let radix = match s.get(..2)? {
        "0x" | "0X" => 16,
        "0o" | "0O" => 8,
        "0b" | "0B" => 2,
        _ => return None,
    };

    let digits = &s[2..];
    if digits.is_empty() {
        return Some(f64::NAN);
    }

    let value = digits.chars().try_fold(0.0, |acc: f64, c| {
        c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d))
    });
    Some(value.unwrap_or(f64::NAN))
}

/// Leading-integer coercion. A missing value is `NaN`.
///
/// Skips leading whitespace, takes an optional sign and an optional `0x`
/// prefix, then reads digits until the first character that is not one.
/// No digits at all is `NaN`.
pub fn parse_int(raw: Option<&str>) -> f64 {
    let Some(raw) = raw else {
        return f64::NAN;
    };

    let s = raw.trim_start_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
    let (negative, s) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let (radix, digits) = match s.get(..2) {
        Some("0x" | "0X") => (16, &s[2..]),
        _ => (10, s),
    };

    let mut value: Option<f64> = None;
    for c in digits.chars() {
        let Some(d) = c.to_digit(radix) else {
            break;
        };
        value = Some(value.unwrap_or(0.0) * f64::from(radix) + f64::from(d));
    }

    match value {
        Some(v) if negative => -v,
        Some(v) => v,
        None => f64::NAN,
    }
}
