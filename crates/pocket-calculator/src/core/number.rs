//! Operand text <-> number conversion
//!
//! Operands are typed with `,` as the decimal separator. Parsing reads the
//! longest numeric prefix (so `"1e+"` is `1` and `"-"` is NaN); formatting
//! uses the shortest text that round-trips, switching to exponent notation
//! outside `1e-6 <= |x| < 1e21`.

/// Parses operand text; text with no numeric prefix yields NaN.
#[must_use]
pub fn parse_number(text: &str) -> f64 {
    let normalized = text.replacen(',', ".", 1);
    let trimmed = normalized.trim_start();
    let len = numeric_prefix_len(trimmed);
    trimmed[..len].parse().unwrap_or(f64::NAN)
}

/// Formats a number as operand text with `,` as the decimal separator.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let word = if value > 0.0 { "Infinity" } else { "-Infinity" };
        return word.to_string();
    }
    if value == 0.0 {
        // Covers -0 as well
        return "0".to_string();
    }

    let magnitude = value.abs();
    let text = if (1e-6..1e21).contains(&magnitude) {
        format!("{value}")
    } else {
        signed_exponent(&format!("{value:e}"))
    };
    text.replacen('.', ",", 1)
}

/// Rewrites `1.5e21` as `1.5e+21`; negative exponents are left alone.
fn signed_exponent(text: &str) -> String {
    match text.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => text.to_string(),
    }
}

/// Length of the longest prefix that reads as a decimal float.
fn numeric_prefix_len(text: &str) -> usize {
    let bytes = text.as_bytes();
    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));

    if text[end..].starts_with("Infinity") {
        return end + "Infinity".len();
    }

    let int_start = end;
    end = skip_digits(bytes, end);
    let mut digits = end - int_start;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = skip_digits(bytes, end + 1);
        let frac_digits = frac_end - (end + 1);
        if digits + frac_digits > 0 {
            digits += frac_digits;
            end = frac_end;
        }
    }
    if digits == 0 {
        return 0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = skip_digits(bytes, exp);
        if exp_end > exp {
            end = exp_end;
        }
    }
    end
}

fn skip_digits(bytes: &[u8], mut pos: usize) -> usize {
    while bytes.get(pos).is_some_and(u8::is_ascii_digit) {
        pos += 1;
    }
    pos
}
