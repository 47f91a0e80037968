//! Magnitude-dependent display formatting
//!
//! Three notations, picked by magnitude:
//!
//! ```text
//! |x| >= 1e9          1,23e+9        exponent, two mantissa digits
//! 1e6 <= |x| < 1e9    1.234.567,5    grouped thousands
//! otherwise           2,5            plain comma-decimal
//! ```
//!
//! [`format_display`] is the pure number formatter; [`render_display`]
//! wraps it with the rules that depend on what the user actually typed.

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::number::{format_number, parse_number};
use crate::config::{
    DisplayConfig, MAX_EXPONENT_FRACTION_DIGITS, MAX_GROUPED_FRACTION_DIGITS,
};

/// Rendering hint derived from the display text length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SizeClass {
    /// Short text, full-size font
    #[default]
    Normal,
    /// Medium text
    Small,
    /// Long text
    Smaller,
}

impl SizeClass {
    /// Picks the size class for a display text of `len` characters
    #[must_use]
    pub const fn for_len(len: usize, config: &DisplayConfig) -> Self {
        if len > config.small_max_len {
            Self::Smaller
        } else if len > config.normal_max_len {
            Self::Small
        } else {
            Self::Normal
        }
    }

    /// CSS class list applied to the display element
    #[must_use]
    pub const fn css_class(&self) -> &'static str {
        match self {
            Self::Normal => "display-text",
            Self::Small => "display-text small",
            Self::Smaller => "display-text smaller",
        }
    }
}

/// Formats a number for the display.
#[must_use]
pub fn format_display(value: f64, config: &DisplayConfig) -> String {
    if value.is_nan() {
        return format_number(value);
    }

    let magnitude = value.abs();
    if magnitude >= config.exponential_threshold {
        trace!(value, "exponential notation");
        exponential(value, config.exponent_fraction_digits.min(MAX_EXPONENT_FRACTION_DIGITS))
    } else if magnitude >= config.grouping_threshold {
        trace!(value, "grouped notation");
        grouped(value, config.max_fraction_digits.min(MAX_GROUPED_FRACTION_DIGITS))
    } else {
        strip_fraction_zeros(format_number(value))
    }
}

/// Renders operand text for the display.
///
/// Text that does not parse is shown verbatim. A comma the user just typed
/// stays visible even though the number it parses to has no fraction.
#[must_use]
pub fn render_display(raw: &str, config: &DisplayConfig) -> String {
    let value = parse_number(raw);
    if value.is_nan() {
        return raw.to_string();
    }

    let mut text = format_display(value, config);
    if value.is_finite() && raw.ends_with(',') && !text.contains(',') {
        text.push(',');
    }
    text
}

fn exponential(value: f64, fraction_digits: usize) -> String {
    if !value.is_finite() {
        return format_number(value);
    }
    let (digits, exponent) = exact_digits(value);
    let keep = fraction_digits + 1;
    let (mut mantissa, exponent) = round_half_up(&digits, exponent, keep);
    mantissa.truncate(keep);

    let mut out = String::with_capacity(keep + 8);
    if value < 0.0 {
        out.push('-');
    }
    push_digits(&mut out, &mantissa[..1]);
    if mantissa.len() > 1 {
        out.push(',');
        push_digits(&mut out, &mantissa[1..]);
    }
    let sign = if exponent < 0 { '-' } else { '+' };
    out.push('e');
    out.push(sign);
    out.push_str(&exponent.unsigned_abs().to_string());
    out
}

fn grouped(value: f64, max_fraction_digits: usize) -> String {
    let (digits, exponent) = exact_digits(value);
    // Significant digits up to the last kept fraction position
    let keep = i64::from(exponent) + 1 + i64::try_from(max_fraction_digits).unwrap_or(0);
    let (rounded, exponent) = match usize::try_from(keep) {
        Ok(keep) => round_half_up(&digits, exponent, keep),
        Err(_) => (Vec::new(), exponent),
    };

    let (int_part, frac_part) = match usize::try_from(exponent) {
        Ok(point) => {
            let split = (point + 1).min(rounded.len());
            let mut int_part = rounded[..split].to_vec();
            int_part.resize(point + 1, 0);
            (int_part, rounded[split..].to_vec())
        }
        Err(_) => {
            let leading = usize::try_from(-i64::from(exponent) - 1).unwrap_or(0);
            let mut frac_part = vec![0; leading];
            frac_part.extend_from_slice(&rounded);
            (vec![0], frac_part)
        }
    };
    let frac_len = frac_part.iter().rposition(|&d| d != 0).map_or(0, |i| i + 1);

    let mut int_text = String::with_capacity(int_part.len());
    push_digits(&mut int_text, &int_part);

    let mut out = String::with_capacity(int_text.len() * 4 / 3 + frac_len + 2);
    if value < 0.0 {
        out.push('-');
    }
    out.push_str(&group_thousands(&int_text));
    if frac_len > 0 {
        out.push(',');
        push_digits(&mut out, &frac_part[..frac_len]);
    }
    out
}

/// Every significant digit of an `f64`, even a subnormal one
const EXACT_PRECISION: usize = 767;

/// Exact decimal expansion of `|value|`: significant digits (trailing zeros
/// dropped) and the power of ten of the first one.
fn exact_digits(value: f64) -> (Vec<u8>, i32) {
    let text = format!("{:.*e}", EXACT_PRECISION, value.abs());
    let (mantissa, exponent) = text.split_once('e').unwrap_or((text.as_str(), "0"));
    let mut digits: Vec<u8> = mantissa
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .collect();
    let len = digits.iter().rposition(|&d| d != 0).map_or(1, |i| i + 1);
    digits.truncate(len);
    (digits, exponent.parse().unwrap_or(0))
}

/// Rounds to `keep` significant digits, ties away from zero.
///
/// A carry out of the leading digit yields `keep + 1` digits and bumps the
/// exponent.
fn round_half_up(digits: &[u8], exponent: i32, keep: usize) -> (Vec<u8>, i32) {
    let mut out: Vec<u8> = digits.iter().copied().take(keep).collect();
    out.resize(keep, 0);
    if !digits.get(keep).is_some_and(|&d| d >= 5) {
        return (out, exponent);
    }

    for d in out.iter_mut().rev() {
        if *d == 9 {
            *d = 0;
        } else {
            *d += 1;
            return (out, exponent);
        }
    }
    out.insert(0, 1);
    (out, exponent + 1)
}

fn push_digits(out: &mut String, digits: &[u8]) {
    out.extend(digits.iter().map(|&d| char::from(b'0' + d)));
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

/// Drops trailing fraction zeros (and a comma left bare by that).
fn strip_fraction_zeros(text: String) -> String {
    if !text.contains(',') || text.contains('e') {
        return text;
    }
    let trimmed = text.trim_end_matches('0');
    if trimmed.len() == text.len() {
        return text;
    }
    trimmed.strip_suffix(',').unwrap_or(trimmed).to_string()
}
