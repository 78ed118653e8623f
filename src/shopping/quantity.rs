use crate::models::api::Quantity;

/// Numeric value of a recipe quantity, `0.0` when nothing can be read
///
/// Never fails: a malformed quantity contributes nothing instead of blocking
/// the rest of the list.
pub fn parse_quantity(quantity: &Quantity) -> f64 {
    match quantity {
        Quantity::Amount(amount) if amount.is_nan() => 0.0,
        Quantity::Amount(amount) => *amount,
        Quantity::Text(text) => parse_quantity_str(text),
    }
}

/// Numeric value of a written quantity such as `"2"`, `"0.5"` or `"1/2"`
///
/// Only the first two `/`-separated pieces matter. A denominator that is
/// missing, unreadable or zero counts as 1. Results that are not a number,
/// such as `"Infinity/Infinity"`, read as 0.
pub fn parse_quantity_str(text: &str) -> f64 {
    if text.is_empty() {
        return 0.0;
    }

    match text.split_once('/') {
        Some((numerator, denominator)) => {
            let Some(numerator) = leading_number(numerator) else {
                return 0.0;
            };
            let denominator = leading_number(denominator)
                .filter(|d| *d != 0.0)
                .unwrap_or(1.0);
            let value = numerator / denominator;
            if value.is_nan() { 0.0 } else { value }
        }
        None => leading_number(text).unwrap_or(0.0),
    }
}

/// Longest decimal number at the start of `input`, after leading whitespace
///
/// Trailing garbage is ignored, so `"2 cups"` reads as `2.0`.
fn leading_number(input: &str) -> Option<f64> {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    let negative = bytes.first() == Some(&b'-');
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    if s[end..].starts_with("Infinity") {
        return Some(if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut mantissa_digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        mantissa_digits += frac_end - frac_start;
        if mantissa_digits > 0 {
            end = frac_end;
        }
    }

    if mantissa_digits == 0 {
        return None;
    }

    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits {
            end = exp_end;
        }
    }

    s[..end].parse().ok()
}
