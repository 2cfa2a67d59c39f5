//! Operand parsing and result formatting.
//!
//! Operands live as text; arithmetic happens in `f64`. Results are printed
//! the way a JavaScript `Number` prints itself, so `9 / 0` shows
//! `Infinity` and `0 / 0` shows `NaN`.

/// Magnitudes at or above this switch to exponent notation.
const EXPONENT_UPPER: f64 = 1e21;
/// Magnitudes below this (and non-zero) switch to exponent notation.
const EXPONENT_LOWER: f64 = 1e-6;

/// Parse operand text from its longest numeric prefix, so an edited
/// result such as `1e+22.` or `Infinity.` keeps its value. Text with no
/// numeric prefix (empty string, lone `-`, `-.`, `NaN`) yields NaN.
pub fn parse_operand(text: &str) -> f64 {
    let text = text.trim_start();
    let bytes = text.as_bytes();

    let sign_len = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    if text[sign_len..].starts_with("Infinity") {
        return if text.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_digits = leading_digits(&bytes[sign_len..]);
    let mut end = sign_len + int_digits;
    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = leading_digits(&bytes[end + 1..]);
        end += 1 + frac_digits;
    }
    if int_digits + frac_digits == 0 {
        return f64::NAN;
    }

    // An exponent only counts when at least one digit follows it.
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_start = end + 1;
        if matches!(bytes.get(exp_start), Some(b'+' | b'-')) {
            exp_start += 1;
        }
        let exp_digits = leading_digits(bytes.get(exp_start..).unwrap_or_default());
        if exp_digits > 0 {
            end = exp_start + exp_digits;
        }
    }

    text[..end].parse::<f64>().unwrap_or(f64::NAN)
}

fn leading_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|byte| byte.is_ascii_digit()).count()
}

/// Format a result for the display.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        // Covers -0 as well.
        return "0".to_string();
    }

    let magnitude = value.abs();
    if magnitude >= EXPONENT_UPPER || magnitude < EXPONENT_LOWER {
        return exponent_form(value);
    }
    value.to_string()
}

fn exponent_form(value: f64) -> String {
    let formatted = format!("{:e}", value);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => formatted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_have_no_fraction() {
        assert_eq!(format_number(8.0), "8");
        assert_eq!(format_number(-42.0), "-42");
        assert_eq!(format_number(1e20), "100000000000000000000");
    }

    #[test]
    fn fractions_use_shortest_round_trip_digits() {
        assert_eq!(format_number(0.5), "0.5");
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_number(0.000001), "0.000001");
    }

    #[test]
    fn special_values_use_their_names() {
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn extreme_magnitudes_use_exponent_notation() {
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(-2.5e30), "-2.5e+30");
        assert_eq!(format_number(1.5e-7), "1.5e-7");
    }

    #[test]
    fn parse_accepts_partial_decimals() {
        assert_eq!(parse_operand("0."), 0.0);
        assert_eq!(parse_operand("-12.5"), -12.5);
        assert_eq!(parse_operand("Infinity"), f64::INFINITY);
        assert_eq!(parse_operand("-Infinity"), f64::NEG_INFINITY);
    }

    #[test]
    fn parse_reads_longest_numeric_prefix() {
        assert_eq!(parse_operand("1e+22."), 1e22);
        assert_eq!(parse_operand("-1e+22."), -1e22);
        assert_eq!(parse_operand("1e-8."), 1e-8);
        assert_eq!(parse_operand("1e+225"), 1e225);
        assert_eq!(parse_operand("Infinity."), f64::INFINITY);
        assert_eq!(parse_operand("-Infinity."), f64::NEG_INFINITY);
        assert_eq!(parse_operand(".5"), 0.5);
        // A dangling exponent marker is not part of the number.
        assert_eq!(parse_operand("12e"), 12.0);
        assert_eq!(parse_operand("12e+"), 12.0);
    }

    #[test]
    fn parse_rejects_incomplete_text() {
        assert!(parse_operand("").is_nan());
        assert!(parse_operand("-").is_nan());
        assert!(parse_operand("-.").is_nan());
        assert!(parse_operand("NaN").is_nan());
        assert!(parse_operand("-NaN").is_nan());
        assert!(parse_operand(".").is_nan());
        assert!(parse_operand("inf").is_nan());
    }
}
