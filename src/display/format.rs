//! Operand formatting with thousands grouping.

use crate::core::parse_float;

/// Format an operand for display.
///
/// The integer part is parsed and grouped by thousands; the fractional part
/// is appended exactly as typed, even when it is still empty. Returns `None`
/// for an empty operand.
///
/// # Example
///
/// ```rust
/// use calcpad::display::format_operand;
///
/// assert_eq!(format_operand("1234.5").as_deref(), Some("1,234.5"));
/// assert_eq!(format_operand("1234567").as_deref(), Some("1,234,567"));
/// assert_eq!(format_operand("12.").as_deref(), Some("12."));
/// assert_eq!(format_operand(""), None);
/// ```
pub fn format_operand(operand: &str) -> Option<String> {
    if operand.is_empty() {
        return None;
    }

    let mut parts = operand.split('.');
    let integer = parts.next().unwrap_or_default();
    let grouped = group_integer(parse_float(integer));

    Some(match parts.next() {
        Some(fraction) => format!("{grouped}.{fraction}"),
        None => grouped,
    })
}

/// Round to an integer and group its digits in threes.
fn group_integer(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let text = if value > 0.0 { "∞" } else { "-∞" };
        return text.to_string();
    }

    let rounded = value.round();
    let sign = if rounded.is_sign_negative() { "-" } else { "" };
    format!("{sign}{}", group_thousands(&integer_digits(rounded.abs())))
}

/// Plain decimal digits of a non-negative integral value.
///
/// Values past `1e21` print in exponent form, so the mantissa digits are
/// padded with zeros out to the exponent.
fn integer_digits(value: f64) -> String {
    let mut buffer = ryu_js::Buffer::new();
    let text = buffer.format(value);
    match text.split_once("e+") {
        None => text.to_string(),
        Some((mantissa, exponent)) => {
            let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
            let width = exponent.parse::<usize>().map_or(digits.len(), |e| e + 1);
            format!("{digits:0<width$}")
        }
    }
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fmt(operand: &str) -> String {
        format_operand(operand).unwrap()
    }

    #[test]
    fn empty_operand_formats_to_nothing() {
        assert_eq!(format_operand(""), None);
    }

    #[test]
    fn groups_integer_part() {
        assert_eq!(fmt("0"), "0");
        assert_eq!(fmt("999"), "999");
        assert_eq!(fmt("1000"), "1,000");
        assert_eq!(fmt("123456789"), "123,456,789");
        assert_eq!(fmt("-1234"), "-1,234");
    }

    #[test]
    fn strips_leading_zeros_from_integer_part() {
        assert_eq!(fmt("007"), "7");
        assert_eq!(fmt("0001234"), "1,234");
    }

    #[test]
    fn fraction_passes_through_verbatim() {
        assert_eq!(fmt("1234.5"), "1,234.5");
        assert_eq!(fmt("0.000100"), "0.000100");
        assert_eq!(fmt("3.14159265358979323846"), "3.14159265358979323846");
        assert_eq!(fmt("5."), "5.");
    }

    #[test]
    fn missing_integer_part_formats_as_nan() {
        assert_eq!(fmt(".5"), "NaN.5");
        assert_eq!(fmt("."), "NaN.");
    }

    #[test]
    fn evaluator_results_format_sensibly() {
        assert_eq!(fmt("Infinity"), "∞");
        assert_eq!(fmt("-Infinity"), "-∞");
        assert_eq!(fmt("NaN"), "NaN");
        assert_eq!(fmt("0.30000000000000004"), "0.30000000000000004");
        assert_eq!(fmt("1e+21"), "1,000,000,000,000,000,000,000");
        assert_eq!(fmt("1.5e+22"), "1.5e+22");
    }

    #[test]
    fn huge_integers_expand_past_exponent_form() {
        assert_eq!(integer_digits(0.0), "0");
        assert_eq!(integer_digits(1e20), "100000000000000000000");
        assert_eq!(group_integer(1.2345e25), "12,345,000,000,000,000,000,000,000");
        assert_eq!(group_integer(-4e21), "-4,000,000,000,000,000,000,000");
    }

    #[test]
    fn group_thousands_handles_short_runs() {
        assert_eq!(group_thousands("1"), "1");
        assert_eq!(group_thousands("12"), "12");
        assert_eq!(group_thousands("1234"), "1,234");
        assert_eq!(group_thousands("123456"), "123,456");
    }
}
