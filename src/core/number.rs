//! Conversions between operand text and floating-point values.
//!
//! Operands are parsed leniently (longest numeric prefix wins) and results
//! are printed through `ryu_js` with the shortest digits that round-trip,
//! switching to exponent notation outside `1e-7 < |x| < 1e21`.

/// Parse the longest numeric prefix of `text`.
///
/// Accepts leading whitespace, an optional sign, `Infinity`, digits with at
/// most one decimal point, and an optional exponent. Returns NaN when the
/// text does not start with a number.
///
/// # Example
///
/// ```rust
/// use calcpad::core::parse_float;
///
/// assert_eq!(parse_float("12.5"), 12.5);
/// assert_eq!(parse_float("5."), 5.0);
/// assert_eq!(parse_float(".5"), 0.5);
/// assert_eq!(parse_float("3abc"), 3.0);
/// assert!(parse_float(".").is_nan());
/// assert!(parse_float("").is_nan());
/// ```
pub fn parse_float(text: &str) -> f64 {
    let text = text.trim_start();
    let (negative, unsigned) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let magnitude = if unsigned.starts_with("Infinity") {
        f64::INFINITY
    } else {
        match numeric_prefix(unsigned) {
            Some(literal) => literal.parse().unwrap_or(f64::NAN),
            None => return f64::NAN,
        }
    };

    if negative {
        -magnitude
    } else {
        magnitude
    }
}

/// Rewrite the numeric prefix of `text` as `<int>.<frac>e<exp>`.
fn numeric_prefix(text: &str) -> Option<String> {
    let bytes = text.as_bytes();
    let digits_end = |start: usize| {
        start
            + bytes[start..]
                .iter()
                .take_while(|b| b.is_ascii_digit())
                .count()
    };

    let integer_end = digits_end(0);
    let integer = &text[..integer_end];
    let mut end = integer_end;
    let mut fraction = "";
    if bytes.get(end) == Some(&b'.') {
        let fraction_end = digits_end(end + 1);
        fraction = &text[end + 1..fraction_end];
        end = fraction_end;
    }
    if integer.is_empty() && fraction.is_empty() {
        return None;
    }

    let mut exponent = "0";
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let sign_len = usize::from(matches!(bytes.get(end + 1), Some(b'+' | b'-')));
        let exponent_start = end + 1 + sign_len;
        let exponent_end = digits_end(exponent_start);
        if exponent_end > exponent_start {
            exponent = &text[end + 1..exponent_end];
        }
    }

    Some(format!(
        "{}.{}e{}",
        or_zero(integer),
        or_zero(fraction),
        exponent
    ))
}

fn or_zero(digits: &str) -> &str {
    if digits.is_empty() {
        "0"
    } else {
        digits
    }
}

/// Print `value` in its default decimal form.
///
/// # Example
///
/// ```rust
/// use calcpad::core::number_to_string;
///
/// assert_eq!(number_to_string(14.0), "14");
/// assert_eq!(number_to_string(0.1 + 0.2), "0.30000000000000004");
/// assert_eq!(number_to_string(1e21), "1e+21");
/// assert_eq!(number_to_string(f64::INFINITY), "Infinity");
/// ```
pub fn number_to_string(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    ryu_js::Buffer::new().format(value).to_string()
}
