// Brazilian number handling for form values: comma decimal separator,
// optional dot thousands separators, "R$" currency marker.
use std::str::FromStr;

pub const CURRENCY_MARKER: &str = "R$";

/// Anything a form field can hand us: typed text, an already numeric value,
/// or nothing at all (field absent / not yet rendered).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawAmount<'a> {
    Text(&'a str),
    Number(f64),
    Missing,
}

impl<'a> From<&'a str> for RawAmount<'a> {
    fn from(s: &'a str) -> Self {
        RawAmount::Text(s)
    }
}

impl<'a> From<&'a String> for RawAmount<'a> {
    fn from(s: &'a String) -> Self {
        RawAmount::Text(s.as_str())
    }
}

impl From<f64> for RawAmount<'_> {
    fn from(n: f64) -> Self {
        RawAmount::Number(n)
    }
}

impl<'a, T: Into<RawAmount<'a>>> From<Option<T>> for RawAmount<'a> {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(RawAmount::Missing)
    }
}

// Turns "1.234,56" / "1234,56" / "1234.56" into "1234.56".
// When a comma is present it is the decimal separator and every dot is a
// thousands separator; without a comma a dot is the decimal separator.
fn normalize(s: &str) -> String {
    let mut body = s.trim();
    let negative = body.starts_with('-');
    if negative {
        body = body[1..].trim_start();
    }
    if let Some(rest) = body.strip_prefix(CURRENCY_MARKER) {
        body = rest.trim_start();
    }

    let digits = if body.contains(',') {
        body.replace('.', "").replace(',', ".")
    } else {
        body.to_string()
    };

    if negative {
        format!("-{}", digits)
    } else {
        digits
    }
}

/// Parses a user-entered amount. Never fails: empty, missing, malformed and
/// non-finite input all yield `0.0`, since the form is routinely half-filled.
pub fn parse_amount<'a>(raw: impl Into<RawAmount<'a>>) -> f64 {
    let value = match raw.into() {
        RawAmount::Number(n) => n,
        RawAmount::Missing => return 0.0,
        RawAmount::Text(s) => match f64::from_str(&normalize(s)) {
            Ok(n) => n,
            Err(_) => return 0.0,
        },
    };
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Rewrites a money field the way it will be counted, so "1.000" shows up
/// as "1,00" as soon as the user leaves the field. Empty stays empty and
/// negative entries become "0,00".
pub fn tidy_amount_input(raw: &str) -> String {
    if raw.trim().is_empty() {
        return String::new();
    }
    format_amount(parse_amount(raw).max(0.0))
}

/// Two decimals, comma separator: `1234.5` -> `"1234,50"`.
pub fn format_amount(value: f64) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    let formatted = format!("{:.2}", value);
    // "-0.00" for tiny negatives and negative zero
    let formatted = if formatted == "-0.00" { "0.00".to_string() } else { formatted };
    formatted.replace('.', ",")
}

/// `1234.5` -> `"R$ 1234,50"`, `-600.0` -> `"-R$ 600,00"`.
pub fn format_currency(value: f64) -> String {
    let amount = format_amount(value);
    match amount.strip_prefix('-') {
        Some(magnitude) => format!("-{} {}", CURRENCY_MARKER, magnitude),
        None => format!("{} {}", CURRENCY_MARKER, amount),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount_simple() {
        assert_eq!(parse_amount("123,45"), 123.45);
        assert_eq!(parse_amount("1000"), 1000.0);
    }

    #[test]
    fn test_parse_amount_either_separator() {
        for (comma, dot) in [("12,5", "12.5"), ("0,99", "0.99"), ("847,14", "847.14"), ("-3,2", "-3.2")] {
            assert_eq!(parse_amount(comma), parse_amount(dot), "{} vs {}", comma, dot);
        }
    }

    #[test]
    fn test_parse_amount_with_thousands() {
        assert_eq!(parse_amount("1.234,56"), 1234.56);
        assert_eq!(parse_amount("600.822.115,84"), 600822115.84);
    }

    #[test]
    fn test_parse_amount_currency_marker_and_whitespace() {
        assert_eq!(parse_amount("  R$ 1.500,00 "), 1500.0);
        assert_eq!(parse_amount("-R$ 600,00"), -600.0);
    }

    #[test]
    fn test_parse_amount_garbage_is_zero() {
        assert_eq!(parse_amount(""), 0.0);
        assert_eq!(parse_amount("   "), 0.0);
        assert_eq!(parse_amount("abc"), 0.0);
        assert_eq!(parse_amount("12,3,4"), 0.0);
        assert_eq!(parse_amount("R$"), 0.0);
        assert_eq!(parse_amount("NaN"), 0.0);
        assert_eq!(parse_amount("inf"), 0.0);
    }

    #[test]
    fn test_parse_amount_missing_and_numbers() {
        assert_eq!(parse_amount(None::<&str>), 0.0);
        assert_eq!(parse_amount(Some("10,5")), 10.5);
        assert_eq!(parse_amount(RawAmount::Missing), 0.0);
        assert_eq!(parse_amount(42.25), 42.25);
        assert_eq!(parse_amount(f64::NAN), 0.0);
        assert_eq!(parse_amount(f64::INFINITY), 0.0);
    }

    #[test]
    fn test_dot_only_is_decimal_point() {
        assert_eq!(parse_amount("1.000"), 1.0);
        assert_eq!(parse_amount("1.000,00"), 1000.0);
    }

    #[test]
    fn test_tidy_amount_input() {
        assert_eq!(tidy_amount_input("1.000"), "1,00");
        assert_eq!(tidy_amount_input("1.000,5"), "1000,50");
        assert_eq!(tidy_amount_input("R$ 20"), "20,00");
        assert_eq!(tidy_amount_input("-500"), "0,00");
        assert_eq!(tidy_amount_input("abc"), "0,00");
        assert_eq!(tidy_amount_input("  "), "");
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(0.0), "0,00");
        assert_eq!(format_amount(1234.5), "1234,50");
        assert_eq!(format_amount(-600.0), "-600,00");
        assert_eq!(format_amount(-0.0), "0,00");
        assert_eq!(format_amount(f64::NAN), "0,00");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(1234.5), "R$ 1234,50");
        assert_eq!(format_currency(-600.0), "-R$ 600,00");
        assert_eq!(format_currency(0.0), "R$ 0,00");
    }

    #[test]
    fn test_format_then_parse_keeps_value() {
        for x in [0.0, 0.1, 1.005, 99.99, 1234.5, -600.0, 847.14, 123456.789] {
            let rounded = (x * 100.0_f64).round() / 100.0;
            assert!((parse_amount(format_amount(x).as_str()) - rounded).abs() < 0.005 + 1e-9, "format_amount({})", x);
            assert!((parse_amount(format_currency(x).as_str()) - rounded).abs() < 0.005 + 1e-9, "format_currency({})", x);
        }
    }
}
