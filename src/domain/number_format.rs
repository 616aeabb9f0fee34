//! Decimal-string formatting for prices and volumes shown in the tooltip and footer.

use std::str::FromStr;

use bigdecimal::BigDecimal;
pub use bigdecimal::RoundingMode;
use num_traits::{Signed, Zero};

/// Output for missing or unparseable values.
pub const PLACEHOLDER: &str = "--";

/// Formatting options. Defaults: natural precision, no sign, grouped thousands, floor rounding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberFormat {
    pub decimal_places: Option<u32>,
    pub show_sign: bool,
    pub prefix: String,
    pub suffix: String,
    pub show_thousand_separator: bool,
    pub rounding_mode: RoundingMode,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self {
            decimal_places: None,
            show_sign: false,
            prefix: String::new(),
            suffix: String::new(),
            show_thousand_separator: true,
            rounding_mode: RoundingMode::Floor,
        }
    }
}

impl NumberFormat {
    pub fn decimals(mut self, places: u32) -> Self {
        self.decimal_places = Some(places);
        self
    }

    pub fn signed(mut self) -> Self {
        self.show_sign = true;
        self
    }

    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    pub fn without_separator(mut self) -> Self {
        self.show_thousand_separator = false;
        self
    }

    pub fn rounding(mut self, mode: RoundingMode) -> Self {
        self.rounding_mode = mode;
        self
    }

    /// `$` prefix, 2 decimals
    pub fn price() -> Self {
        Self::default().prefix("$").decimals(2)
    }

    /// 4 decimals
    pub fn volume() -> Self {
        Self::default().decimals(4)
    }
}

/// Anything the formatter accepts.
#[derive(Debug, Clone, Copy)]
pub enum NumericInput<'a> {
    Missing,
    Text(&'a str),
    Number(f64),
    Decimal(&'a BigDecimal),
}

impl<'a> From<&'a str> for NumericInput<'a> {
    fn from(value: &'a str) -> Self {
        NumericInput::Text(value)
    }
}

impl<'a> From<&'a String> for NumericInput<'a> {
    fn from(value: &'a String) -> Self {
        NumericInput::Text(value.as_str())
    }
}

impl From<f64> for NumericInput<'_> {
    fn from(value: f64) -> Self {
        NumericInput::Number(value)
    }
}

impl<'a> From<&'a BigDecimal> for NumericInput<'a> {
    fn from(value: &'a BigDecimal) -> Self {
        NumericInput::Decimal(value)
    }
}

impl<'a, T: Into<NumericInput<'a>>> From<Option<T>> for NumericInput<'a> {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(NumericInput::Missing)
    }
}

/// Longest integer part a parsed value may have.
pub const MAX_INTEGER_DIGITS: i64 = 64;
/// Longest fractional part a parsed value may have.
pub const MAX_FRACTION_DIGITS: i64 = 64;

/// Whether `value` fits the digit bounds. Exponent notation can encode a huge scale in a few bytes.
pub fn within_digit_bounds(value: &BigDecimal) -> bool {
    let (_, scale) = value.as_bigint_and_exponent();
    let integer_digits = value.digits() as i64 - scale;
    scale <= MAX_FRACTION_DIGITS && integer_digits <= MAX_INTEGER_DIGITS
}

/// Parse a decimal string, ignoring commas and whitespace.
///
/// `None` when empty, not numeric, or outside [`MAX_INTEGER_DIGITS`] / [`MAX_FRACTION_DIGITS`].
pub fn parse_decimal(text: &str) -> Option<BigDecimal> {
    let cleaned: String = text.chars().filter(|c| *c != ',' && !c.is_whitespace()).collect();
    if cleaned.is_empty() {
        return None;
    }
    BigDecimal::from_str(&cleaned).ok().filter(within_digit_bounds)
}

fn to_decimal(input: NumericInput<'_>) -> Option<BigDecimal> {
    match input {
        NumericInput::Missing => None,
        NumericInput::Text(text) => parse_decimal(text),
        // Shortest round-trip representation, never exponent notation.
        NumericInput::Number(value) if value.is_finite() => parse_decimal(&value.to_string()),
        NumericInput::Number(_) => None,
        NumericInput::Decimal(value) => within_digit_bounds(value).then(|| value.clone()),
    }
}

fn group_thousands(integer: &str) -> String {
    let len = integer.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in integer.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Format `value` for display. Unparseable input yields [`PLACEHOLDER`].
pub fn format_number<'a>(value: impl Into<NumericInput<'a>>, options: &NumberFormat) -> String {
    let Some(number) = to_decimal(value.into()) else {
        return PLACEHOLDER.to_string();
    };

    let digits = match options.decimal_places {
        Some(places) => number.with_scale_round(i64::from(places), options.rounding_mode).to_plain_string(),
        None => number.normalized().to_plain_string(),
    };

    let (negative, unsigned) = match digits.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, digits.as_str()),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (unsigned, None),
    };

    let integer = if options.show_thousand_separator { group_thousands(integer) } else { integer.to_string() };

    let sign = if negative {
        "-"
    } else if options.show_sign && !number.is_zero() && number.is_positive() {
        "+"
    } else {
        ""
    };

    match fraction {
        Some(fraction) if !fraction.is_empty() => {
            format!("{}{}{}.{}{}", options.prefix, sign, integer, fraction, options.suffix)
        }
        _ => format!("{}{}{}{}", options.prefix, sign, integer, options.suffix),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floor_rounding_truncates_toward_negative_infinity() {
        let two = NumberFormat::default().decimals(2);
        assert_eq!(format_number(1234.56789, &two), "1,234.56");
        assert_eq!(format_number(-1234.561, &two), "-1,234.57");
    }

    #[test]
    fn missing_and_garbage_yield_placeholder() {
        let opts = NumberFormat::default();
        assert_eq!(format_number(None::<&str>, &opts), PLACEHOLDER);
        assert_eq!(format_number("", &opts), PLACEHOLDER);
        assert_eq!(format_number("   ", &opts), PLACEHOLDER);
        assert_eq!(format_number("12abc", &opts), PLACEHOLDER);
        assert_eq!(format_number(f64::NAN, &opts), PLACEHOLDER);
        assert_eq!(format_number(f64::INFINITY, &opts), PLACEHOLDER);
    }

    #[test]
    fn group_thousands_from_the_right() {
        assert_eq!(group_thousands("1"), "1");
        assert_eq!(group_thousands("123"), "123");
        assert_eq!(group_thousands("1234"), "1,234");
        assert_eq!(group_thousands("1234567"), "1,234,567");
    }

    #[test]
    fn oversized_exponents_yield_placeholder() {
        let opts = NumberFormat::volume();
        assert_eq!(format_number("1e2000000", &opts), PLACEHOLDER);
        assert_eq!(format_number("1e-2000000", &opts), PLACEHOLDER);
        assert_eq!(format_number(&BigDecimal::new(1.into(), -100), &opts), PLACEHOLDER);
        assert_eq!(format_number("1e3", &opts), "1,000.0000");
    }

    #[test]
    fn digit_bounds_are_inclusive() {
        let widest_integer = "9".repeat(MAX_INTEGER_DIGITS as usize);
        let widest_fraction = format!("0.{}", "1".repeat(MAX_FRACTION_DIGITS as usize));
        assert!(parse_decimal(&widest_integer).is_some());
        assert!(parse_decimal(&widest_fraction).is_some());
        assert!(parse_decimal(&format!("{}9", widest_integer)).is_none());
        assert!(parse_decimal(&format!("{}1", widest_fraction)).is_none());
    }

    #[test]
    fn commas_in_text_input_are_ignored() {
        assert_eq!(format_number("1,234.56789", &NumberFormat::default().decimals(2)), "1,234.56");
    }
}
