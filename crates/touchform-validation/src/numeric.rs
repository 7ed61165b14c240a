//! Whole-number validation for numeric fields

use alloc::format;
use alloc::string::{String, ToString};
use core::num::IntErrorKind;

/// Label for input that is not a whole number at all.
pub const NOT_A_WHOLE_NUMBER: &str = "Must be a whole number";

/// Raw field input read as a whole number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WholeNumber {
    Value(i64),
    /// All digits, but above `i64::MAX`.
    TooLarge,
    /// All digits, but below `i64::MIN`.
    TooSmall,
}

/// Parses a whole number from raw field input, ignoring surrounding whitespace.
///
/// A leading `+` or `-` is accepted. Returns `None` when the input is empty or
/// contains anything other than digits.
pub fn parse_whole_number(raw: &str) -> Option<WholeNumber> {
    let trimmed = raw.trim();
    match trimmed.parse::<i64>() {
        Ok(n) => Some(WholeNumber::Value(n)),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Some(WholeNumber::TooLarge),
            IntErrorKind::NegOverflow => Some(WholeNumber::TooSmall),
            _ => None,
        },
    }
}

/// Label for a value outside the inclusive bounds `[min, max]`.
fn bounds_label(min: Option<i64>, max: Option<i64>) -> String {
    match (min, max) {
        (Some(min), Some(max)) => format!("Must be between {} and {}", min, max),
        (Some(min), None) => format!("Must be at least {}", min),
        (None, Some(max)) => format!("Must be at most {}", max),
        (None, None) => NOT_A_WHOLE_NUMBER.to_string(),
    }
}

/// Checks raw input against optional inclusive bounds.
///
/// Input too long for `i64` is reported against the bound it overshoots, or
/// against the `i64` limit when that side is unbounded.
pub fn validate_whole_number(
    raw: &str,
    min: Option<i64>,
    max: Option<i64>,
) -> Result<i64, String> {
    match parse_whole_number(raw) {
        None => Err(NOT_A_WHOLE_NUMBER.to_string()),
        Some(WholeNumber::TooLarge) => Err(bounds_label(min, max.or(Some(i64::MAX)))),
        Some(WholeNumber::TooSmall) => Err(bounds_label(min.or(Some(i64::MIN)), max)),
        Some(WholeNumber::Value(n)) => {
            let below = min.is_some_and(|min| n < min);
            let above = max.is_some_and(|max| n > max);
            if below || above {
                Err(bounds_label(min, max))
            } else {
                Ok(n)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1990", Some(WholeNumber::Value(1990)))]
    #[case("  2001 ", Some(WholeNumber::Value(2001)))]
    #[case("-5", Some(WholeNumber::Value(-5)))]
    #[case("+7", Some(WholeNumber::Value(7)))]
    #[case("99999999999999999999", Some(WholeNumber::TooLarge))]
    #[case("-99999999999999999999", Some(WholeNumber::TooSmall))]
    #[case("", None)]
    #[case("   ", None)]
    #[case("19a0", None)]
    #[case("19.5", None)]
    fn test_parse_whole_number(#[case] raw: &str, #[case] expected: Option<WholeNumber>) {
        assert_eq!(parse_whole_number(raw), expected);
    }

    #[rstest]
    #[case("1900", Ok(1900))]
    #[case("2019", Ok(2019))]
    #[case("1899", Err("Must be between 1900 and 2019"))]
    #[case("2020", Err("Must be between 1900 and 2019"))]
    #[case("99999999999999999999", Err("Must be between 1900 and 2019"))]
    #[case("-99999999999999999999", Err("Must be between 1900 and 2019"))]
    #[case("year", Err(NOT_A_WHOLE_NUMBER))]
    fn test_bounded_range_is_inclusive(#[case] raw: &str, #[case] expected: Result<i64, &str>) {
        assert_eq!(
            validate_whole_number(raw, Some(1900), Some(2019)),
            expected.map_err(String::from)
        );
    }

    #[test]
    fn test_half_bounded() {
        assert_eq!(validate_whole_number("3", Some(5), None), Err("Must be at least 5".into()));
        assert_eq!(validate_whole_number("15", None, Some(10)), Err("Must be at most 10".into()));
        assert_eq!(validate_whole_number("10", None, Some(10)), Ok(10));
    }

    #[test]
    fn test_overflow_against_unbounded_side() {
        assert_eq!(
            validate_whole_number("99999999999999999999", Some(0), None),
            Err(format!("Must be between 0 and {}", i64::MAX))
        );
        assert_eq!(
            validate_whole_number("99999999999999999999", None, None),
            Err(format!("Must be at most {}", i64::MAX))
        );
        assert_eq!(
            validate_whole_number("-99999999999999999999", None, None),
            Err(format!("Must be at least {}", i64::MIN))
        );
    }
}
