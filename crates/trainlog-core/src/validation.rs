//! Parsing and validation of prompt answers.
//!
//! Every function here takes the raw line the user typed; callers reprompt on `Err`.

use crate::error::{Result, TrainlogError};
use chrono::NaiveDate;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

fn invalid(field: &str, reason: impl Into<String>) -> TrainlogError {
    TrainlogError::InvalidInput { field: field.to_string(), reason: reason.into() }
}

/// Athlete name, surrounding whitespace removed
pub fn parse_name(input: &str) -> Result<String> {
    let name = input.trim();
    if name.is_empty() {
        return Err(invalid("name", "name must not be empty"));
    }
    Ok(name.to_string())
}

/// Calendar date in `YYYY-MM-DD` form, normalized to zero-padded month and day
pub fn parse_date(input: &str) -> Result<String> {
    let date = NaiveDate::parse_from_str(input.trim(), DATE_FORMAT)
        .map_err(|e| invalid("date", format!("expected YYYY-MM-DD ({})", e)))?;
    Ok(date.format(DATE_FORMAT).to_string())
}

/// Non-negative distance in km
pub fn parse_distance(input: &str) -> Result<f64> {
    parse_non_negative("distance", input)
}

/// Strictly positive count of sets or reps
pub fn parse_count(field: &str, input: &str) -> Result<u32> {
    let count: u32 = input
        .trim()
        .parse()
        .map_err(|_| invalid(field, format!("'{}' is not a whole number", input.trim())))?;
    if count == 0 {
        return Err(invalid(field, "must be greater than zero"));
    }
    Ok(count)
}

/// Optional non-negative weight in kg; an empty answer means bodyweight
pub fn parse_weight(input: &str) -> Result<Option<f64>> {
    if input.trim().is_empty() {
        return Ok(None);
    }
    parse_non_negative("weight", input).map(Some)
}

/// `t` (taip) answers yes, anything else answers no
pub fn parse_yes(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case("t")
}

fn parse_non_negative(field: &str, input: &str) -> Result<f64> {
    let value: f64 = input
        .trim()
        .parse()
        .map_err(|_| invalid(field, format!("'{}' is not a number", input.trim())))?;
    if !value.is_finite() || value < 0.0 {
        return Err(invalid(field, "must be a finite number of at least zero"));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_name() {
        assert_eq!(parse_name("  Ana ").unwrap(), "Ana");
        assert!(parse_name("   ").is_err());
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("2025-05-01").unwrap(), "2025-05-01");
        assert_eq!(parse_date(" 2025-05-01\n").unwrap(), "2025-05-01");
        assert!(parse_date("2025-13-01").is_err());
        assert!(parse_date("2025-02-30").is_err());
        assert!(parse_date("01/05/2025").is_err());
        assert!(parse_date("").is_err());
    }

    #[test]
    fn test_parse_distance() {
        assert_eq!(parse_distance("5").unwrap(), 5.0);
        assert_eq!(parse_distance("5.25").unwrap(), 5.25);
        assert_eq!(parse_distance("0").unwrap(), 0.0);
        assert!(parse_distance("-1").is_err());
        assert!(parse_distance("five").is_err());
        assert!(parse_distance("inf").is_err());
        assert!(parse_distance("NaN").is_err());
    }

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count("sets", "4").unwrap(), 4);
        assert!(parse_count("sets", "0").is_err());
        assert!(parse_count("reps", "-3").is_err());
        assert!(parse_count("reps", "2.5").is_err());
    }

    #[test]
    fn test_parse_weight() {
        assert_eq!(parse_weight("").unwrap(), None);
        assert_eq!(parse_weight("   ").unwrap(), None);
        assert_eq!(parse_weight("60").unwrap(), Some(60.0));
        assert!(parse_weight("-5").is_err());
        assert!(parse_weight("heavy").is_err());
    }

    #[test]
    fn test_parse_yes() {
        assert!(parse_yes("t"));
        assert!(parse_yes(" T "));
        assert!(!parse_yes("n"));
        assert!(!parse_yes(""));
        assert!(!parse_yes("taip"));
    }
}
