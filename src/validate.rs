//! Field validators - turn trimmed user input into checked values

use chrono::{NaiveDate, NaiveTime};

use crate::error::ValidationError;
use crate::workout::WorkoutType;

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M";

pub fn validate_customer_id(value: &str) -> Result<String, ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::EmptyCustomerId);
    }
    Ok(value.to_string())
}

pub fn validate_type(value: &str) -> Result<WorkoutType, ValidationError> {
    value.parse()
}

/// `YYYY-MM-DD`, a real calendar date (leap years included)
pub fn validate_date(value: &str) -> Result<NaiveDate, ValidationError> {
    let invalid = || ValidationError::InvalidFormat {
        field: "date",
        value: value.to_string(),
        expected: "YYYY-MM-DD",
    };

    // chrono accepts unpadded fields, so pin the shape first
    if !has_shape(value, &[4, 2, 2], b'-') {
        return Err(invalid());
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| invalid())
}

/// `HH:MM` on a 24-hour clock
pub fn validate_time(value: &str) -> Result<NaiveTime, ValidationError> {
    let invalid = || ValidationError::InvalidFormat {
        field: "time",
        value: value.to_string(),
        expected: "HH:MM",
    };

    if !has_shape(value, &[2, 2], b':') {
        return Err(invalid());
    }
    NaiveTime::parse_from_str(value, TIME_FORMAT).map_err(|_| invalid())
}

/// Minutes; any integer is accepted, including zero and negatives
pub fn validate_duration(value: &str) -> Result<i64, ValidationError> {
    parse_int("duration", value)
}

/// Metres; must be strictly positive
pub fn validate_distance(value: &str) -> Result<i64, ValidationError> {
    let distance = parse_int("distance", value)?;
    if distance <= 0 {
        return Err(ValidationError::NonPositive {
            field: "distance",
            value: distance,
        });
    }
    Ok(distance)
}

fn parse_int(field: &'static str, value: &str) -> Result<i64, ValidationError> {
    value.parse::<i64>().map_err(|_| ValidationError::NotANumber {
        field,
        value: value.to_string(),
    })
}

/// Digit groups of exactly the given widths, joined by `sep`
fn has_shape(value: &str, widths: &[usize], sep: u8) -> bool {
    let groups: Vec<&[u8]> = value.as_bytes().split(|b| *b == sep).collect();
    groups.len() == widths.len()
        && groups
            .iter()
            .zip(widths)
            .all(|(group, width)| group.len() == *width && group.iter().all(u8::is_ascii_digit))
}
