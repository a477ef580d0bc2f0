use crate::utils::error::{BirthdayError, Result};
use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

static ISO_DATE_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap());

/// A validated date of birth, keeping the raw input string for echoing back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateOfBirth {
    pub input: String,
    pub date: NaiveDate,
}

/// Validates the raw `dob` query value against a reference date.
///
/// Rules, checked in order:
/// - the parameter must be present and non-empty
/// - it must match the strict `YYYY-MM-DD` shape and name a real calendar
///   date (2023-02-30 is rejected)
/// - it must not be after `today`
pub fn validate_dob(raw: Option<&str>, today: NaiveDate) -> Result<DateOfBirth> {
    let raw = match raw {
        Some(value) if !value.is_empty() => value,
        _ => return Err(BirthdayError::MissingParameter),
    };

    if !ISO_DATE_SHAPE.is_match(raw) {
        return Err(BirthdayError::InvalidFormat);
    }

    // The regex pins the shape; chrono rejects impossible dates.
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| BirthdayError::InvalidFormat)?;

    if date > today {
        return Err(BirthdayError::FutureDate);
    }

    Ok(DateOfBirth {
        input: raw.to_string(),
        date,
    })
}
