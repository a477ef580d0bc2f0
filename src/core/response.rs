use crate::utils::error::BirthdayError;
use serde::{Deserialize, Serialize};

pub const NEXTBIRTHDAY_EXAMPLE: &str = "/api/nextbirthday?dob=2002-08-14";
pub const AGE_EXAMPLE: &str = "/api/age?dob=1990-05-15";

/// Success payload for `GET /api/nextbirthday`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BirthdaySummary {
    pub input_dob: String,
    pub age_years: i32,
    pub next_birthday_date: String,
    pub next_birthday_day_of_week: String,
    pub days_until_next_birthday: i64,
    pub message: String,
}

/// Success payload for `GET /api/age`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgeSummary {
    pub input_dob: String,
    pub current_date: String,
    pub age_years: i32,
    pub age_months: i32,
    pub age_days: i64,
    pub message: String,
}

/// Error payload shared by both endpoints: a human-readable message plus a
/// canonical usage example.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub example: String,
}

impl ErrorBody {
    pub fn new(error: &BirthdayError, example: &str) -> Self {
        Self {
            error: error.to_string(),
            example: example.to_string(),
        }
    }
}
