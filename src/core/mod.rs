pub mod calculator;
pub mod response;
pub mod validate;

use crate::utils::error::Result;
use chrono::NaiveDate;
use response::{AgeSummary, BirthdaySummary};

/// Validate → compute → format pipeline for the next-birthday endpoint.
///
/// `today` is captured once by the caller and threaded through every
/// calculation, so age, next-birthday and days-until can never disagree
/// about the reference instant.
pub fn birthday_report(raw_dob: Option<&str>, today: NaiveDate) -> Result<BirthdaySummary> {
    let dob = validate::validate_dob(raw_dob, today)?;

    let age_years = calculator::age_in_years(dob.date, today);
    let next = calculator::next_birthday(dob.date, today);
    let days_until = calculator::days_until(today, next);

    Ok(BirthdaySummary {
        input_dob: dob.input,
        age_years,
        next_birthday_date: next.format("%Y-%m-%d").to_string(),
        next_birthday_day_of_week: calculator::day_of_week(next),
        days_until_next_birthday: days_until,
        message: calculator::birthday_message(days_until),
    })
}

/// Validate → compute → format pipeline for the age endpoint.
pub fn age_report(raw_dob: Option<&str>, today: NaiveDate) -> Result<AgeSummary> {
    let dob = validate::validate_dob(raw_dob, today)?;

    let age_years = calculator::age_in_years(dob.date, today);

    Ok(AgeSummary {
        input_dob: dob.input,
        current_date: today.format("%Y-%m-%d").to_string(),
        age_years,
        age_months: calculator::age_in_months(dob.date, today),
        age_days: calculator::age_in_days(dob.date, today),
        message: format!("You are {} years old!", age_years),
    })
}
