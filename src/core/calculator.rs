//! Calendar arithmetic for birthday countdowns.
//!
//! Everything here is a pure function over `chrono::NaiveDate`. The reference
//! "today" is always an explicit parameter so tests can pin it to arbitrary
//! dates instead of reading the system clock.

use chrono::{Datelike, NaiveDate};

/// Gregorian leap-year rule: divisible by 4, except centuries unless
/// divisible by 400.
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// The birthday's occurrence in `year`.
///
/// A Feb 29 birth date falls back to Feb 28 when `year` is not a leap year.
/// The substitution is decided per target year, so the same person can get
/// Feb 28 one year and Feb 29 the next.
pub fn birthday_in_year(dob: NaiveDate, year: i32) -> NaiveDate {
    let day = if dob.month() == 2 && dob.day() == 29 && !is_leap_year(year) {
        28
    } else {
        dob.day()
    };

    // Every remaining (month, day) pair of a valid birth date exists in every
    // year, so this lookup cannot fail; the fallback keeps the function total.
    NaiveDate::from_ymd_opt(year, dob.month(), day).unwrap_or(dob)
}

/// Age in complete years: the year difference, minus one when today's
/// (month, day) has not yet reached the birthday's.
pub fn age_in_years(dob: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - dob.year();
    if (today.month(), today.day()) < (dob.month(), dob.day()) {
        age -= 1;
    }
    age
}

/// Age in complete calendar months.
pub fn age_in_months(dob: NaiveDate, today: NaiveDate) -> i32 {
    let mut months =
        (today.year() - dob.year()) * 12 + today.month() as i32 - dob.month() as i32;
    if today.day() < dob.day() {
        months -= 1;
    }
    months
}

/// Total days lived, by standard date subtraction.
pub fn age_in_days(dob: NaiveDate, today: NaiveDate) -> i64 {
    (today - dob).num_days()
}

/// The earliest occurrence of the birthday on or after `today`.
///
/// Today's own birthday counts as upcoming, never skipped. A candidate that
/// has already passed this year advances by exactly one year, with the leap
/// day substitution re-applied for that year.
pub fn next_birthday(dob: NaiveDate, today: NaiveDate) -> NaiveDate {
    let candidate = birthday_in_year(dob, today.year());
    if candidate < today {
        birthday_in_year(dob, today.year() + 1)
    } else {
        candidate
    }
}

/// Days from `today` until `target`, 0 when the target is today.
pub fn days_until(today: NaiveDate, target: NaiveDate) -> i64 {
    (target - today).num_days()
}

/// Full English weekday name, e.g. "Friday".
pub fn day_of_week(date: NaiveDate) -> String {
    date.format("%A").to_string()
}

/// Friendly countdown message. Today, tomorrow, and the general case each get
/// their own phrasing; the day count is always present.
pub fn birthday_message(days_until: i64) -> String {
    match days_until {
        0 => "🎉 Happy Birthday! Today is your special day!".to_string(),
        1 => "🎂 Your birthday is tomorrow! Just 1 day to go!".to_string(),
        n => format!("🎈 Your birthday is in {} days! Time to start planning the celebration!", n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_is_leap_year() {
        assert!(is_leap_year(2000));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2021));
        assert!(!is_leap_year(2023));
        assert!(is_leap_year(2400));
    }

    #[test]
    fn test_birthday_in_year_regular_date() {
        assert_eq!(birthday_in_year(date(1990, 5, 15), 2026), date(2026, 5, 15));
        assert_eq!(birthday_in_year(date(1999, 12, 31), 2025), date(2025, 12, 31));
    }

    #[test]
    fn test_birthday_in_year_leap_day() {
        let dob = date(2000, 2, 29);
        assert_eq!(birthday_in_year(dob, 2024), date(2024, 2, 29));
        assert_eq!(birthday_in_year(dob, 2023), date(2023, 2, 28));
        // Re-evaluated independently per year.
        assert_eq!(birthday_in_year(dob, 2028), date(2028, 2, 29));
    }

    #[test]
    fn test_age_in_years_birthday_passed() {
        assert_eq!(age_in_years(date(1990, 5, 15), date(2026, 6, 1)), 36);
    }

    #[test]
    fn test_age_in_years_birthday_not_yet() {
        assert_eq!(age_in_years(date(1990, 5, 15), date(2026, 2, 1)), 35);
    }

    #[test]
    fn test_age_in_years_birthday_today() {
        assert_eq!(age_in_years(date(1990, 5, 15), date(2026, 5, 15)), 36);
    }

    #[test]
    fn test_age_in_months() {
        assert_eq!(age_in_months(date(1990, 5, 15), date(1990, 6, 15)), 1);
        assert_eq!(age_in_months(date(1990, 5, 15), date(1990, 6, 14)), 0);
        assert_eq!(age_in_months(date(1990, 5, 15), date(1991, 5, 15)), 12);
    }

    #[test]
    fn test_next_birthday_later_this_year() {
        assert_eq!(
            next_birthday(date(1990, 5, 15), date(2026, 2, 1)),
            date(2026, 5, 15)
        );
    }

    #[test]
    fn test_next_birthday_already_passed() {
        assert_eq!(
            next_birthday(date(1990, 5, 15), date(2026, 6, 1)),
            date(2027, 5, 15)
        );
    }

    #[test]
    fn test_next_birthday_today_counts_as_upcoming() {
        let today = date(2026, 5, 15);
        assert_eq!(next_birthday(date(1990, 5, 15), today), today);
        assert_eq!(days_until(today, next_birthday(date(1990, 5, 15), today)), 0);
    }

    #[test]
    fn test_next_birthday_new_years_eve() {
        assert_eq!(
            next_birthday(date(1985, 1, 1), date(2025, 12, 31)),
            date(2026, 1, 1)
        );
    }

    #[test]
    fn test_next_birthday_leap_day_rolls_to_substituted_date() {
        // Feb 28 2021 has already passed on Mar 1, so the next occurrence is
        // the substituted Feb 28 of 2022, not the next actual leap day.
        assert_eq!(
            next_birthday(date(2000, 2, 29), date(2021, 3, 1)),
            date(2022, 2, 28)
        );
        // In a leap year the real Feb 29 is used.
        assert_eq!(
            next_birthday(date(2000, 2, 29), date(2024, 1, 10)),
            date(2024, 2, 29)
        );
    }

    #[test]
    fn test_days_until() {
        assert_eq!(days_until(date(2026, 2, 1), date(2026, 5, 15)), 103);
        assert_eq!(days_until(date(2026, 5, 15), date(2026, 5, 15)), 0);
        assert_eq!(days_until(date(2026, 5, 14), date(2026, 5, 15)), 1);
    }

    #[test]
    fn test_day_of_week() {
        assert_eq!(day_of_week(date(2026, 5, 15)), "Friday");
        assert_eq!(day_of_week(date(2022, 2, 28)), "Monday");
        assert_eq!(day_of_week(date(2024, 2, 29)), "Thursday");
    }

    #[test]
    fn test_birthday_message_today() {
        let message = birthday_message(0);
        assert!(message.contains("Today"));
        assert!(message.contains("🎉"));
    }

    #[test]
    fn test_birthday_message_tomorrow() {
        let message = birthday_message(1);
        assert!(message.contains("tomorrow"));
        assert!(message.contains('1'));
    }

    #[test]
    fn test_birthday_message_general() {
        let message = birthday_message(42);
        assert!(message.contains("42 days"));
        assert!(message.contains("🎈"));
    }
}
