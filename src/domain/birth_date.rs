//! Date-of-birth parsing and age calculation.

use chrono::{Datelike, NaiveDate};

use crate::config::DOB_FORMAT;
use crate::errors::{AppError, AppResult};

/// Parse a `YYYY-MM-DD` date of birth and reject dates after `today`.
///
/// Only the zero-padded ten-character form is accepted, so the stored
/// date always reads back exactly as it was written.
pub fn parse_dob(raw: &str, today: NaiveDate) -> AppResult<NaiveDate> {
    if !is_canonical_shape(raw) {
        return Err(AppError::validation(format!(
            "invalid date format, use YYYY-MM-DD: {:?}",
            raw
        )));
    }

    let dob = NaiveDate::parse_from_str(raw, DOB_FORMAT).map_err(|e| {
        AppError::validation(format!("invalid date format, use YYYY-MM-DD: {}", e))
    })?;

    if dob > today {
        return Err(AppError::validation("date of birth cannot be in the future"));
    }

    Ok(dob)
}

/// `DDDD-DD-DD` with ASCII digits only
fn is_canonical_shape(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// Whole years elapsed between `dob` and `today`.
///
/// One year is subtracted while this year's birthday is still ahead.
/// A 29 February birthday counts as reached on 1 March in common years.
pub fn calculate_age(dob: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - dob.year();

    if (today.month(), today.day()) < (dob.month(), dob.day()) {
        age -= 1;
    }

    age
}
