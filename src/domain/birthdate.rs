//! Birth date parsing.

use super::errors::ValidationError;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

/// Display and parse format for birth dates.
pub const BIRTHDATE_FORMAT: &str = "%Y-%m-%d";

static ISO_DATE_SHAPE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap());

/// Parse an ISO-8601 calendar date (`YYYY-MM-DD`).
///
/// The shape is checked before handing the string to chrono, which would
/// otherwise accept unpadded months and days. A parsed date therefore always
/// formats back to the exact input.
///
/// # Errors
///
/// Returns `ValidationError::InvalidBirthdate` when the string is not a real
/// calendar date in that form.
pub fn parse_birthdate(input: &str) -> Result<NaiveDate, ValidationError> {
    if !ISO_DATE_SHAPE.is_match(input) {
        return Err(ValidationError::InvalidBirthdate(input.to_string()));
    }

    NaiveDate::parse_from_str(input, BIRTHDATE_FORMAT)
        .map_err(|_| ValidationError::InvalidBirthdate(input.to_string()))
}

/// Render a birth date in the same form [`parse_birthdate`] accepts.
pub fn format_birthdate(date: &NaiveDate) -> String {
    date.format(BIRTHDATE_FORMAT).to_string()
}
