//! PhoneNumber value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// Phone grammar: optional leading `+`, alphanumeric groups separated by a
/// space or hyphen. One group may be wrapped in parentheses: the first at any
/// length, or the second with length of at least two. Every later group needs
/// at least two characters.
static PHONE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^\+?(\([A-Za-z0-9]+\)|[A-Za-z0-9]+[ -]\([A-Za-z0-9]{2,}\)|[A-Za-z0-9]+)([ -][A-Za-z0-9]{2,})*$",
    )
    .expect("phone pattern is a valid regex")
});

/// Check a raw string against the phone grammar.
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_PATTERN.is_match(phone)
}

/// A type-safe wrapper for phone numbers.
///
/// # Example
///
/// ```
/// use contact_book::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("+1-234-5678").unwrap();
/// assert_eq!(phone.as_str(), "+1-234-5678");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the phone format is invalid.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();

        if !is_valid_phone(&phone) {
            return Err(ValidationError::InvalidPhone(phone));
        }

        Ok(Self(phone))
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
