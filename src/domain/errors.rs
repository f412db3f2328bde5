//! Domain validation errors.

use std::fmt;

/// Errors produced by the advisory validation rules.
///
/// The display text doubles as the warning shown to the user when a field
/// is cleared because its input was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided phone number does not follow the phone grammar.
    InvalidPhone(String),

    /// The provided birth date is not an ISO-8601 calendar date.
    InvalidBirthdate(String),

    /// The provided gender is neither `M` nor `F`.
    InvalidGender(String),
}

impl ValidationError {
    /// The rejected raw input.
    pub fn input(&self) -> &str {
        match self {
            Self::InvalidPhone(s) | Self::InvalidBirthdate(s) | Self::InvalidGender(s) => s,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPhone(_) => write!(f, "Wrong number format!"),
            Self::InvalidBirthdate(_) => write!(f, "Bad birth date!"),
            Self::InvalidGender(_) => write!(f, "Bad gender!"),
        }
    }
}

impl std::error::Error for ValidationError {}
