//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Validation failures live in [`crate::domain::ValidationError`]; they are advisory and
//! never travel through these types.

use crate::domain::ContactId;
use thiserror::Error;

/// Errors raised by the contact model and the repository.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    /// A field name outside the contact's property registry was used.
    ///
    /// The navigator only offers registered names, so this signals a bug in
    /// the caller rather than bad user input.
    #[error("{kind} has no field named '{field}'")]
    UnknownField { kind: &'static str, field: String },

    /// The handle does not refer to a stored contact
    #[error("Contact {0} not found")]
    NotFound(ContactId),
}

/// Errors from the console collaborators.
#[derive(Error, Debug)]
pub enum ConsoleError {
    /// Reading or writing the terminal failed
    #[error("Console I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The input stream reached end of file
    #[error("Input closed")]
    InputClosed,
}

/// Errors that end a navigation session.
///
/// Bad menu choices and rejected field values are handled inside the menus
/// and never show up here.
#[derive(Error, Debug)]
pub enum NavigationError {
    /// Console failure
    #[error(transparent)]
    Console(#[from] ConsoleError),

    /// Contract violation in the contact model
    #[error(transparent)]
    Contact(#[from] ContactError),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with ContactError
pub type ContactResult<T> = Result<T, ContactError>;

/// Convenience type alias for Results with ConsoleError
pub type ConsoleResult<T> = Result<T, ConsoleError>;

/// Convenience type alias for Results with NavigationError
pub type NavigationResult<T> = Result<T, NavigationError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
