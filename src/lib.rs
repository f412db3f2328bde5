//! Contact Book - an interactive, menu-driven contact manager.
//!
//! People and organizations are kept in memory for the life of the process
//! and managed through a tree of text menus.
//!
//! # Architecture
//!
//! - **domain**: Validation rules for phone numbers, birth dates and genders
//! - **models**: The `Contact` capability set, `Person`, `Organization` and the property registry
//! - **repositories**: Contact storage behind the `ContactRepository` trait
//! - **search**: Case-insensitive substring search
//! - **console**: Line-oriented input and output
//! - **menu**: Menu tree and the navigator that drives it
//! - **config**: Configuration from environment variables
//! - **error**: Custom error types for precise error handling

pub mod config;
pub mod console;
pub mod domain;
pub mod error;
pub mod menu;
pub mod models;
pub mod repositories;
pub mod search;

// Re-export commonly used types
pub use config::Config;
pub use console::{Console, StdConsole, StreamConsole};
pub use domain::{ContactId, Gender, PhoneNumber, ValidationError};
pub use error::{ConfigError, ConsoleError, ContactError, NavigationError};
pub use menu::{MenuNode, Navigator, Signal};
pub use models::{
    Contact, ContactKind, Organization, OrganizationDraft, Person, PersonDraft, UpdateOutcome,
};
pub use repositories::{ContactRepository, InMemoryContactRepository};
pub use search::{search, SearchQuery};
