//! Contact data model.
//!
//! People and organizations share one capability set, [`Contact`], built on a
//! per-type property registry so that fields can be read and edited by name.

pub mod contact;
pub mod organization;
pub mod person;
pub mod property;

pub use contact::{Contact, ContactKind, ContactMeta, UpdateOutcome, TIMESTAMP_FORMAT};
pub use organization::{Organization, OrganizationDraft};
pub use person::{Person, PersonDraft};
pub use property::{Property, PropertyRegistry, NO_DATA, NO_NUMBER};
