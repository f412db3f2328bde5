//! Domain value objects and validation rules.
//!
//! Phone numbers, birth dates and genders are validated here. The rules are
//! advisory: callers that get an error store an empty value and warn instead
//! of aborting what they were doing.

pub mod birthdate;
pub mod contact_id;
pub mod errors;
pub mod gender;
pub mod phone;

pub use birthdate::{format_birthdate, parse_birthdate};
pub use contact_id::ContactId;
pub use errors::ValidationError;
pub use gender::Gender;
pub use phone::{is_valid_phone, PhoneNumber};
