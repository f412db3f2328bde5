//! Contact capability set shared by people and organizations.

use super::property::PropertyRegistry;
use crate::domain::{PhoneNumber, ValidationError};
use crate::error::{ContactError, ContactResult};
use chrono::{DateTime, Local};
use std::fmt;

/// Display format for creation and edit timestamps.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Which variant a contact is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactKind {
    Person,
    Organization,
}

impl ContactKind {
    /// Name used when choosing the kind in the add dialogue.
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Person => "person",
            Self::Organization => "organization",
        }
    }
}

impl fmt::Display for ContactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Person => write!(f, "Person"),
            Self::Organization => write!(f, "Organization"),
        }
    }
}

/// Result of a field update that named a known field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The value was stored as given
    Applied,

    /// The value was rejected and the field is now empty
    Cleared(ValidationError),
}

/// Data every contact carries regardless of variant.
#[derive(Debug, Clone)]
pub struct ContactMeta {
    phone: Option<PhoneNumber>,
    created_at: DateTime<Local>,
    edited_at: DateTime<Local>,
}

impl ContactMeta {
    /// Fresh metadata with no phone number, stamped now.
    pub fn new() -> Self {
        let now = Local::now();
        Self {
            phone: None,
            created_at: now,
            edited_at: now,
        }
    }

    /// The stored phone number, if any.
    pub fn phone(&self) -> Option<&PhoneNumber> {
        self.phone.as_ref()
    }

    /// The stored phone number as text; empty when unset.
    pub fn phone_text(&self) -> String {
        self.phone
            .as_ref()
            .map(|p| p.as_str().to_string())
            .unwrap_or_default()
    }

    /// Validate and store a phone number. Blank input clears the number
    /// without complaint; rejected input clears it and returns the error.
    pub fn set_phone(&mut self, raw: &str) -> Option<ValidationError> {
        if raw.is_empty() {
            self.phone = None;
            return None;
        }

        match PhoneNumber::new(raw) {
            Ok(phone) => {
                self.phone = Some(phone);
                None
            }
            Err(e) => {
                self.phone = None;
                Some(e)
            }
        }
    }

    /// When the contact was created.
    pub fn created_at(&self) -> DateTime<Local> {
        self.created_at
    }

    /// When a field of the contact was last edited.
    pub fn edited_at(&self) -> DateTime<Local> {
        self.edited_at
    }

    /// Record an edit happening now.
    pub fn touch(&mut self) {
        self.edited_at = Local::now();
    }
}

impl Default for ContactMeta {
    fn default() -> Self {
        Self::new()
    }
}

/// The capability set the menus rely on.
///
/// Every operation is variant-agnostic: fields are addressed by the names
/// returned from [`field_names`](Contact::field_names).
pub trait Contact: fmt::Debug {
    /// Which variant this contact is.
    fn kind(&self) -> ContactKind;

    /// Editable field names in display order.
    fn field_names(&self) -> Vec<&'static str>;

    /// Current value of a field; empty when unset.
    fn field_value(&self, name: &str) -> ContactResult<String>;

    /// Set a field by name and stamp the edit time.
    ///
    /// Validated fields that reject `value` are cleared and the rejection is
    /// reported as [`UpdateOutcome::Cleared`]. An unknown `name` is a caller
    /// bug and yields [`ContactError::UnknownField`] without touching anything.
    fn update_field(&mut self, name: &str, value: &str) -> ContactResult<UpdateOutcome>;

    /// Multi-line description of every field plus the timestamps.
    fn describe(&self) -> String;

    /// Field values joined by newlines, used for substring search.
    fn search_key(&self) -> String;

    /// Short label used in listings.
    fn display_label(&self) -> String;

    /// The stored phone number; empty when unset.
    fn phone_number(&self) -> String;

    /// When the contact was created.
    fn created_at(&self) -> DateTime<Local>;

    /// When a field was last edited.
    fn edited_at(&self) -> DateTime<Local>;
}

impl<T> Contact for T
where
    T: PropertyRegistry + fmt::Debug,
{
    fn kind(&self) -> ContactKind {
        T::KIND
    }

    fn field_names(&self) -> Vec<&'static str> {
        T::properties().iter().map(|p| p.name).collect()
    }

    fn field_value(&self, name: &str) -> ContactResult<String> {
        let property = T::property(name).ok_or_else(|| unknown_field::<T>(name))?;
        Ok((property.get)(self))
    }

    fn update_field(&mut self, name: &str, value: &str) -> ContactResult<UpdateOutcome> {
        let property = T::property(name).ok_or_else(|| unknown_field::<T>(name))?;

        let outcome = match (property.set)(self, value) {
            None => UpdateOutcome::Applied,
            Some(err) => {
                let kind = T::KIND;
                tracing::warn!(
                    kind = %kind,
                    field = name,
                    input = err.input(),
                    "Rejected field value, field cleared"
                );
                UpdateOutcome::Cleared(err)
            }
        };
        self.meta_mut().touch();

        Ok(outcome)
    }

    fn describe(&self) -> String {
        let mut lines: Vec<String> = T::properties()
            .iter()
            .map(|p| {
                let value = (p.get)(self);
                if value.is_empty() {
                    format!("{}: {}", p.label, p.placeholder)
                } else {
                    format!("{}: {}", p.label, value)
                }
            })
            .collect();

        let meta = self.meta();
        lines.push(format!(
            "Time created: {}",
            meta.created_at().format(TIMESTAMP_FORMAT)
        ));
        lines.push(format!(
            "Time last edit: {}",
            meta.edited_at().format(TIMESTAMP_FORMAT)
        ));

        lines.join("\n")
    }

    fn search_key(&self) -> String {
        T::properties()
            .iter()
            .map(|p| (p.get)(self))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn display_label(&self) -> String {
        self.label()
    }

    fn phone_number(&self) -> String {
        self.meta().phone_text()
    }

    fn created_at(&self) -> DateTime<Local> {
        self.meta().created_at()
    }

    fn edited_at(&self) -> DateTime<Local> {
        self.meta().edited_at()
    }
}

fn unknown_field<T: PropertyRegistry>(name: &str) -> ContactError {
    ContactError::UnknownField {
        kind: match T::KIND {
            ContactKind::Person => "Person",
            ContactKind::Organization => "Organization",
        },
        field: name.to_string(),
    }
}
