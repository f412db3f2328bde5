//! ContactId handle.

use std::fmt;

/// Store-assigned identity of a contact.
///
/// Contacts carry no ID field of their own; the repository hands out a fresh
/// `ContactId` on every insert and never reuses one. Two contacts with equal
/// field values are still distinct records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContactId(u64);

impl ContactId {
    /// Wrap a raw handle value.
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the raw handle value.
    pub fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
