//! Name-addressed property registry.
//!
//! Each contact variant publishes one static, ordered table of [`Property`]
//! entries. The table is what lets the editor change a field by name without
//! knowing which variant it is holding.

use crate::domain::ValidationError;

/// Placeholder shown for an empty field.
pub const NO_DATA: &str = "[no data]";

/// Placeholder shown for an empty phone number.
pub const NO_NUMBER: &str = "[no number]";

/// One editable field of a contact type `C`.
pub struct Property<C> {
    /// Field name used to address the property when editing
    pub name: &'static str,

    /// Label used in the detailed description
    pub label: &'static str,

    /// Text shown in the description when the field is empty
    pub placeholder: &'static str,

    /// Read the current value; empty when unset
    pub get: fn(&C) -> String,

    /// Store a new value. Validated fields store empty and return the error
    /// when the input is rejected.
    pub set: fn(&mut C, &str) -> Option<ValidationError>,
}

/// A contact type backed by a property table.
///
/// Implementing this trait is enough to get the full
/// [`Contact`](super::Contact) capability set through the blanket impl.
pub trait PropertyRegistry: Sized + 'static {
    /// Which variant this type is
    const KIND: super::ContactKind;

    /// The ordered property table. Names are unique within the table.
    fn properties() -> &'static [Property<Self>];

    /// Shared contact data
    fn meta(&self) -> &super::ContactMeta;

    /// Shared contact data, mutably
    fn meta_mut(&mut self) -> &mut super::ContactMeta;

    /// Short label used in listings
    fn label(&self) -> String;

    /// Look up a property by name.
    fn property(name: &str) -> Option<&'static Property<Self>> {
        Self::properties().iter().find(|p| p.name == name)
    }
}
