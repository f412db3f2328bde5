//! Organization contact.

use super::contact::{ContactKind, ContactMeta};
use super::property::{Property, PropertyRegistry, NO_DATA, NO_NUMBER};
use crate::domain::ValidationError;

/// Raw input for creating an organization, exactly as typed.
#[derive(Debug, Clone, Default)]
pub struct OrganizationDraft {
    pub name: String,
    pub address: String,
    pub number: String,
}

/// An organization in the phone book.
#[derive(Debug, Clone)]
pub struct Organization {
    name: String,
    address: String,
    meta: ContactMeta,
}

static ORGANIZATION_PROPERTIES: [Property<Organization>; 3] = [
    Property {
        name: "name",
        label: "Organization name",
        placeholder: NO_DATA,
        get: Organization::name_text,
        set: Organization::set_name,
    },
    Property {
        name: "address",
        label: "Address",
        placeholder: NO_DATA,
        get: Organization::address_text,
        set: Organization::set_address,
    },
    Property {
        name: "number",
        label: "Number",
        placeholder: NO_NUMBER,
        get: Organization::number_text,
        set: Organization::set_number,
    },
];

impl Organization {
    /// Create an organization. A rejected number is left empty and its error
    /// returned alongside the organization.
    pub fn new(draft: OrganizationDraft) -> (Self, Vec<ValidationError>) {
        let mut organization = Self {
            name: draft.name,
            address: draft.address,
            meta: ContactMeta::new(),
        };

        let warnings = organization.set_number(&draft.number).into_iter().collect();

        (organization, warnings)
    }

    /// Organization name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Postal address.
    pub fn address(&self) -> &str {
        &self.address
    }

    fn name_text(&self) -> String {
        self.name.clone()
    }

    fn address_text(&self) -> String {
        self.address.clone()
    }

    fn number_text(&self) -> String {
        self.meta.phone_text()
    }

    fn set_name(&mut self, value: &str) -> Option<ValidationError> {
        self.name = value.to_string();
        None
    }

    fn set_address(&mut self, value: &str) -> Option<ValidationError> {
        self.address = value.to_string();
        None
    }

    fn set_number(&mut self, value: &str) -> Option<ValidationError> {
        self.meta.set_phone(value)
    }
}

impl PropertyRegistry for Organization {
    const KIND: ContactKind = ContactKind::Organization;

    fn properties() -> &'static [Property<Self>] {
        &ORGANIZATION_PROPERTIES
    }

    fn meta(&self) -> &ContactMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut ContactMeta {
        &mut self.meta
    }

    fn label(&self) -> String {
        self.name.clone()
    }
}
