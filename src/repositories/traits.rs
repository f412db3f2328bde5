use crate::domain::ContactId;
use crate::error::ContactResult;
use crate::models::Contact;

/// Repository for managing contacts.
///
/// Provides abstraction over contact storage so the menus can run against
/// the in-memory store or a test double. Contacts come back in insertion
/// order from every listing operation.
pub trait ContactRepository {
    /// Append a contact and return its handle.
    fn add(&mut self, contact: Box<dyn Contact>) -> ContactId;

    /// Remove every contact whose handle is in `ids`.
    ///
    /// Handles that are not stored are ignored. Returns how many contacts
    /// were removed.
    fn remove_all(&mut self, ids: &[ContactId]) -> usize;

    /// Number of stored contacts.
    fn count(&self) -> usize;

    /// Retrieve a single contact.
    fn get(&self, id: ContactId) -> ContactResult<&dyn Contact>;

    /// Retrieve a single contact for editing.
    fn get_mut(&mut self, id: ContactId) -> ContactResult<&mut dyn Contact>;

    /// Handles of all contacts matching `predicate`, in insertion order.
    fn find(&self, predicate: &dyn Fn(&dyn Contact) -> bool) -> Vec<ContactId>;

    /// Handles of all contacts, in insertion order.
    fn ids(&self) -> Vec<ContactId> {
        self.find(&|_| true)
    }
}
