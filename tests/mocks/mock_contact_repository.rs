use contact_book::domain::ContactId;
use contact_book::error::ContactResult;
use contact_book::models::Contact;
use contact_book::repositories::{ContactRepository, InMemoryContactRepository};
use std::cell::RefCell;
use std::collections::HashMap;

/// Mock contact repository for testing.
///
/// Delegates storage to the in-memory repository and tracks method calls
/// for verification.
#[derive(Default)]
pub struct MockContactRepository {
    inner: InMemoryContactRepository,
    call_counts: RefCell<HashMap<String, usize>>,
}

impl MockContactRepository {
    /// Create a new empty MockContactRepository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a contact without counting the call.
    pub fn seed(&mut self, contact: Box<dyn Contact>) -> ContactId {
        self.inner.add(contact)
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        *self.call_counts.borrow().get(method).unwrap_or(&0)
    }

    /// Reset all call counts.
    pub fn reset_call_counts(&self) {
        self.call_counts.borrow_mut().clear();
    }

    fn track_call(&self, method: &str) {
        *self
            .call_counts
            .borrow_mut()
            .entry(method.to_string())
            .or_insert(0) += 1;
    }
}

impl ContactRepository for MockContactRepository {
    fn add(&mut self, contact: Box<dyn Contact>) -> ContactId {
        self.track_call("add");
        self.inner.add(contact)
    }

    fn remove_all(&mut self, ids: &[ContactId]) -> usize {
        self.track_call("remove_all");
        self.inner.remove_all(ids)
    }

    fn count(&self) -> usize {
        self.track_call("count");
        self.inner.count()
    }

    fn get(&self, id: ContactId) -> ContactResult<&dyn Contact> {
        self.track_call("get");
        self.inner.get(id)
    }

    fn get_mut(&mut self, id: ContactId) -> ContactResult<&mut dyn Contact> {
        self.track_call("get_mut");
        self.inner.get_mut(id)
    }

    fn find(&self, predicate: &dyn Fn(&dyn Contact) -> bool) -> Vec<ContactId> {
        self.track_call("find");
        self.inner.find(predicate)
    }
}
