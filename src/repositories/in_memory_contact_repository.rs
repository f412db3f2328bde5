use crate::domain::ContactId;
use crate::error::{ContactError, ContactResult};
use crate::models::Contact;
use crate::repositories::traits::ContactRepository;

struct StoredContact {
    id: ContactId,
    contact: Box<dyn Contact>,
}

/// Contact repository holding everything in process memory.
///
/// Contacts are kept in a vector in insertion order. Handles come from a
/// counter that only moves forward, so a removed contact's handle never
/// refers to anything again.
#[derive(Default)]
pub struct InMemoryContactRepository {
    entries: Vec<StoredContact>,
    next_id: u64,
}

impl InMemoryContactRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ContactRepository for InMemoryContactRepository {
    fn add(&mut self, contact: Box<dyn Contact>) -> ContactId {
        self.next_id += 1;
        let id = ContactId::new(self.next_id);
        self.entries.push(StoredContact { id, contact });
        id
    }

    fn remove_all(&mut self, ids: &[ContactId]) -> usize {
        let before = self.entries.len();
        self.entries.retain(|entry| !ids.contains(&entry.id));
        before - self.entries.len()
    }

    fn count(&self) -> usize {
        self.entries.len()
    }

    fn get(&self, id: ContactId) -> ContactResult<&dyn Contact> {
        self.entries
            .iter()
            .find(|entry| entry.id == id)
            .map(|entry| entry.contact.as_ref())
            .ok_or(ContactError::NotFound(id))
    }

    fn get_mut(&mut self, id: ContactId) -> ContactResult<&mut dyn Contact> {
        match self.entries.iter_mut().find(|entry| entry.id == id) {
            Some(entry) => {
                let contact: &mut dyn Contact = entry.contact.as_mut();
                Ok(contact)
            }
            None => Err(ContactError::NotFound(id)),
        }
    }

    fn find(&self, predicate: &dyn Fn(&dyn Contact) -> bool) -> Vec<ContactId> {
        self.entries
            .iter()
            .filter(|entry| predicate(entry.contact.as_ref()))
            .map(|entry| entry.id)
            .collect()
    }
}
