//! Substring query over contact search keys.

use crate::domain::ContactId;
use crate::models::Contact;
use crate::repositories::ContactRepository;

/// A case-insensitive substring query.
///
/// A contact matches when its [`search_key`](Contact::search_key) contains
/// the query text, ignoring case. The empty query matches every contact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    needle: String,
}

impl SearchQuery {
    /// Build a query from raw user text.
    pub fn new(text: &str) -> Self {
        Self {
            needle: text.to_lowercase(),
        }
    }

    /// Check a single contact.
    pub fn matches(&self, contact: &dyn Contact) -> bool {
        contact.search_key().to_lowercase().contains(&self.needle)
    }

    /// Scan a repository, returning matches in store order.
    pub fn run(&self, repo: &dyn ContactRepository) -> Vec<ContactId> {
        let found = repo.find(&|contact| self.matches(contact));
        tracing::trace!(
            query = %self.needle,
            scanned = repo.count(),
            matched = found.len(),
            "Search scan completed"
        );
        found
    }
}

/// Search a repository for `query`. See [`SearchQuery`].
pub fn search(repo: &dyn ContactRepository, query: &str) -> Vec<ContactId> {
    SearchQuery::new(query).run(repo)
}
