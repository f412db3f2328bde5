//! Contact search.
//!
//! Case-insensitive substring search over each contact's search key.

pub mod query;

pub use query::{search, SearchQuery};
