//! URL record entity representing a saved alias → URL mapping.

/// A saved URL reachable through its alias.
///
/// The `id` is assigned by storage on creation and never changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlRecord {
    pub id: i64,
    pub alias: String,
    pub url: String,
}

impl UrlRecord {
    /// Creates a new UrlRecord instance.
    pub fn new(id: i64, alias: String, url: String) -> Self {
        Self { id, alias, url }
    }
}

/// Input data for saving a new URL.
///
/// `alias` is always resolved by the time a record reaches storage:
/// either supplied by the caller or generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUrlRecord {
    pub url: String,
    pub alias: String,
}
