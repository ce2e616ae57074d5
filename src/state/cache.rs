//! Per-resource in-memory cache and its reconciliation rules.
//!
//! One instance per domain context: the collection, the single "current"
//! record, and the loading/error flags the UI renders from. Mutations only
//! happen through the commit methods so the rules stay in one place:
//! replace-whole-list for listings, append for creation, replace-in-place
//! for updates, filter-out for deletion. Failures record a message and leave
//! the data untouched.

use crate::domain::Keyed;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResourceCache<T> {
    collection: Vec<T>,
    current: Option<T>,
    loading: bool,
    error: Option<String>,
}

impl<T: Keyed + Clone> ResourceCache<T> {
    pub fn new() -> Self {
        Self {
            collection: Vec::new(),
            current: None,
            loading: false,
            error: None,
        }
    }

    pub fn collection(&self) -> &[T] {
        &self.collection
    }

    pub fn current(&self) -> Option<&T> {
        self.current.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Start an operation: loading on, previous error cleared.
    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// End an operation, success or failure.
    pub fn finish(&mut self) {
        self.loading = false;
    }

    /// Record a failure. Prior collection/current stay as they were.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    /// Replace the whole collection (listings).
    pub fn set_collection(&mut self, items: Vec<T>) {
        self.collection = items;
    }

    /// Set the single-record view (fetch-by-id and friends).
    pub fn set_current(&mut self, item: T) {
        self.current = Some(item);
    }

    pub fn clear_current(&mut self) {
        self.current = None;
    }

    /// Commit a created record: append the server's echo and make it
    /// current.
    pub fn commit_created(&mut self, item: T) {
        self.current = Some(item.clone());
        self.collection.push(item);
    }

    /// Commit an updated record: replace in place by `id`, and refresh
    /// `current` when it points at the same record.
    pub fn commit_updated(&mut self, id: &str, item: T) {
        for slot in &mut self.collection {
            if slot.key() == Some(id) {
                *slot = item.clone();
            }
        }
        if self.current.as_ref().and_then(Keyed::key) == Some(id) {
            self.current = Some(item);
        }
    }

    /// Commit a deletion: drop the record and clear a matching `current`.
    pub fn commit_removed(&mut self, id: &str) {
        self.collection.retain(|item| item.key() != Some(id));
        if self.current.as_ref().and_then(Keyed::key) == Some(id) {
            self.current = None;
        }
    }
}
