//! Named item lists shared between bindings.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// A table of named, ordered item lists.
///
/// Cloning a `Store` yields another handle to the same lists, so every
/// binding created from it with the same name sees the same items. A
/// poisoned lock makes reads return nothing and writes do nothing.
#[derive(Debug)]
pub struct Store<T> {
    inner: Arc<RwLock<HashMap<String, Vec<T>>>>,
}

impl<T> Clone for Store<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> Default for Store<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Store<T> {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Create the list `name` if it does not exist yet.
    pub fn ensure_list(&self, name: &str) {
        if let Ok(mut guard) = self.inner.write() {
            guard.entry(name.to_string()).or_default();
        }
    }

    /// Check whether a list named `name` exists.
    pub fn contains(&self, name: &str) -> bool {
        self.inner
            .read()
            .map(|g| g.contains_key(name))
            .unwrap_or(false)
    }

    /// Names of all lists, sorted for deterministic ordering.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<_> = self
            .inner
            .read()
            .map(|g| g.keys().cloned().collect())
            .unwrap_or_default();
        names.sort();
        names
    }

    /// Number of items in the list `name` (0 if it does not exist).
    pub fn len(&self, name: &str) -> usize {
        self.read(name, Vec::len).unwrap_or(0)
    }

    /// Check whether the list `name` is empty or missing.
    pub fn is_empty(&self, name: &str) -> bool {
        self.len(name) == 0
    }

    /// Append items to the list `name`, creating it if needed.
    pub fn extend(&self, name: &str, items: impl IntoIterator<Item = T>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.entry(name.to_string()).or_default().extend(items);
        }
    }

    /// Read the list `name` with a closure.
    pub fn read<R, F>(&self, name: &str, f: F) -> Option<R>
    where
        F: FnOnce(&Vec<T>) -> R,
    {
        let guard = self.inner.read().ok()?;
        guard.get(name).map(f)
    }

    /// Update the list `name` with a closure.
    ///
    /// Returns `None` without calling `f` if the list does not exist.
    pub fn update<R, F>(&self, name: &str, f: F) -> Option<R>
    where
        F: FnOnce(&mut Vec<T>) -> R,
    {
        let mut guard = self.inner.write().ok()?;
        guard.get_mut(name).map(f)
    }
}

impl<T: Clone> Store<T> {
    /// Snapshot of the list `name` (empty if it does not exist).
    pub fn get_all(&self, name: &str) -> Vec<T> {
        self.read(name, Vec::clone).unwrap_or_default()
    }
}
