//! Rendered element lookup per bound element.

use std::collections::HashMap;

/// Maps item keys to the ID of their rendered element, per bound element.
///
/// Item keys are the JSON form of the item's ID. When the same ID is
/// rendered twice into one element, the later element wins.
#[derive(Debug, Default)]
pub struct ComponentCache {
    by_element: HashMap<String, HashMap<String, String>>,
}

impl ComponentCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, element: &str, key: String, rendered: String) {
        self.by_element
            .entry(element.to_string())
            .or_default()
            .insert(key, rendered);
    }

    pub fn get(&self, element: &str, key: &str) -> Option<&str> {
        self.by_element
            .get(element)
            .and_then(|entries| entries.get(key))
            .map(String::as_str)
    }

    /// Drop `key` from every bound element.
    pub fn remove(&mut self, key: &str) {
        for entries in self.by_element.values_mut() {
            entries.remove(key);
        }
    }

    pub fn clear(&mut self) {
        self.by_element.clear();
    }

    /// Number of cached elements across all bound elements.
    pub fn len(&self) -> usize {
        self.by_element.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
