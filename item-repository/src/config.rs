//! Repository configuration.

use crate::error::{RepositoryError, Result};

/// Class name applied to selected item elements unless configured otherwise.
pub const DEFAULT_SELECTED_CLASS_NAME: &str = "active";

/// Per-binding options.
#[derive(Debug, Clone)]
pub struct RepositoryOptions<C = ()> {
    /// Class toggled on item elements by `select`.
    pub selected_class_name: String,

    /// Opaque configuration handed to the component on every render.
    pub child_component_options: C,

    /// Remember the rendered element of each item per bound element, so
    /// it can be looked up later with `get_component`.
    pub cache_components: bool,
}

impl<C: Default> Default for RepositoryOptions<C> {
    fn default() -> Self {
        Self::new(C::default())
    }
}

impl<C> RepositoryOptions<C> {
    /// Create options with the given component configuration.
    pub fn new(child_component_options: C) -> Self {
        Self {
            selected_class_name: DEFAULT_SELECTED_CLASS_NAME.to_string(),
            child_component_options,
            cache_components: false,
        }
    }

    /// Set the class toggled on selected items.
    pub fn selected_class_name(mut self, name: impl Into<String>) -> Self {
        self.selected_class_name = name.into();
        self
    }

    /// Set the component configuration.
    pub fn child_component_options(mut self, options: C) -> Self {
        self.child_component_options = options;
        self
    }

    /// Enable the per-element component cache.
    pub fn cache_components(mut self) -> Self {
        self.cache_components = true;
        self
    }

    pub fn validate(&self) -> Result<()> {
        let name = &self.selected_class_name;
        if name.is_empty() || name.chars().any(char::is_whitespace) {
            return Err(RepositoryError::InvalidClassName(name.clone()));
        }
        Ok(())
    }
}
