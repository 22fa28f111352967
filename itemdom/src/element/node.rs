use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use super::Content;

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    // Identity
    pub id: String,

    // Content
    pub content: Content,

    // Visual
    /// Class names in insertion order, without duplicates.
    pub classes: Vec<String>,

    // Custom data storage (the `data-*` attributes of a DOM node, without the prefix)
    pub data: HashMap<String, String>,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            id: generate_id("el"),
            content: Content::None,
            classes: Vec::new(),
            data: HashMap::new(),
        }
    }
}

impl Element {
    pub fn box_() -> Self {
        Self {
            id: generate_id("box"),
            ..Default::default()
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self {
            id: generate_id("text"),
            content: Content::Text(content.into()),
            ..Default::default()
        }
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    // Classes
    pub fn class(mut self, name: impl Into<String>) -> Self {
        self.add_class(name);
        self
    }

    pub fn has_class(&self, name: &str) -> bool {
        self.classes.iter().any(|c| c == name)
    }

    /// Add a class name. Returns false if it was already present.
    pub fn add_class(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if self.has_class(&name) {
            return false;
        }
        self.classes.push(name);
        true
    }

    /// Remove a class name. Returns false if it was not present.
    pub fn remove_class(&mut self, name: &str) -> bool {
        let before = self.classes.len();
        self.classes.retain(|c| c != name);
        self.classes.len() != before
    }

    // Custom data
    pub fn data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    pub fn get_data(&self, key: &str) -> Option<&String> {
        self.data.get(key)
    }

    pub fn has_data(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    pub fn set_data(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.data.insert(key.into(), value.into());
    }

    // Children
    pub fn child(mut self, child: Element) -> Self {
        self.append(child);
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        self.child_elements_mut().extend(new_children);
        self
    }

    /// Direct children, empty for text or empty elements.
    pub fn child_elements(&self) -> &[Element] {
        match &self.content {
            Content::Children(children) => children,
            _ => &[],
        }
    }

    /// Mutable access to the direct children.
    ///
    /// Text content is replaced by an empty child list, as with [`Element::child`].
    pub fn child_elements_mut(&mut self) -> &mut Vec<Element> {
        if !matches!(self.content, Content::Children(_)) {
            self.content = Content::Children(Vec::new());
        }
        match &mut self.content {
            Content::Children(children) => children,
            _ => unreachable!("content was just set to children"),
        }
    }

    pub fn append(&mut self, child: Element) {
        self.child_elements_mut().push(child);
    }

    /// Insert at `index`, clamped to the number of children.
    pub fn insert_at(&mut self, index: usize, child: Element) {
        let children = self.child_elements_mut();
        let index = index.min(children.len());
        children.insert(index, child);
    }

    /// Keep only the direct children matching `keep`. Returns the removed children in order.
    pub fn retain_children<F>(&mut self, mut keep: F) -> Vec<Element>
    where
        F: FnMut(&Element) -> bool,
    {
        let Content::Children(children) = &mut self.content else {
            return Vec::new();
        };
        let (kept, removed): (Vec<_>, Vec<_>) =
            std::mem::take(children).into_iter().partition(|c| keep(c));
        *children = kept;
        if !removed.is_empty() {
            log::trace!("removed {} children from {}", removed.len(), self.id);
        }
        removed
    }
}
