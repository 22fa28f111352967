mod content;
mod node;

pub use content::Content;
pub use node::Element;

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    for child in root.child_elements() {
        if let Some(found) = find_element(child, id) {
            return Some(found);
        }
    }

    None
}

/// Find an element by ID in the tree, mutably.
pub fn find_element_mut<'a>(root: &'a mut Element, id: &str) -> Option<&'a mut Element> {
    if root.id == id {
        return Some(root);
    }

    if let Content::Children(children) = &mut root.content {
        for child in children {
            if let Some(found) = find_element_mut(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// Collect every element whose `key` data attribute equals `value`, in document order.
///
/// The root itself is included when it matches.
pub fn find_by_data<'a>(root: &'a Element, key: &str, value: &str) -> Vec<&'a Element> {
    let mut found = Vec::new();
    collect_by_data(root, key, value, &mut found);
    found
}

fn collect_by_data<'a>(el: &'a Element, key: &str, value: &str, out: &mut Vec<&'a Element>) {
    if el.get_data(key).is_some_and(|v| v == value) {
        out.push(el);
    }
    for child in el.child_elements() {
        collect_by_data(child, key, value, out);
    }
}
