use itemdom::{Content, Element, find_by_data, find_element, find_element_mut};

fn child_ids(el: &Element) -> Vec<&str> {
    el.child_elements().iter().map(|c| c.id.as_str()).collect()
}

// ============================================================================
// Child Placement
// ============================================================================

#[test]
fn test_append_keeps_order() {
    let mut root = Element::box_().id("root");
    root.append(Element::box_().id("a"));
    root.append(Element::box_().id("b"));

    assert_eq!(child_ids(&root), vec!["a", "b"]);
}

#[test]
fn test_insert_at_positions_between_siblings() {
    let mut root = Element::box_()
        .id("root")
        .child(Element::box_().id("start"))
        .child(Element::box_().id("end"));

    root.insert_at(1, Element::box_().id("x"));
    root.insert_at(1, Element::box_().id("y"));

    assert_eq!(child_ids(&root), vec!["start", "y", "x", "end"]);
}

#[test]
fn test_insert_at_clamps_index() {
    let mut root = Element::box_().id("root").child(Element::box_().id("a"));
    root.insert_at(10, Element::box_().id("b"));

    assert_eq!(child_ids(&root), vec!["a", "b"]);
}

#[test]
fn test_child_replaces_text_content() {
    let el = Element::text("hello").child(Element::box_().id("a"));

    assert!(matches!(el.content, Content::Children(_)));
    assert_eq!(child_ids(&el), vec!["a"]);
}

// ============================================================================
// Removal
// ============================================================================

#[test]
fn test_retain_children_returns_removed_in_order() {
    let mut root = Element::box_().id("root").children([
        Element::box_().id("a").data("kind", "item"),
        Element::box_().id("b"),
        Element::box_().id("c").data("kind", "item"),
    ]);

    let removed = root.retain_children(|c| !c.has_data("kind"));

    let removed_ids: Vec<_> = removed.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(removed_ids, vec!["a", "c"]);
    assert_eq!(child_ids(&root), vec!["b"]);
}

// ============================================================================
// Classes and Data
// ============================================================================

#[test]
fn test_classes_are_unique() {
    let mut el = Element::box_().class("active");

    assert!(!el.add_class("active"));
    assert!(el.add_class("hidden"));
    assert_eq!(el.classes, vec!["active", "hidden"]);

    assert!(el.remove_class("active"));
    assert!(!el.remove_class("active"));
    assert!(!el.has_class("active"));
}

#[test]
fn test_data_attributes() {
    let mut el = Element::box_().data("repository", "users");

    assert_eq!(el.get_data("repository"), Some(&"users".to_string()));
    el.set_data("repository", "accounts");
    assert_eq!(el.get_data("repository"), Some(&"accounts".to_string()));
    assert!(!el.has_data("missing"));
}

// ============================================================================
// Tree Queries
// ============================================================================

#[test]
fn test_find_by_data_document_order() {
    let root = Element::box_()
        .id("root")
        .child(
            Element::box_()
                .id("outer")
                .data("repository", "users")
                .child(Element::box_().id("inner").data("repository", "users")),
        )
        .child(Element::box_().id("other").data("repository", "groups"))
        .child(Element::box_().id("last").data("repository", "users"));

    let ids: Vec<_> = find_by_data(&root, "repository", "users")
        .iter()
        .map(|el| el.id.as_str())
        .collect();

    assert_eq!(ids, vec!["outer", "inner", "last"]);
}

#[test]
fn test_find_element_mut_allows_nested_edits() {
    let mut root = Element::box_()
        .id("root")
        .child(Element::box_().id("list").child(Element::box_().id("row")));

    if let Some(list) = find_element_mut(&mut root, "list") {
        list.append(Element::box_().id("row2"));
    }

    let list = find_element(&root, "list").unwrap();
    assert_eq!(child_ids(list), vec!["row", "row2"]);
    assert!(find_element(&root, "missing").is_none());
}
