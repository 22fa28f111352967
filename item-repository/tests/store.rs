use item_repository::{Item, Store};
use serde_json::{Value, json};

// ============================================================================
// Store
// ============================================================================

#[test]
fn test_missing_list_reads_empty() {
    let store: Store<Value> = Store::new();

    assert!(!store.contains("users"));
    assert_eq!(store.len("users"), 0);
    assert!(store.get_all("users").is_empty());
    assert_eq!(store.update("users", |items| items.len()), None);
}

#[test]
fn test_ensure_list_keeps_existing_items() {
    let store = Store::new();
    store.extend("users", [json!({"id": 1})]);

    store.ensure_list("users");

    assert_eq!(store.get_all("users"), vec![json!({"id": 1})]);
}

#[test]
fn test_clones_share_lists() {
    let store = Store::new();
    let other = store.clone();

    other.extend("users", [json!({"id": 1}), json!({"id": 2})]);
    store.extend("groups", [json!({"id": "g"})]);

    assert_eq!(store.len("users"), 2);
    assert_eq!(other.names(), vec!["groups".to_string(), "users".to_string()]);
}

// ============================================================================
// Untyped Items
// ============================================================================

#[test]
fn test_value_item_identity() {
    assert_eq!(json!({"id": 3, "name": "C"}).id(), json!(3));
    assert_eq!(json!({"name": "no id"}).id(), Value::Null);
}

#[test]
fn test_value_item_selection() {
    let mut item = json!({"id": 1});
    item.set_selected(true);
    assert_eq!(item, json!({"id": 1, "selected": true}));

    let mut scalar = json!(5);
    scalar.set_selected(true);
    assert_eq!(scalar, json!(5));
}
