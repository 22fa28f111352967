//! Data attribute names that make up the markup contract.

/// Marks an element as bound to the repository named by the attribute value.
pub const REPOSITORY: &str = "repository";

/// Marks a child as a rendered item. The value is the JSON snapshot of the item.
pub const ITEM: &str = "repository-item";

/// Marks the child after which items are inserted.
pub const ITEM_START: &str = "repository-item-start";

/// Marks the child before which items are inserted.
pub const ITEM_END: &str = "repository-item-end";
