//! Items stored in a repository.

use std::fmt::Debug;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// An application record with an identity.
///
/// Items are snapshotted into their rendered element as JSON, so they must
/// round-trip through serde. Identity is compared with `==` and is not
/// required to be unique.
pub trait Item: Clone + Serialize + DeserializeOwned {
    type Id: PartialEq + Serialize + Debug;

    fn id(&self) -> Self::Id;

    /// Record the selection state on the item itself.
    fn set_selected(&mut self, selected: bool);
}

/// Untyped records: the identity is the `"id"` member (`null` when absent)
/// and selection is written to the `"selected"` member of objects.
impl Item for Value {
    type Id = Value;

    fn id(&self) -> Value {
        self.get("id").cloned().unwrap_or(Value::Null)
    }

    fn set_selected(&mut self, selected: bool) {
        if let Some(obj) = self.as_object_mut() {
            obj.insert("selected".to_string(), Value::Bool(selected));
        }
    }
}
