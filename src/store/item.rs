//! Item representation.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::store::key::ItemKey;

/// Open mapping of field name to JSON value, in insertion order.
pub type Fields = Map<String, Value>;

/// Name of the identifier field.
pub const ID_FIELD: &str = "id";

/// A stored record: an `id` plus whatever fields the client supplied.
///
/// Serializes as a flat JSON object with `id` as the first key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Item(Fields);

impl Item {
    /// Build a new item. The generated `id` takes precedence over any `id`
    /// key present in `fields`.
    pub fn new(id: u64, fields: Fields) -> Self {
        let mut map = Fields::with_capacity(fields.len() + 1);
        map.insert(ID_FIELD.to_string(), Value::from(id));
        for (name, value) in fields {
            if name != ID_FIELD {
                map.insert(name, value);
            }
        }
        Self(map)
    }

    /// The stored id. Normally a number, but `merge` may have replaced it.
    pub fn id(&self) -> Option<&Value> {
        self.0.get(ID_FIELD)
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn fields(&self) -> &Fields {
        &self.0
    }

    /// Whether this item is addressed by `key`.
    pub fn matches(&self, key: &ItemKey) -> bool {
        self.id().is_some_and(|id| key.matches(id))
    }

    /// Assign every supplied field. Existing keys keep their position, new
    /// keys are appended. An `id` key is assigned like any other field.
    pub fn merge(&mut self, fields: Fields) {
        for (name, value) in fields {
            self.0.insert(name, value);
        }
    }
}
