//! # Item Types
//!
//! A stored item is a unique id plus whatever mapping the client supplied.
//! No schema is enforced beyond the id: arbitrary fields survive storage
//! round-trips untouched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// A persisted storefront item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Unique item identifier, assigned at creation time
    pub id: String,

    /// All remaining client-supplied fields (item_name, current_price,
    /// image, and anything else), kept as-is
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Item {
    /// Build an item from a client-supplied mapping, assigning a fresh id.
    /// Any id the client sent is discarded; ids are always server-issued.
    pub fn with_fresh_id(mut fields: Map<String, Value>) -> Self {
        fields.remove("id");
        Self {
            id: Uuid::new_v4().to_string(),
            fields,
        }
    }

    /// Construct an item with an explicit id (stores and tests)
    pub fn with_id(id: impl Into<String>, fields: Map<String, Value>) -> Self {
        Self {
            id: id.into(),
            fields,
        }
    }

    /// Display name, when the client supplied one
    pub fn display_name(&self) -> Option<&str> {
        self.fields.get("item_name").and_then(Value::as_str)
    }
}
