//! Core types for guestbook

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Open set of entry fields, stored and returned exactly as supplied
pub type Fields = Map<String, Value>;

/// Entry identifier as assigned by the backing table
///
/// Hosted tables use either numeric identity columns or text/uuid keys;
/// both shapes round-trip through the same JSON column.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum EntryId {
    Int(i64),
    Text(String),
}

/// A single guestbook record
///
/// Only the identifier and creation timestamp are structured (the service
/// keys deletes/updates on one and sorts on the other); every remaining
/// field passes through as the client stored it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Entry {
    pub id: EntryId,
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub fields: Fields,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn entry_flattens_extra_fields() {
        let raw = json!({
            "id": 7,
            "created_at": "2024-05-01T12:00:00+00:00",
            "name": "Ada",
            "message": "hi"
        });

        let entry: Entry = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(entry.id, EntryId::Int(7));
        assert_eq!(entry.fields["name"], "Ada");
        assert_eq!(entry.fields["message"], "hi");

        let back = serde_json::to_value(&entry).unwrap();
        assert_eq!(back["id"], 7);
        assert_eq!(back["name"], "Ada");
        assert_eq!(back["message"], "hi");
    }

    #[test]
    fn entry_id_accepts_numbers_and_strings() {
        let numeric: EntryId = serde_json::from_value(json!(42)).unwrap();
        assert_eq!(numeric, EntryId::Int(42));

        let text: EntryId =
            serde_json::from_value(json!("3f6c0b9a-4f9e-4d38-9f21-2d9f8a6e1c55")).unwrap();
        assert_eq!(
            text,
            EntryId::Text("3f6c0b9a-4f9e-4d38-9f21-2d9f8a6e1c55".to_string())
        );

        assert_eq!(serde_json::to_value(&numeric).unwrap(), json!(42));
    }
}
