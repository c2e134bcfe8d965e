use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Creation timestamp as held by the store.
///
/// New records are written as epoch milliseconds. Older items may carry an
/// ISO-8601 string instead, so both are accepted on read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CreatedAt {
    Millis(i64),
    Iso(String),
}

impl CreatedAt {
    /// Epoch milliseconds, when stored in the numeric representation.
    pub fn as_millis(&self) -> Option<i64> {
        match self {
            Self::Millis(millis) => Some(*millis),
            Self::Iso(_) => None,
        }
    }

    /// True for the legacy string representation.
    pub fn is_legacy(&self) -> bool {
        matches!(self, Self::Iso(_))
    }
}

/// A blog post as stored.
///
/// Only `id` and `createdAt` are mandatory; everything else (title, body,
/// journey, tags, image, ...) is carried verbatim in `fields`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: String,
    #[serde(rename = "createdAt")]
    pub created_at: CreatedAt,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Record {
    /// Looks up an additional field.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// String value of an additional field, e.g. the category attribute.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }
}

/// Caller-supplied fields for a new record.
///
/// Any `id` or `createdAt` present here is discarded on creation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordDraft(Map<String, Value>);

impl RecordDraft {
    /// Adds or replaces a field.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn into_fields(self) -> Map<String, Value> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_accepts_numeric_created_at() {
        let record: Record = serde_json::from_value(json!({
            "id": "123",
            "createdAt": 1715318400000_i64,
            "title": "Blog Post 1",
            "journey": "europe",
        }))
        .unwrap();

        assert_eq!(record.id, "123");
        assert_eq!(record.created_at, CreatedAt::Millis(1_715_318_400_000));
        assert_eq!(record.get_str("journey"), Some("europe"));
        assert!(!record.fields.contains_key("id"));
        assert!(!record.fields.contains_key("createdAt"));
    }

    #[test]
    fn test_record_accepts_iso_created_at() {
        let record: Record = serde_json::from_value(json!({
            "id": "123",
            "createdAt": "2024-06-15T15:00:00Z",
            "tags": ["test", "blog"],
        }))
        .unwrap();

        assert_eq!(
            record.created_at,
            CreatedAt::Iso("2024-06-15T15:00:00Z".to_string())
        );
        assert!(record.created_at.is_legacy());
        assert_eq!(record.created_at.as_millis(), None);
        assert_eq!(record.get("tags"), Some(&json!(["test", "blog"])));
    }

    #[test]
    fn test_record_requires_id_and_created_at() {
        assert!(serde_json::from_value::<Record>(json!({"createdAt": 1})).is_err());
        assert!(serde_json::from_value::<Record>(json!({"id": "1"})).is_err());
    }

    #[test]
    fn test_record_serializes_flat() {
        let record = Record {
            id: "abc".to_string(),
            created_at: CreatedAt::Millis(42),
            fields: RecordDraft::default().with("title", "Hello").into_fields(),
        };

        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({"id": "abc", "createdAt": 42, "title": "Hello"})
        );
    }

    #[test]
    fn test_draft_deserializes_from_object() {
        let draft: RecordDraft =
            serde_json::from_value(json!({"title": "Hi", "journey": "asia"})).unwrap();
        let fields = draft.into_fields();

        assert_eq!(fields.get("title"), Some(&json!("Hi")));
        assert_eq!(fields.get("journey"), Some(&json!("asia")));
    }
}
