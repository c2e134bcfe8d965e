//! Demo posts for seeding development stores and tests.

use serde_json::{json, Map, Value};

use super::{CreatedAt, Record};

/// Five posts across three journeys, dated May to August 2024.
///
/// | id  | journey | createdAt (UTC)  |
/// |-----|---------|------------------|
/// | 123 | europe  | 2024-05-10 05:20 |
/// | 124 | europe  | 2024-06-03 06:40 |
/// | 125 | asia    | 2024-07-10 05:20 |
/// | 126 | asia    | 2024-08-02 05:20 |
/// | 127 | africa  | 2024-08-10 05:20 |
///
/// ```
/// use wayfarer_core::blog::seed_records;
///
/// let records = seed_records();
/// assert_eq!(records.len(), 5);
/// assert_eq!(records.iter().filter(|r| r.get_str("journey") == Some("europe")).count(), 2);
/// ```
pub fn seed_records() -> Vec<Record> {
    vec![
        post(
            "123",
            1_715_318_400_000,
            "Test Author",
            "europe",
            &["travel", "europe"],
        ),
        post(
            "124",
            1_717_396_800_000,
            "Test Author",
            "europe",
            &["travel", "food"],
        ),
        post(
            "125",
            1_720_588_800_000,
            "Another Author",
            "asia",
            &["travel", "asia"],
        ),
        post(
            "126",
            1_722_576_000_000,
            "Another Author",
            "asia",
            &["travel", "food"],
        ),
        post(
            "127",
            1_723_267_200_000,
            "Third Author",
            "africa",
            &["travel", "africa"],
        ),
    ]
}

fn post(id: &str, created_at: i64, username: &str, journey: &str, tags: &[&str]) -> Record {
    let n = id.parse::<u32>().map(|n| n.saturating_sub(122)).unwrap_or_default();

    let mut fields = Map::new();
    fields.insert("title".to_string(), json!(format!("Blog Post {n}")));
    fields.insert(
        "body".to_string(),
        json!(format!("Content for blog post {n}")),
    );
    fields.insert(
        "description".to_string(),
        json!(format!("Summary for blog post {n}")),
    );
    fields.insert("username".to_string(), json!(username));
    fields.insert("journey".to_string(), json!(journey));
    fields.insert(
        "tags".to_string(),
        Value::Array(tags.iter().map(|tag| json!(tag)).collect()),
    );
    fields.insert("image".to_string(), json!(format!("image{n}.png")));

    Record {
        id: id.to_string(),
        created_at: CreatedAt::Millis(created_at),
        fields,
    }
}
