//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB `AttributeValue` maps and
//! records. Posts are schemaless beyond `id` and `createdAt`, so conversion
//! goes through `serde_json::Value`. Testable without DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use serde_json::{Map, Number, Value};
use wayfarer_core::blog::Record;
use wayfarer_core::storage::StoreError;

pub type Item = HashMap<String, AttributeValue>;

/// Convert a record to a DynamoDB item.
pub fn record_to_item(record: &Record) -> Result<Item, StoreError> {
    match serde_json::to_value(record) {
        Ok(Value::Object(fields)) => Ok(fields
            .iter()
            .map(|(key, value)| (key.clone(), json_to_attribute(value)))
            .collect()),
        Ok(_) => Err(StoreError::Request(format!(
            "Record {} did not serialize to an object",
            record.id
        ))),
        Err(e) => Err(StoreError::Request(format!(
            "Failed to serialize record {}: {e}",
            record.id
        ))),
    }
}

/// Convert a DynamoDB item to a record.
pub fn item_to_record(item: &Item) -> Result<Record, StoreError> {
    let fields = item
        .iter()
        .map(|(key, value)| attribute_to_json(value).map(|json| (key.clone(), json)))
        .collect::<Result<Map<String, Value>, _>>()?;

    serde_json::from_value(Value::Object(fields))
        .map_err(|e| StoreError::Request(format!("Malformed stored item: {e}")))
}

/// Convert a JSON value to an attribute value.
pub fn json_to_attribute(value: &Value) -> AttributeValue {
    match value {
        Value::Null => AttributeValue::Null(true),
        Value::Bool(b) => AttributeValue::Bool(*b),
        Value::Number(n) => AttributeValue::N(n.to_string()),
        Value::String(s) => AttributeValue::S(s.clone()),
        Value::Array(values) => AttributeValue::L(values.iter().map(json_to_attribute).collect()),
        Value::Object(fields) => AttributeValue::M(
            fields
                .iter()
                .map(|(key, value)| (key.clone(), json_to_attribute(value)))
                .collect(),
        ),
    }
}

/// Convert an attribute value to JSON.
///
/// Binary attributes have no JSON counterpart and are rejected.
pub fn attribute_to_json(value: &AttributeValue) -> Result<Value, StoreError> {
    match value {
        AttributeValue::S(s) => Ok(Value::String(s.clone())),
        AttributeValue::N(n) => parse_number(n).map(Value::Number),
        AttributeValue::Bool(b) => Ok(Value::Bool(*b)),
        AttributeValue::Null(_) => Ok(Value::Null),
        AttributeValue::L(values) => values
            .iter()
            .map(attribute_to_json)
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        AttributeValue::M(fields) => fields
            .iter()
            .map(|(key, value)| attribute_to_json(value).map(|json| (key.clone(), json)))
            .collect::<Result<Map<_, _>, _>>()
            .map(Value::Object),
        AttributeValue::Ss(values) => Ok(Value::Array(
            values.iter().cloned().map(Value::String).collect(),
        )),
        AttributeValue::Ns(values) => values
            .iter()
            .map(|n| parse_number(n).map(Value::Number))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        other => Err(StoreError::Request(format!(
            "Unsupported attribute type: {other:?}"
        ))),
    }
}

/// DynamoDB numbers are decimal strings; integers stay integers.
fn parse_number(n: &str) -> Result<Number, StoreError> {
    if let Ok(int) = n.parse::<i64>() {
        return Ok(Number::from(int));
    }
    if let Ok(uint) = n.parse::<u64>() {
        return Ok(Number::from(uint));
    }

    n.parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .ok_or_else(|| StoreError::Request(format!("Invalid number attribute: {n}")))
}
