//! DynamoDB record store.
//!
//! Implements `wayfarer_core::storage::RecordStore` on a single table keyed
//! by `id`. Date predicates are sent as `FilterExpression`s, so they apply
//! after the key condition and before results are returned.

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;

use wayfarer_core::blog::Record;
use wayfarer_core::query::{CategoryIndex, DatePredicate};
use wayfarer_core::storage::{RecordStore, Result};

use super::conversions::{item_to_record, record_to_item, Item};
use super::error::{map_get_item_error, map_put_item_error, map_query_error, map_scan_error};

const CATEGORY_NAME: &str = "#category";
const CATEGORY_VALUE: &str = ":category";

/// DynamoDB-backed record store.
pub struct DynamoDbStore {
    client: Client,
    table_name: String,
}

impl DynamoDbStore {
    /// Creates a new store with the given DynamoDB client and table name.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Creates a store using the AWS SDK default credential chain.
    pub async fn connect(table_name: impl Into<String>) -> Self {
        let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        Self::new(Client::new(&config), table_name)
    }

    /// Get the table name.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

/// Attribute values bound by a predicate's filter expression.
fn predicate_values(predicate: &DatePredicate) -> impl Iterator<Item = (&'static str, AttributeValue)> {
    predicate
        .expression_values()
        .into_iter()
        .map(|(placeholder, millis)| (placeholder, AttributeValue::N(millis.to_string())))
}

fn to_records(items: Vec<Item>) -> Result<Vec<Record>> {
    items.iter().map(item_to_record).collect()
}

#[async_trait]
impl RecordStore for DynamoDbStore {
    async fn get_by_key(&self, id: &str) -> Result<Option<Record>> {
        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key("id", AttributeValue::S(id.to_string()))
            .send()
            .await
            .map_err(map_get_item_error)?;

        result.item.as_ref().map(item_to_record).transpose()
    }

    async fn query_index(
        &self,
        index: &CategoryIndex,
        key: &str,
        predicate: Option<&DatePredicate>,
    ) -> Result<Vec<Record>> {
        let mut request = self
            .client
            .query()
            .table_name(&self.table_name)
            .index_name(&index.name)
            .key_condition_expression(format!("{CATEGORY_NAME} = {CATEGORY_VALUE}"))
            .expression_attribute_names(CATEGORY_NAME, &index.key_attribute)
            .expression_attribute_values(CATEGORY_VALUE, AttributeValue::S(key.to_string()));

        if let Some(predicate) = predicate {
            request = request.filter_expression(predicate.expression());
            for (placeholder, value) in predicate_values(predicate) {
                request = request.expression_attribute_values(placeholder, value);
            }
        }

        tracing::debug!(
            table = %self.table_name,
            index = %index.name,
            key,
            filter = ?predicate.map(DatePredicate::expression),
            "DynamoDB query"
        );

        let mut records = Vec::new();
        let mut start_key = None;
        loop {
            let page = request
                .clone()
                .set_exclusive_start_key(start_key.take())
                .send()
                .await
                .map_err(map_query_error)?;

            records.extend(to_records(page.items.unwrap_or_default())?);

            match page.last_evaluated_key {
                Some(key) if !key.is_empty() => start_key = Some(key),
                _ => break,
            }
        }

        Ok(records)
    }

    async fn scan_all(&self, predicate: Option<&DatePredicate>) -> Result<Vec<Record>> {
        let mut request = self.client.scan().table_name(&self.table_name);

        if let Some(predicate) = predicate {
            request = request.filter_expression(predicate.expression());
            for (placeholder, value) in predicate_values(predicate) {
                request = request.expression_attribute_values(placeholder, value);
            }
        }

        tracing::debug!(
            table = %self.table_name,
            filter = ?predicate.map(DatePredicate::expression),
            "DynamoDB scan"
        );

        let mut records = Vec::new();
        let mut start_key = None;
        loop {
            let page = request
                .clone()
                .set_exclusive_start_key(start_key.take())
                .send()
                .await
                .map_err(map_scan_error)?;

            records.extend(to_records(page.items.unwrap_or_default())?);

            match page.last_evaluated_key {
                Some(key) if !key.is_empty() => start_key = Some(key),
                _ => break,
            }
        }

        Ok(records)
    }

    async fn put(&self, record: &Record) -> Result<()> {
        let item = record_to_item(record)?;

        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .send()
            .await
            .map_err(map_put_item_error)?;

        Ok(())
    }
}
