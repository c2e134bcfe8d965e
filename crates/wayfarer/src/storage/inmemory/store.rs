use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use wayfarer_core::blog::Record;
use wayfarer_core::query::{CategoryIndex, DatePredicate};
use wayfarer_core::storage::{RecordStore, Result, StoreError};

/// In-memory record store.
///
/// Knows exactly one secondary index, the one it was created with; querying
/// any other index is rejected the way a real table would reject it. Records
/// come back ordered by id.
#[derive(Debug, Clone)]
pub struct InMemoryStore {
    records: Arc<RwLock<BTreeMap<String, Record>>>,
    index: CategoryIndex,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new(CategoryIndex::default())
    }
}

impl InMemoryStore {
    /// Creates an empty store serving `index`.
    pub fn new(index: CategoryIndex) -> Self {
        Self {
            records: Arc::new(RwLock::new(BTreeMap::new())),
            index,
        }
    }

    /// Creates a store pre-populated with `records`.
    pub fn with_records(index: CategoryIndex, records: impl IntoIterator<Item = Record>) -> Self {
        let records = records
            .into_iter()
            .map(|record| (record.id.clone(), record))
            .collect();

        Self {
            records: Arc::new(RwLock::new(records)),
            index,
        }
    }
}

/// Keeps the records satisfying `predicate`.
///
/// Records with a string timestamp never satisfy a predicate; they are
/// counted and reported rather than silently converted.
fn apply<'a>(
    records: impl Iterator<Item = &'a Record>,
    predicate: Option<&DatePredicate>,
) -> Vec<Record> {
    let Some(predicate) = predicate else {
        return records.cloned().collect();
    };

    let mut skipped_legacy = 0;
    let matched = records
        .filter(|record| {
            let matches = predicate.matches(&record.created_at);
            if !matches && record.created_at.is_legacy() {
                skipped_legacy += 1;
            }
            matches
        })
        .cloned()
        .collect();

    if skipped_legacy > 0 {
        tracing::warn!(
            skipped_legacy,
            "Excluded records whose createdAt is not epoch milliseconds"
        );
    }

    matched
}

#[async_trait]
impl RecordStore for InMemoryStore {
    async fn get_by_key(&self, id: &str) -> Result<Option<Record>> {
        let records = self.records.read().await;
        Ok(records.get(id).cloned())
    }

    async fn query_index(
        &self,
        index: &CategoryIndex,
        key: &str,
        predicate: Option<&DatePredicate>,
    ) -> Result<Vec<Record>> {
        if index.name != self.index.name {
            return Err(StoreError::Request(format!(
                "The table does not have the specified index: {}",
                index.name
            )));
        }

        let records = self.records.read().await;
        let in_category = records
            .values()
            .filter(|record| record.get_str(&index.key_attribute) == Some(key));

        Ok(apply(in_category, predicate))
    }

    async fn scan_all(&self, predicate: Option<&DatePredicate>) -> Result<Vec<Record>> {
        let records = self.records.read().await;
        Ok(apply(records.values(), predicate))
    }

    async fn put(&self, record: &Record) -> Result<()> {
        let mut records = self.records.write().await;
        records.insert(record.id.clone(), record.clone());
        Ok(())
    }
}
