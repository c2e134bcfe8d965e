use async_trait::async_trait;

use crate::blog::Record;
use crate::query::{CategoryIndex, DatePredicate};

use super::Result;

/// Narrow interface over the partitioned key-value store holding records.
///
/// Implementations own timeouts and retries; callers see each method as a
/// single call that either succeeds or fails.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Gets a record by its partition key. Absence is `Ok(None)`.
    async fn get_by_key(&self, id: &str) -> Result<Option<Record>>;

    /// Gets every record at `key` on the category index that passes
    /// `predicate`, in store-defined order.
    async fn query_index(
        &self,
        index: &CategoryIndex,
        key: &str,
        predicate: Option<&DatePredicate>,
    ) -> Result<Vec<Record>>;

    /// Gets every record in the store that passes `predicate`, in
    /// store-defined order.
    async fn scan_all(&self, predicate: Option<&DatePredicate>) -> Result<Vec<Record>>;

    /// Writes a record, replacing any record with the same id.
    async fn put(&self, record: &Record) -> Result<()>;
}
