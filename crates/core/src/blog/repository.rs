//! Record repository: the operations callers use to read and create posts.

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::auth::Claims;
use crate::query::{AccessPlan, CategoryIndex, FilterPlanner, FilterSet, CREATED_AT_ATTRIBUTE};
use crate::storage::RecordStore;

use super::{CreatedAt, Record, RecordDraft, Result};

/// Repository configuration, resolved once at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepositoryConfig {
    /// The secondary index keyed by category.
    pub category_index: CategoryIndex,
}

/// Reads and creates records through a [`RecordStore`].
///
/// Every read goes through an [`AccessPlan`], so the cheapest access path
/// available for the request is the one used. Nothing here updates or deletes.
#[derive(Clone)]
pub struct RecordRepository {
    store: Arc<dyn RecordStore>,
    planner: FilterPlanner,
}

impl RecordRepository {
    pub fn new(store: Arc<dyn RecordStore>, config: RepositoryConfig) -> Self {
        Self {
            store,
            planner: FilterPlanner::new(config.category_index),
        }
    }

    /// Gets a record by id. A missing record is `Ok(None)`.
    pub async fn get_by_id(&self, id: &str) -> Result<Option<Record>> {
        let records = self.execute(&AccessPlan::point_lookup(id)).await?;
        Ok(records.into_iter().next())
    }

    /// Lists the records matching `filters`.
    ///
    /// `None` and an empty filter set are equivalent and list every record.
    pub async fn list_by_filters(&self, filters: Option<&FilterSet>) -> Result<Vec<Record>> {
        let default_filters = FilterSet::default();
        let filters = filters.unwrap_or(&default_filters);

        let plan = self.planner.plan(filters)?;
        self.execute(&plan).await
    }

    /// Lists the records created within an inclusive date range.
    ///
    /// Bare dates cover their whole day.
    pub async fn list_by_date_range(&self, start: &str, end: &str) -> Result<Vec<Record>> {
        self.list_by_filters(Some(&FilterSet::by_date_range(start, end)))
            .await
    }

    /// Creates a record from caller-supplied fields.
    ///
    /// The id and creation timestamp are always assigned here; any values the
    /// caller supplied for them are dropped.
    pub async fn create(&self, draft: RecordDraft, claims: &Claims) -> Result<Record> {
        let mut fields = draft.into_fields();
        fields.remove("id");
        fields.remove(CREATED_AT_ATTRIBUTE);

        let record = Record {
            id: Uuid::new_v4().to_string(),
            created_at: CreatedAt::Millis(Utc::now().timestamp_millis()),
            fields,
        };

        self.store.put(&record).await?;

        tracing::info!(id = %record.id, subject = %claims.subject, "Created record");
        Ok(record)
    }

    /// Runs a plan against the store.
    pub async fn execute(&self, plan: &AccessPlan) -> Result<Vec<Record>> {
        let records = match plan {
            AccessPlan::PointLookup { id } => {
                self.store.get_by_key(id).await?.into_iter().collect()
            }
            AccessPlan::IndexedQuery {
                index,
                category,
                predicate,
            } => {
                self.store
                    .query_index(index, category, predicate.as_ref())
                    .await?
            }
            AccessPlan::FilteredScan { predicate } => self.store.scan_all(Some(predicate)).await?,
            AccessPlan::UnfilteredScan => self.store.scan_all(None).await?,
        };

        let legacy = legacy_under_predicate(plan, &records);
        if legacy > 0 {
            tracing::warn!(
                plan = plan.kind(),
                legacy,
                "Store returned records with string createdAt for a date filter"
            );
        }

        tracing::debug!(plan = plan.kind(), count = records.len(), "Executed plan");
        Ok(records)
    }
}

/// Counts string-timestamp records in a result produced under a date
/// predicate. Plans without a predicate never count any.
fn legacy_under_predicate(plan: &AccessPlan, records: &[Record]) -> usize {
    if plan.predicate().is_none() {
        return 0;
    }

    records
        .iter()
        .filter(|record| record.created_at.is_legacy())
        .count()
}
