//! Access planning: choosing how to reach the records a filter set selects.
//!
//! The store has a single partition key (`id`) and a single secondary index
//! keyed by category. Date bounds can only ride along with a query when the
//! category key is known; without it, date filtering degrades to a scan.

use crate::blog::{BlogError, CreatedAt};

use super::filters::FilterSet;
use super::timestamp::{normalize, Boundary};

/// Attribute holding the creation timestamp on every record.
pub const CREATED_AT_ATTRIBUTE: &str = "createdAt";

/// Placeholder bound to the lower date bound in filter expressions.
pub const START_PLACEHOLDER: &str = ":start";

/// Placeholder bound to the upper date bound in filter expressions.
pub const END_PLACEHOLDER: &str = ":end";

/// The secondary index keyed by category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryIndex {
    /// Index name as provisioned on the table.
    pub name: String,
    /// Attribute the index is keyed on.
    pub key_attribute: String,
}

impl CategoryIndex {
    pub fn new(name: impl Into<String>, key_attribute: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            key_attribute: key_attribute.into(),
        }
    }
}

impl Default for CategoryIndex {
    fn default() -> Self {
        Self::new("journey", "journey")
    }
}

/// Inclusive bounds on `createdAt`, as epoch milliseconds.
///
/// Always carries at least one bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatePredicate {
    start: Option<i64>,
    end: Option<i64>,
}

impl DatePredicate {
    /// Builds a predicate, or `None` when neither bound is given.
    pub fn new(start: Option<i64>, end: Option<i64>) -> Option<Self> {
        if start.is_none() && end.is_none() {
            return None;
        }
        Some(Self { start, end })
    }

    pub fn start(&self) -> Option<i64> {
        self.start
    }

    pub fn end(&self) -> Option<i64> {
        self.end
    }

    /// Renders the predicate as a store filter expression.
    ///
    /// ```
    /// use wayfarer_core::query::DatePredicate;
    ///
    /// let both = DatePredicate::new(Some(1), Some(2)).unwrap();
    /// assert_eq!(both.expression(), "createdAt >= :start AND createdAt <= :end");
    ///
    /// let upper = DatePredicate::new(None, Some(2)).unwrap();
    /// assert_eq!(upper.expression(), "createdAt <= :end");
    /// ```
    pub fn expression(&self) -> String {
        let mut clauses = Vec::with_capacity(2);
        if self.start.is_some() {
            clauses.push(format!("{CREATED_AT_ATTRIBUTE} >= {START_PLACEHOLDER}"));
        }
        if self.end.is_some() {
            clauses.push(format!("{CREATED_AT_ATTRIBUTE} <= {END_PLACEHOLDER}"));
        }
        clauses.join(" AND ")
    }

    /// Placeholder/value pairs referenced by [`expression`](Self::expression).
    pub fn expression_values(&self) -> Vec<(&'static str, i64)> {
        let mut values = Vec::with_capacity(2);
        if let Some(start) = self.start {
            values.push((START_PLACEHOLDER, start));
        }
        if let Some(end) = self.end {
            values.push((END_PLACEHOLDER, end));
        }
        values
    }

    /// Evaluates the predicate against a stored timestamp.
    ///
    /// Only numeric timestamps can satisfy it: a string timestamp is never
    /// compared against numeric bounds.
    pub fn matches(&self, created_at: &CreatedAt) -> bool {
        let Some(millis) = created_at.as_millis() else {
            return false;
        };
        self.start.is_none_or(|start| millis >= start) && self.end.is_none_or(|end| millis <= end)
    }
}

/// How a request reaches the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessPlan {
    /// Direct lookup on the partition key.
    PointLookup { id: String },
    /// Query on the category index, optionally post-filtered by date.
    IndexedQuery {
        index: CategoryIndex,
        category: String,
        predicate: Option<DatePredicate>,
    },
    /// Full scan filtered by date.
    FilteredScan { predicate: DatePredicate },
    /// Full scan returning everything.
    UnfilteredScan,
}

impl AccessPlan {
    pub fn point_lookup(id: impl Into<String>) -> Self {
        Self::PointLookup { id: id.into() }
    }

    /// Short name used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::PointLookup { .. } => "point_lookup",
            Self::IndexedQuery { .. } => "indexed_query",
            Self::FilteredScan { .. } => "filtered_scan",
            Self::UnfilteredScan => "unfiltered_scan",
        }
    }

    /// The date predicate attached to the plan, if any.
    pub fn predicate(&self) -> Option<&DatePredicate> {
        match self {
            Self::IndexedQuery { predicate, .. } => predicate.as_ref(),
            Self::FilteredScan { predicate } => Some(predicate),
            Self::PointLookup { .. } | Self::UnfilteredScan => None,
        }
    }
}

/// Maps filter sets onto access plans.
#[derive(Debug, Clone, Default)]
pub struct FilterPlanner {
    index: CategoryIndex,
}

impl FilterPlanner {
    pub fn new(index: CategoryIndex) -> Self {
        Self { index }
    }

    /// Selects the access plan for a filter set.
    ///
    /// 1. A category uses the category index; date bounds become a filter on
    ///    the query.
    /// 2. Date bounds alone become a filtered scan.
    /// 3. No filters at all is an unfiltered scan.
    ///
    /// Fails only when a date bound is malformed.
    pub fn plan(&self, filters: &FilterSet) -> Result<AccessPlan, BlogError> {
        let predicate = date_predicate(filters)?;

        let plan = match (&filters.category, predicate) {
            (Some(category), predicate) => AccessPlan::IndexedQuery {
                index: self.index.clone(),
                category: category.clone(),
                predicate,
            },
            (None, Some(predicate)) => AccessPlan::FilteredScan { predicate },
            (None, None) => AccessPlan::UnfilteredScan,
        };

        tracing::debug!(
            plan = plan.kind(),
            category = ?filters.category,
            start = ?plan.predicate().and_then(DatePredicate::start),
            end = ?plan.predicate().and_then(DatePredicate::end),
            "Planned record access"
        );

        Ok(plan)
    }
}

fn date_predicate(filters: &FilterSet) -> Result<Option<DatePredicate>, BlogError> {
    let start = filters
        .start
        .as_deref()
        .map(|s| normalize(s, Boundary::Start))
        .transpose()?;
    let end = filters
        .end
        .as_deref()
        .map(|s| normalize(s, Boundary::End))
        .transpose()?;

    Ok(DatePredicate::new(start, end))
}
