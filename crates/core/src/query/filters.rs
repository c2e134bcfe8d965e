use serde::Deserialize;

use crate::serde::deserialize_optional_string;

/// User-facing filters for listing records.
///
/// Every field is independent and any subset (including none) is valid.
/// On the wire the category is called `journey`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FilterSet {
    #[serde(
        default,
        rename = "journey",
        deserialize_with = "deserialize_optional_string"
    )]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub start: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub end: Option<String>,
}

impl FilterSet {
    /// Filters on the category index key only.
    pub fn by_category(category: impl Into<String>) -> Self {
        Self {
            category: Some(category.into()),
            ..Self::default()
        }
    }

    /// Filters on an inclusive date range only.
    pub fn by_date_range(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            category: None,
            start: Some(start.into()),
            end: Some(end.into()),
        }
    }

    pub fn with_start(mut self, start: impl Into<String>) -> Self {
        self.start = Some(start.into());
        self
    }

    pub fn with_end(mut self, end: impl Into<String>) -> Self {
        self.end = Some(end.into());
        self
    }

    /// True when no filter is set at all.
    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.start.is_none() && self.end.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_journey_as_category() {
        let json = r#"{"journey": "europe", "start": "2024-06-01"}"#;
        let filters: FilterSet = serde_json::from_str(json).unwrap();

        assert_eq!(filters.category.as_deref(), Some("europe"));
        assert_eq!(filters.start.as_deref(), Some("2024-06-01"));
        assert_eq!(filters.end, None);
    }

    #[test]
    fn test_blank_parameters_are_absent() {
        let json = r#"{"journey": "", "start": " ", "end": ""}"#;
        let filters: FilterSet = serde_json::from_str(json).unwrap();

        assert!(filters.is_empty());
        assert_eq!(filters, FilterSet::default());
    }

    #[test]
    fn test_builders() {
        let filters = FilterSet::by_category("asia")
            .with_start("2024-07-01")
            .with_end("2024-08-05");

        assert_eq!(filters.category.as_deref(), Some("asia"));
        assert_eq!(filters.start.as_deref(), Some("2024-07-01"));
        assert_eq!(filters.end.as_deref(), Some("2024-08-05"));
        assert!(!filters.is_empty());

        let range = FilterSet::by_date_range("2024-06-01", "2024-07-31");
        assert_eq!(range.category, None);
    }
}
