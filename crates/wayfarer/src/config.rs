use std::env;

use wayfarer_auth::CognitoConfig;
use wayfarer_core::blog::RepositoryConfig;
use wayfarer_core::query::CategoryIndex;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// DynamoDB table holding the posts (default: "blogs")
    pub table_name: String,
    /// Secondary index keyed by journey
    pub category_index: CategoryIndex,
    /// User pool whose tokens may write; `None` rejects every write
    pub cognito: Option<CognitoConfig>,
    /// Static token accepted for writes during local development
    #[cfg(feature = "auth-mock")]
    pub mock_auth_token: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `DYNAMODB_TABLE_NAME` - Table name (default: "blogs")
    /// - `JOURNEY_INDEX_NAME` - Journey index name (default: "journey")
    /// - `JOURNEY_INDEX_ATTRIBUTE` - Attribute the index is keyed on (default: "journey")
    /// - `COGNITO_USER_POOL_ID` - Cognito user pool (optional)
    /// - `COGNITO_REGION` - Cognito region (default: "eu-west-2")
    /// - `MOCK_AUTH_TOKEN` - Static write token (`auth-mock` feature only)
    pub fn from_env() -> Self {
        let defaults = CategoryIndex::default();

        Self {
            table_name: env::var("DYNAMODB_TABLE_NAME").unwrap_or_else(|_| "blogs".to_string()),
            category_index: CategoryIndex::new(
                env::var("JOURNEY_INDEX_NAME").unwrap_or(defaults.name),
                env::var("JOURNEY_INDEX_ATTRIBUTE").unwrap_or(defaults.key_attribute),
            ),
            cognito: CognitoConfig::from_env(),
            #[cfg(feature = "auth-mock")]
            mock_auth_token: env::var("MOCK_AUTH_TOKEN")
                .ok()
                .filter(|token| !token.trim().is_empty()),
        }
    }

    pub fn repository_config(&self) -> RepositoryConfig {
        RepositoryConfig {
            category_index: self.category_index.clone(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            table_name: "blogs".to_string(),
            category_index: CategoryIndex::default(),
            cognito: None,
            #[cfg(feature = "auth-mock")]
            mock_auth_token: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = Config::default();

        assert_eq!(config.table_name, "blogs");
        assert_eq!(config.category_index.name, "journey");
        assert_eq!(config.category_index.key_attribute, "journey");
        assert!(config.cognito.is_none());
    }

    #[test]
    fn test_repository_config_carries_index() {
        let config = Config {
            category_index: CategoryIndex::new("journey-index", "journey"),
            ..Config::default()
        };

        assert_eq!(
            config.repository_config().category_index.name,
            "journey-index"
        );
    }
}
