//! Application state shared by every request handler.
//!
//! Holds the record repository and the write gatekeeper. The record store
//! behind them is chosen at compile time via feature flags; the
//! authenticator is chosen at startup from configuration.

use std::sync::Arc;

use async_trait::async_trait;

use wayfarer_auth::CognitoAuthenticator;
use wayfarer_core::auth::{Authenticator, Claims};
use wayfarer_core::blog::{RecordRepository, WriteGatekeeper};
use wayfarer_core::storage::RecordStore;

use crate::config::Config;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub repository: Arc<RecordRepository>,
    pub gatekeeper: WriteGatekeeper,
}

impl AppState {
    /// Creates a new AppState from explicit collaborators.
    pub fn new(
        store: Arc<dyn RecordStore>,
        authenticator: Arc<dyn Authenticator>,
        config: &Config,
    ) -> Self {
        let repository = Arc::new(RecordRepository::new(store, config.repository_config()));
        let gatekeeper = WriteGatekeeper::new(authenticator, repository.clone());

        Self {
            repository,
            gatekeeper,
        }
    }

    /// Builds the state for the configured backends.
    pub async fn from_config(config: &Config) -> anyhow::Result<Self> {
        let store = build_store(config).await;
        let authenticator = build_authenticator(config)?;
        Ok(Self::new(store, authenticator, config))
    }
}

#[cfg(feature = "inmemory")]
async fn build_store(config: &Config) -> Arc<dyn RecordStore> {
    use crate::storage::inmemory::InMemoryStore;
    use wayfarer_core::blog::seed_records;

    let records = seed_records();
    tracing::info!(records = records.len(), "Using in-memory store with demo posts");
    Arc::new(InMemoryStore::with_records(
        config.category_index.clone(),
        records,
    ))
}

#[cfg(feature = "dynamodb")]
async fn build_store(config: &Config) -> Arc<dyn RecordStore> {
    use crate::storage::dynamodb::DynamoDbStore;

    let store = DynamoDbStore::connect(&config.table_name).await;
    tracing::info!(table = %store.table_name(), "Using DynamoDB store");
    Arc::new(store)
}

#[cfg(feature = "auth-mock")]
fn mock_authenticator(config: &Config) -> Option<Arc<dyn Authenticator>> {
    let token = config.mock_auth_token.as_ref()?;
    tracing::warn!("Accepting MOCK_AUTH_TOKEN for writes");
    Some(Arc::new(wayfarer_auth::MockAuthenticator::new(
        token.clone(),
        "mock-user",
    )))
}

#[cfg(not(feature = "auth-mock"))]
fn mock_authenticator(_config: &Config) -> Option<Arc<dyn Authenticator>> {
    None
}

fn build_authenticator(config: &Config) -> anyhow::Result<Arc<dyn Authenticator>> {
    if let Some(authenticator) = mock_authenticator(config) {
        return Ok(authenticator);
    }

    match &config.cognito {
        Some(cognito) => {
            tracing::info!(issuer = %cognito.issuer(), "Verifying writes against Cognito");
            Ok(Arc::new(CognitoAuthenticator::new(cognito)?))
        }
        None => {
            tracing::warn!("COGNITO_USER_POOL_ID is not set; every write will be rejected");
            Ok(Arc::new(RejectAll))
        }
    }
}

/// Authenticator used when no identity provider is configured.
struct RejectAll;

#[async_trait]
impl Authenticator for RejectAll {
    async fn verify(&self, _credential: Option<&str>) -> wayfarer_core::auth::Result<Option<Claims>> {
        Ok(None)
    }
}
