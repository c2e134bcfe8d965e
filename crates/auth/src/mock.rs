//! Static-token authenticator for local development and testing.
//!
//! Accepts exactly one configured token and answers with fixed claims, so the
//! write path can be exercised without a Cognito user pool.

use async_trait::async_trait;
use wayfarer_core::auth::{strip_bearer, Authenticator, Claims, Result};

/// Authenticator that trusts a single static token.
pub struct MockAuthenticator {
    token: String,
    claims: Claims,
}

impl MockAuthenticator {
    /// Accept `token` and identify its bearer as `subject`.
    pub fn new(token: impl Into<String>, subject: impl Into<String>) -> Self {
        let subject = subject.into();
        Self {
            token: token.into(),
            claims: Claims {
                username: Some(subject.clone()),
                subject,
                issuer: "wayfarer-mock".to_string(),
                email: None,
                token_use: Some("id".to_string()),
                expires_at: u64::MAX,
            },
        }
    }
}

#[async_trait]
impl Authenticator for MockAuthenticator {
    async fn verify(&self, credential: Option<&str>) -> Result<Option<Claims>> {
        let accepted = credential
            .and_then(strip_bearer)
            .is_some_and(|token| token == self.token);

        if !accepted {
            tracing::debug!("Mock authenticator rejected credential");
        }

        Ok(accepted.then(|| self.claims.clone()))
    }
}
