//! Cognito authenticator.
//!
//! Verifies RS256 ID/access tokens issued by a Cognito user pool. Signing
//! keys are fetched from the pool's JWKS endpoint on first use and cached for
//! the lifetime of the authenticator.

use std::time::Duration;

use async_trait::async_trait;
use jsonwebtoken::{decode, decode_header, jwk::JwkSet, Algorithm, DecodingKey, Header, Validation};
use tokio::sync::RwLock;
use url::Url;
use wayfarer_core::auth::{strip_bearer, Authenticator, Claims, Result};

use crate::{AuthError, CognitoConfig};

const JWKS_TIMEOUT: Duration = Duration::from_secs(5);

/// Verifies tokens against a Cognito user pool.
pub struct CognitoAuthenticator {
    issuer: String,
    jwks_url: Url,
    http_client: reqwest::Client,
    jwks: RwLock<Option<JwkSet>>,
}

impl CognitoAuthenticator {
    /// Create an authenticator that fetches signing keys lazily.
    ///
    /// # Errors
    ///
    /// Returns an error if the JWKS URL is invalid or the HTTP client cannot
    /// be built.
    pub fn new(config: &CognitoConfig) -> std::result::Result<Self, AuthError> {
        let http_client = reqwest::Client::builder()
            .timeout(JWKS_TIMEOUT)
            .build()
            .map_err(|e| AuthError::Http(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            issuer: config.issuer(),
            jwks_url: config.jwks_url()?,
            http_client,
            jwks: RwLock::new(None),
        })
    }

    /// Create an authenticator with a known key set; nothing is fetched.
    pub fn with_jwks(config: &CognitoConfig, jwks: JwkSet) -> std::result::Result<Self, AuthError> {
        let authenticator = Self::new(config)?;
        Ok(Self {
            jwks: RwLock::new(Some(jwks)),
            ..authenticator
        })
    }

    async fn jwks(&self) -> std::result::Result<JwkSet, AuthError> {
        if let Some(jwks) = self.jwks.read().await.as_ref() {
            return Ok(jwks.clone());
        }

        tracing::debug!(url = %self.jwks_url, "Fetching JWKS");
        let jwks: JwkSet = self
            .http_client
            .get(self.jwks_url.clone())
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|e| AuthError::Http(format!("Failed to fetch JWKS: {e}")))?
            .json()
            .await
            .map_err(|e| AuthError::Http(format!("Invalid JWKS document: {e}")))?;

        *self.jwks.write().await = Some(jwks.clone());
        Ok(jwks)
    }

    /// Checks signature, algorithm, expiry and issuer.
    fn decode_claims(&self, token: &str, header: &Header, jwks: &JwkSet) -> Option<Claims> {
        let Some(kid) = header.kid.as_deref() else {
            tracing::debug!("Token header has no key id");
            return None;
        };

        let Some(jwk) = jwks.find(kid) else {
            tracing::debug!(kid, "Token signed with unknown key");
            return None;
        };

        let key = DecodingKey::from_jwk(jwk)
            .map_err(|e| tracing::warn!(kid, error = %e, "Unusable signing key"))
            .ok()?;

        let mut validation = Validation::new(Algorithm::RS256);
        validation.set_issuer(&[&self.issuer]);
        validation.validate_aud = false;

        decode::<Claims>(token, &key, &validation)
            .map(|data| data.claims)
            .map_err(|e| tracing::debug!(error = %e, "Token verification failed"))
            .ok()
    }
}

#[async_trait]
impl Authenticator for CognitoAuthenticator {
    async fn verify(&self, credential: Option<&str>) -> Result<Option<Claims>> {
        let Some(token) = credential.and_then(strip_bearer) else {
            return Ok(None);
        };

        // Garbage never costs a key fetch.
        let Ok(header) = decode_header(token) else {
            tracing::debug!("Malformed token");
            return Ok(None);
        };

        let jwks = self.jwks().await?;
        Ok(self.decode_claims(token, &header, &jwks))
    }
}
