use url::Url;

use crate::AuthError;

const DEFAULT_REGION: &str = "eu-west-2";

/// Cognito user pool whose tokens are accepted for writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CognitoConfig {
    pub region: String,
    pub user_pool_id: String,
}

impl CognitoConfig {
    pub fn new(region: impl Into<String>, user_pool_id: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            user_pool_id: user_pool_id.into(),
        }
    }

    /// Load from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `COGNITO_USER_POOL_ID`: user pool ID (optional; `None` when unset)
    /// - `COGNITO_REGION`: AWS region of the pool (default: `eu-west-2`)
    pub fn from_env() -> Option<Self> {
        let user_pool_id = std::env::var("COGNITO_USER_POOL_ID")
            .ok()
            .filter(|id| !id.trim().is_empty())?;
        let region =
            std::env::var("COGNITO_REGION").unwrap_or_else(|_| DEFAULT_REGION.to_string());

        Some(Self::new(region, user_pool_id))
    }

    /// Expected `iss` claim of tokens issued by the pool.
    pub fn issuer(&self) -> String {
        format!(
            "https://cognito-idp.{}.amazonaws.com/{}",
            self.region, self.user_pool_id
        )
    }

    /// Where the pool publishes its signing keys.
    pub fn jwks_url(&self) -> Result<Url, AuthError> {
        let url = format!("{}/.well-known/jwks.json", self.issuer());
        Url::parse(&url).map_err(|e| AuthError::Config(format!("Invalid JWKS URL {url}: {e}")))
    }
}
