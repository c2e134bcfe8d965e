use async_trait::async_trait;

use super::{AuthError, Claims};

/// Result type for auth operations.
pub type Result<T> = std::result::Result<T, AuthError>;

/// Verifies raw identity credentials issued by an external provider.
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Verifies a raw credential.
    ///
    /// Returns `Ok(None)` when the credential is absent, malformed, expired,
    /// signed with an unknown key or otherwise invalid. `Err` is reserved
    /// for the authenticator failing to reach a decision.
    async fn verify(&self, credential: Option<&str>) -> Result<Option<Claims>>;
}
