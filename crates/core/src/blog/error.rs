use thiserror::Error;

use crate::auth::AuthError;
use crate::storage::StoreError;

/// Errors surfaced by the blog repository and write gatekeeper.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BlogError {
    #[error("Malformed date: {input:?}")]
    MalformedDate { input: String },
    #[error("A valid identity token is required")]
    Unauthorized,
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Authenticator(#[from] AuthError),
}

/// Result type for blog operations.
pub type Result<T> = std::result::Result<T, BlogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_date_display() {
        let error = BlogError::MalformedDate {
            input: "31/07/2024".to_string(),
        };
        assert_eq!(error.to_string(), "Malformed date: \"31/07/2024\"");
    }

    #[test]
    fn test_unauthorized_display() {
        assert_eq!(
            BlogError::Unauthorized.to_string(),
            "A valid identity token is required"
        );
    }

    #[test]
    fn test_store_error_is_transparent() {
        let error: BlogError = StoreError::Unavailable("throughput exceeded".to_string()).into();
        assert_eq!(error.to_string(), "Store unavailable: throughput exceeded");
    }

    #[test]
    fn test_auth_error_is_transparent() {
        let error: BlogError = AuthError::Unavailable("JWKS timeout".to_string()).into();
        assert_eq!(error.to_string(), "Authenticator unavailable: JWKS timeout");
    }
}
