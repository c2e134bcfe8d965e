use thiserror::Error;

/// Auth errors for the wayfarer_auth crate.
///
/// Wraps the core `AuthError` and adds the I/O and configuration failures
/// that only concrete authenticators run into.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error(transparent)]
    Core(#[from] wayfarer_core::auth::AuthError),

    /// HTTP failure while fetching signing keys
    #[error("HTTP error: {0}")]
    Http(String),

    #[error("configuration error: {0}")]
    Config(String),
}

impl From<AuthError> for wayfarer_core::auth::AuthError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Core(core) => core,
            other => wayfarer_core::auth::AuthError::Unavailable(other.to_string()),
        }
    }
}
