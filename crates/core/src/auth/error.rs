use thiserror::Error;

/// Failures of the authenticator itself.
///
/// A credential that simply does not verify is not an error: it yields no
/// claims. These variants cover the authenticator being unable to decide.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Authenticator unavailable: {0}")]
    Unavailable(String),
}
