//! Identity token verification for wayfarer.
//!
//! This crate provides:
//! - A Cognito authenticator verifying RS256 JWTs against the pool's JWKS
//! - A static-token authenticator for local development (`mock` feature)

mod cognito;
mod config;
mod error;
#[cfg(feature = "mock")]
mod mock;

pub use cognito::CognitoAuthenticator;
pub use config::CognitoConfig;
pub use error::AuthError;
#[cfg(feature = "mock")]
pub use mock::MockAuthenticator;
