//! Pure functions for mapping blog errors to HTTP status codes.

use crate::storage::StoreError;

use super::BlogError;

/// Maps a [`BlogError`] to an HTTP status code.
///
/// - `MalformedDate` -> 400 (Bad Request)
/// - `Unauthorized` -> 401 (Unauthorized)
/// - `Store(Request)` -> 500 (Internal Server Error)
/// - `Store(Unavailable)` -> 503 (Service Unavailable)
/// - `Authenticator` -> 503 (Service Unavailable)
///
/// # Examples
///
/// ```
/// use wayfarer_core::blog::{blog_error_to_status_code, BlogError};
///
/// assert_eq!(blog_error_to_status_code(&BlogError::Unauthorized), 401);
/// ```
pub fn blog_error_to_status_code(error: &BlogError) -> u16 {
    match error {
        BlogError::MalformedDate { .. } => 400,
        BlogError::Unauthorized => 401,
        BlogError::Store(StoreError::Request(_)) => 500,
        BlogError::Store(StoreError::Unavailable(_)) => 503,
        BlogError::Authenticator(_) => 503,
    }
}
