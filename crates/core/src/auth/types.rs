use serde::{Deserialize, Serialize};

/// Verified identity claims from an ID or access token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Provider's unique user identifier.
    #[serde(rename = "sub")]
    pub subject: String,
    /// Token issuer.
    #[serde(rename = "iss", default)]
    pub issuer: String,
    /// Cognito user name, when present.
    #[serde(
        rename = "cognito:username",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// `id` or `access` for Cognito tokens.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_use: Option<String>,
    /// Expiry as seconds since the epoch.
    #[serde(rename = "exp", default)]
    pub expires_at: u64,
}

/// Extracts the token from an `Authorization` header value.
///
/// Accepts both `Bearer <token>` and a bare token. Returns `None` for blank
/// input.
///
/// ```
/// use wayfarer_core::auth::strip_bearer;
///
/// assert_eq!(strip_bearer("Bearer abc.def.ghi"), Some("abc.def.ghi"));
/// assert_eq!(strip_bearer("abc.def.ghi"), Some("abc.def.ghi"));
/// assert_eq!(strip_bearer("Bearer  "), None);
/// ```
pub fn strip_bearer(value: &str) -> Option<&str> {
    let value = value.trim_start();
    let token = value
        .strip_prefix("Bearer ")
        .or_else(|| value.strip_prefix("bearer "))
        .unwrap_or(value)
        .trim();

    (!token.is_empty()).then_some(token)
}
