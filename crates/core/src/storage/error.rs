use thiserror::Error;

/// Failures reported by a record store gateway.
///
/// The two variants separate requests the store will never accept from
/// infrastructure trouble that may clear up on its own. Neither is retried
/// by the core.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The store rejected the shape of the request (unknown index, missing
    /// table, validation failure, unreadable item).
    #[error("Store rejected request: {0}")]
    Request(String),
    /// Transient failure: throttling, timeouts, connection or internal errors.
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Result type for store gateway operations.
pub type Result<T> = std::result::Result<T, StoreError>;
