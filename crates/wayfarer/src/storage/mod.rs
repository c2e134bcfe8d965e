//! Record store implementations.
//!
//! Concrete implementations of `wayfarer_core::storage::RecordStore`,
//! selected at compile time via feature flags.
//!
//! # Feature Flags
//!
//! - `inmemory` (default): process-local store seeded with demo posts
//! - `dynamodb`: AWS DynamoDB store using `aws-sdk-dynamodb`
//!
//! These features are mutually exclusive. Build with DynamoDB:
//! ```bash
//! cargo build -p wayfarer --no-default-features --features dynamodb
//! ```

#[cfg(all(feature = "inmemory", feature = "dynamodb"))]
compile_error!(
    "Features 'inmemory' and 'dynamodb' are mutually exclusive. \
    Enable only one storage backend at a time."
);

#[cfg(not(any(feature = "inmemory", feature = "dynamodb")))]
compile_error!(
    "No storage backend selected. Enable 'inmemory' or 'dynamodb' feature. \
    Example: cargo build -p wayfarer --features dynamodb"
);

// Router tests always run against the in-memory store.
#[cfg(any(feature = "inmemory", test))]
pub mod inmemory;

#[cfg(feature = "dynamodb")]
pub mod dynamodb;
