//! DynamoDB record store.
//!
//! Posts live in a single table keyed by `id`, with one global secondary
//! index keyed by journey.

mod conversions;
mod error;
mod store;

pub use store::DynamoDbStore;
