//! Functional core for the wayfarer blog API.
//!
//! - [`query`]: timestamp normalization and filter planning (pure functions)
//! - [`storage`]: the record store gateway abstraction
//! - [`auth`]: the authenticator capability used to gate writes
//! - [`blog`]: records, the repository and the write gatekeeper

pub mod auth;
pub mod blog;
pub mod query;
pub mod serde;
pub mod storage;
