pub mod blogs;
pub mod error;
pub mod health;

pub use error::{not_found, AppError};
