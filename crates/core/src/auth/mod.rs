mod error;
mod traits;
mod types;

pub use error::AuthError;
pub use traits::{Authenticator, Result};
pub use types::{strip_bearer, Claims};
