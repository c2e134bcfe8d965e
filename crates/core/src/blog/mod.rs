mod error;
mod gatekeeper;
mod http_mapping;
mod mock_data;
mod repository;
#[cfg(test)]
mod testing;
mod types;

pub use error::{BlogError, Result};
pub use gatekeeper::WriteGatekeeper;
pub use http_mapping::blog_error_to_status_code;
pub use mock_data::seed_records;
pub use repository::{RecordRepository, RepositoryConfig};
pub use types::{CreatedAt, Record, RecordDraft};
