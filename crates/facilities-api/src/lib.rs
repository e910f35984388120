// facilities-api: Fetches and normalizes the buildings document consumed by the dashboard.

pub mod error;
pub mod payload;
pub mod source;
pub mod transport;

pub use error::Error;
pub use payload::{BuildingsPayload, is_truthy, normalize_payload, parse_document};
pub use source::{DEFAULT_SOURCE_URL, DataSource, FileSource, HttpSource};
pub use transport::TransportConfig;
