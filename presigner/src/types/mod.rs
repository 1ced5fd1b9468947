mod environment;
mod error;

pub use environment::{Environment, DEFAULT_PRESIGNED_URL_EXPIRY_SECS};
pub use error::{ConfigError, IssuerError};
