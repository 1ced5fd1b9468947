//! Error types for configuration and URL issuance

use thiserror::Error;

use crate::upload_storage::BucketError;

/// Errors raised while reading configuration at cold start
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required environment variable is unset or empty
    #[error("{0} environment variable is not set")]
    MissingVariable(&'static str),

    /// `APP_ENV` holds an unknown stage
    #[error("Invalid environment: {0}")]
    InvalidEnvironment(String),
}

/// Errors returned to the Lambda runtime by the URL issuer
///
/// None of these produce a structured response body; the runtime reports
/// them as a failed invocation.
#[derive(Error, Debug)]
pub enum IssuerError {
    /// The `file_name` query string parameter is absent
    #[error("missing required query string parameter: file_name")]
    MissingFileName,

    /// Presigning failed
    #[error(transparent)]
    Bucket(#[from] BucketError),

    /// The response body could not be encoded
    #[error("failed to encode response body: {0}")]
    Serialization(#[from] serde_json::Error),
}
