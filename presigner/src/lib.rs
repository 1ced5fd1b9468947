//! Lambda function issuing presigned S3 upload URLs

#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    dead_code
)]

/// HTTP event handler
pub mod handler;

/// Configuration and error types
pub mod types;

/// S3 presigning
pub mod upload_storage;
