//! Environment configuration for different deployment stages

use std::env;
use std::time::Duration;

use aws_config::{timeout::TimeoutConfig, BehaviorVersion};

use super::ConfigError;

/// Default validity of issued upload URLs: one hour
pub const DEFAULT_PRESIGNED_URL_EXPIRY_SECS: u64 = 60 * 60;

/// Application environment configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    /// Production environment
    Production,
    /// Staging environment
    Staging,
    /// Development environment (usually `LocalStack`)
    Development {
        /// Optional override for presigned URL expiry in seconds
        presign_expiry_override: Option<u64>,
        /// Optional custom S3 endpoint
        endpoint_url_override: Option<String>,
    },
}

impl Environment {
    /// Creates an Environment from the `APP_ENV` environment variable
    ///
    /// Defaults to production when `APP_ENV` is unset.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidEnvironment` if `APP_ENV` holds an unknown value
    pub fn from_env() -> Result<Self, ConfigError> {
        let env = env::var("APP_ENV")
            .unwrap_or_else(|_| "production".to_string())
            .trim()
            .to_lowercase();

        match env.as_str() {
            "production" => Ok(Self::Production),
            "staging" => Ok(Self::Staging),
            "development" => {
                let presign_expiry_override = env::var("PRESIGNED_URL_EXPIRY_SECS")
                    .ok()
                    .and_then(|val| val.parse::<u64>().ok());

                let endpoint_url_override = env::var("AWS_ENDPOINT_URL_OVERRIDE")
                    .ok()
                    .filter(|val| !val.trim().is_empty());

                Ok(Self::Development {
                    presign_expiry_override,
                    endpoint_url_override,
                })
            }
            _ => Err(ConfigError::InvalidEnvironment(env)),
        }
    }

    /// Returns the bucket uploads are signed for
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingVariable` if `BUCKET_NAME` is unset or empty
    pub fn bucket_name() -> Result<String, ConfigError> {
        env::var("BUCKET_NAME")
            .ok()
            .filter(|name| !name.trim().is_empty())
            .ok_or(ConfigError::MissingVariable("BUCKET_NAME"))
    }

    /// Whether log lines are emitted as JSON
    #[must_use]
    pub const fn json_logs(&self) -> bool {
        matches!(self, Self::Production | Self::Staging)
    }

    /// Returns the endpoint URL to use for AWS services
    #[must_use]
    pub fn override_aws_endpoint_url(&self) -> Option<&str> {
        match self {
            Self::Production | Self::Staging => None,
            Self::Development {
                endpoint_url_override,
                ..
            } => endpoint_url_override.as_deref(),
        }
    }

    /// AWS configuration with timeout settings
    pub async fn aws_config(&self) -> aws_config::SdkConfig {
        let timeout_config = TimeoutConfig::builder()
            .operation_timeout(Duration::from_secs(10))
            .build();

        let mut config_builder = aws_config::load_defaults(BehaviorVersion::latest())
            .await
            .to_builder()
            .timeout_config(timeout_config);

        if let Some(endpoint_url) = self.override_aws_endpoint_url() {
            config_builder = config_builder.endpoint_url(endpoint_url);
        }

        config_builder.build()
    }

    /// AWS S3 service configuration
    pub async fn s3_client_config(&self) -> aws_sdk_s3::Config {
        let aws_config = self.aws_config().await;
        let s3_config: aws_sdk_s3::Config = (&aws_config).into();
        let mut builder = s3_config.to_builder();

        // Custom endpoints (LocalStack, MinIO) don't resolve virtual-hosted buckets
        if self.override_aws_endpoint_url().is_some() {
            builder.set_force_path_style(Some(true));
        }

        builder.build()
    }

    /// Presigned URL expiry time in seconds
    #[must_use]
    pub fn presigned_url_expiry_secs(&self) -> u64 {
        match self {
            Self::Production | Self::Staging => DEFAULT_PRESIGNED_URL_EXPIRY_SECS,
            Self::Development {
                presign_expiry_override,
                ..
            } => presign_expiry_override.unwrap_or(DEFAULT_PRESIGNED_URL_EXPIRY_SECS),
        }
    }
}
