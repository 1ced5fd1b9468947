use std::sync::Arc;

use aws_sdk_s3::Client as S3Client;
use lambda_http::{run, service_fn};
use presigner::{handler::function_handler, types::Environment, upload_storage::UploadStorage};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let environment = Environment::from_env()?;

    // CloudWatch already timestamps every line and doesn't render ANSI colours
    if environment.json_logs() {
        fmt()
            .json()
            .with_env_filter(EnvFilter::from_default_env())
            .with_current_span(false)
            .with_ansi(false)
            .without_time()
            .init();
    } else {
        fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_ansi(false)
            .without_time()
            .init();
    }

    let bucket_name = Environment::bucket_name()?;
    let presigned_url_expiry_secs = environment.presigned_url_expiry_secs();

    let s3_client = Arc::new(S3Client::from_conf(environment.s3_client_config().await));
    let upload_storage = UploadStorage::new(s3_client, bucket_name, presigned_url_expiry_secs);

    tracing::info!(
        "Upload presigner initialized for bucket {} with {}s URL expiry",
        upload_storage.bucket_name(),
        upload_storage.presigned_url_expiry_secs()
    );

    run(service_fn(|event| function_handler(&upload_storage, event)))
        .await
        .map_err(|e| anyhow::anyhow!(e))
}
