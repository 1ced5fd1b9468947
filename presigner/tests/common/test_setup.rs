use std::collections::HashMap;
use std::sync::Arc;

use aws_sdk_s3::config::{BehaviorVersion, Credentials, Region};
use aws_sdk_s3::Client as S3Client;
use lambda_http::{Body, Request, RequestExt, Response};
use presigner::{
    handler::{function_handler, UploadUrlResponse},
    upload_storage::UploadStorage,
};

pub const TEST_BUCKET: &str = "presigner-test-uploads";
pub const TEST_REGION: &str = "us-east-1";

/// Initialize tracing for tests
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init()
        .ok();
}

/// Offline S3 client: static credentials and a fixed region, so presigning
/// never touches the network
pub fn offline_s3_client(force_path_style: bool) -> Arc<S3Client> {
    let config = aws_sdk_s3::Config::builder()
        .behavior_version(BehaviorVersion::latest())
        .region(Region::new(TEST_REGION))
        .credentials_provider(Credentials::new(
            "AKIDPRESIGNERTEST",
            "presigner-test-secret",
            None,
            None,
            "test",
        ))
        .force_path_style(force_path_style)
        .build();

    Arc::new(S3Client::from_conf(config))
}

/// Test context holding an upload storage wired to the offline client
pub struct TestContext {
    pub upload_storage: UploadStorage,
    pub bucket_name: String,
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_options(false, 3600)
    }

    pub fn with_options(force_path_style: bool, expiry_secs: u64) -> Self {
        setup_tracing();

        let bucket_name = TEST_BUCKET.to_string();
        let upload_storage = UploadStorage::new(
            offline_s3_client(force_path_style),
            bucket_name.clone(),
            expiry_secs,
        );

        Self {
            upload_storage,
            bucket_name,
        }
    }

    /// Invokes the handler with the given query string parameters
    pub async fn invoke(
        &self,
        query: &[(&str, &str)],
    ) -> Result<Response<Body>, lambda_http::Error> {
        let params: HashMap<String, String> = query
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();

        let request = Request::default().with_query_string_parameters(params);
        function_handler(&self.upload_storage, request).await
    }

    /// Invokes the handler with `file_name` and returns the URL exactly as issued
    pub async fn issue_raw_url(&self, file_name: &str) -> String {
        let response = self
            .invoke(&[("file_name", file_name)])
            .await
            .expect("handler should succeed");
        parse_response_body(&response).url
    }

    /// Invokes the handler with `file_name` and returns the parsed URL
    ///
    /// Parsing collapses `.`/`..` path segments, so key assertions on
    /// unusual names belong on `issue_raw_url`.
    pub async fn issue_url(&self, file_name: &str) -> url::Url {
        let raw = self.issue_raw_url(file_name).await;
        url::Url::parse(&raw).expect("issued URL should parse")
    }
}

/// Path part of a raw URL, without parsing or normalization
pub fn raw_path(raw_url: &str) -> &str {
    raw_url.split_once('?').map_or(raw_url, |(path, _)| path)
}

/// Parses the JSON body of a handler response
pub fn parse_response_body(response: &Response<Body>) -> UploadUrlResponse {
    let Body::Text(text) = response.body() else {
        panic!("expected a text body, got {:?}", response.body());
    };
    serde_json::from_str(text).expect("body should be valid JSON")
}

/// Looks up a query parameter of a signed URL
pub fn query_param(url: &url::Url, name: &str) -> Option<String> {
    url.query_pairs()
        .find(|(k, _)| k == name)
        .map(|(_, v)| v.into_owned())
}
