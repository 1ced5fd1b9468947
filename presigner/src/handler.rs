//! HTTP-triggered handler issuing presigned upload URLs

use lambda_http::{
    http::{header::CONTENT_TYPE, StatusCode},
    Body, Error, Request, RequestExt, Response,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, field, instrument, warn, Span};

use crate::{types::IssuerError, upload_storage::UploadStorage};

/// Query string parameter naming the object key
pub const FILE_NAME_PARAM: &str = "file_name";

/// Response body returned on success
#[derive(Debug, Serialize, Deserialize)]
pub struct UploadUrlResponse {
    /// Presigned PUT URL
    pub url: String,
}

/// Issues a presigned PUT URL for the `file_name` query string parameter
///
/// # Errors
///
/// Returns `IssuerError::MissingFileName` when the parameter is absent and
/// `IssuerError::Bucket` when presigning fails. Both surface as an invocation
/// error; no structured error body is produced.
#[instrument(skip(storage, event), fields(file_name = field::Empty))]
pub async fn function_handler(
    storage: &UploadStorage,
    event: Request,
) -> Result<Response<Body>, Error> {
    let params = event.query_string_parameters();
    let Some(file_name) = params.first(FILE_NAME_PARAM) else {
        warn!("Request is missing the {FILE_NAME_PARAM} query string parameter");
        return Err(IssuerError::MissingFileName.into());
    };
    Span::current().record("file_name", file_name);

    let presigned_url = storage
        .generate_presigned_put_url(file_name)
        .await
        .map_err(|e| {
            error!("Failed to presign upload for {file_name}: {e}");
            IssuerError::from(e)
        })?;

    debug!(
        "Issued presigned upload URL for {} expiring at {}",
        file_name, presigned_url.expires_at
    );

    let body = serde_json::to_string(&UploadUrlResponse {
        url: presigned_url.url,
    })
    .map_err(IssuerError::from)?;

    let response = Response::builder()
        .status(StatusCode::OK)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::Text(body))?;

    Ok(response)
}
