use crate::config::Config;
use crate::fetcher::{
    errors::FetchError,
    types::{ArticleRequest, FetchOutcome, destination_path},
};
use reqwest::{Client, ClientBuilder, StatusCode};
use std::path::Path;
use tracing::{debug, instrument, warn};

/// Builds the client whose connection pool is shared by every request of a
/// run.
///
/// Only the connect phase is bounded; a batch in flight is never cut short.
pub fn build_client(config: &Config) -> Result<Client, FetchError> {
    ClientBuilder::new()
        .connect_timeout(config.connect_timeout())
        .user_agent(config.user_agent())
        .default_headers({
            let mut headers = reqwest::header::HeaderMap::new();
            headers.insert(
                reqwest::header::ACCEPT,
                reqwest::header::HeaderValue::from_static("application/json"),
            );
            headers
        })
        .build()
        .map_err(|e| FetchError::Client(e.to_string()))
}

/// Issues one GET and, on a 200 response, writes the body verbatim to
/// `{target_dir}/{document_id}.json`.
///
/// A non-200 response is not an error here; it is reported in the outcome.
#[instrument(skip_all, fields(document_id = %request.document_id()))]
pub async fn fetch_and_store(
    client: &Client,
    request: ArticleRequest,
    target_dir: &Path,
) -> Result<FetchOutcome, FetchError> {
    let response = client
        .get(request.endpoint().clone())
        .query(request.params())
        .send()
        .await
        .map_err(FetchError::from_reqwest_error)?;

    let status = response.status();
    if status != StatusCode::OK {
        warn!("Unexpected status {}", status);
        return Ok(FetchOutcome {
            request,
            destination: None,
            status,
            persisted: false,
        });
    }

    let body = response
        .text()
        .await
        .map_err(FetchError::from_reqwest_error)?;

    let path = destination_path(target_dir, request.document_id());
    tokio::fs::write(&path, body.as_bytes())
        .await
        .map_err(|source| FetchError::Write {
            path: path.clone(),
            source,
        })?;

    debug!("Wrote {} bytes to {}", body.len(), path.display());

    Ok(FetchOutcome {
        request,
        destination: Some(path),
        status,
        persisted: true,
    })
}
