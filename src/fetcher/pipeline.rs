use crate::fetcher::{
    client::fetch_and_store,
    errors::FetchError,
    types::{ArticleRequest, FetchOutcome},
};
use reqwest::{Client, StatusCode};
use std::path::Path;
use tokio::task::JoinHandle;
use tracing::{Instrument, error, info, instrument};

type ItemResult = Result<FetchOutcome, FetchError>;

/// Fetches every request concurrently over the shared `client` and persists
/// each 200 response under `target_dir`.
///
/// Each request runs as its own task, so a failing item never stops its
/// siblings. All tasks are joined before any outcome is inspected. Files
/// written by successful items stay on disk even when the batch fails.
#[instrument(skip_all, fields(count = requests.len(), target_dir = %target_dir.display()))]
pub async fn fetch_all(
    client: &Client,
    requests: Vec<ArticleRequest>,
    target_dir: &Path,
) -> Result<Vec<FetchOutcome>, FetchError> {
    info!("Fetching {} documents", requests.len());

    let handles: Vec<(String, JoinHandle<ItemResult>)> = requests
        .into_iter()
        .map(|request| {
            let document_id = request.document_id().to_string();
            let client = client.clone();
            let target_dir = target_dir.to_path_buf();
            let handle = tokio::spawn(
                async move { fetch_and_store(&client, request, &target_dir).await }
                    .in_current_span(),
            );
            (document_id, handle)
        })
        .collect();

    let mut results = Vec::with_capacity(handles.len());
    for (document_id, handle) in handles {
        let result = match handle.await {
            Ok(result) => result,
            Err(join_error) => Err(FetchError::Task(join_error.to_string())),
        };
        results.push((document_id, result));
    }

    let outcomes = summarize(results)?;
    info!(
        "Fetched {} documents ({} persisted)",
        outcomes.len(),
        outcomes.iter().filter(|o| o.persisted).count()
    );
    Ok(outcomes)
}

/// Turns the per-item results of a batch into the batch result.
///
/// A captured item error takes precedence over a non-200 status; within each
/// kind the first item in request order is reported.
fn summarize(results: Vec<(String, ItemResult)>) -> Result<Vec<FetchOutcome>, FetchError> {
    let mut outcomes = Vec::with_capacity(results.len());
    let mut first_error = None;

    for (document_id, result) in results {
        match result {
            Ok(outcome) => outcomes.push(outcome),
            Err(source) => {
                error!("Document {} failed: {}", document_id, source);
                if first_error.is_none() {
                    first_error = Some(FetchError::Item {
                        document_id,
                        source: Box::new(source),
                    });
                }
            }
        }
    }

    if let Some(err) = first_error {
        return Err(err);
    }

    if let Some(failed) = outcomes.iter().find(|o| o.status != StatusCode::OK) {
        return Err(FetchError::Status {
            document_id: failed.request.document_id().to_string(),
            status: failed.status,
        });
    }

    Ok(outcomes)
}
