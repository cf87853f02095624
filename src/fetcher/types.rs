use reqwest::StatusCode;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use url::Url;

/// One document to retrieve: where to send the GET and with which query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleRequest {
    document_id: String,
    endpoint: Url,
    params: BTreeMap<String, String>,
}

impl ArticleRequest {
    pub fn new(
        document_id: impl Into<String>,
        endpoint: Url,
        params: BTreeMap<String, String>,
    ) -> Self {
        Self {
            document_id: document_id.into(),
            endpoint,
            params,
        }
    }

    pub fn document_id(&self) -> &str {
        &self.document_id
    }
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
    pub fn params(&self) -> &BTreeMap<String, String> {
        &self.params
    }
}

/// Result of one fetch-and-store operation.
///
/// `persisted` is true only for a 200 response whose body was written to
/// `destination`.
#[derive(Debug, Clone)]
pub struct FetchOutcome {
    pub request: ArticleRequest,
    pub destination: Option<PathBuf>,
    pub status: StatusCode,
    pub persisted: bool,
}

/// `{target_dir}/{document_id}.json`
pub fn destination_path(target_dir: &Path, document_id: &str) -> PathBuf {
    target_dir.join(format!("{}.json", document_id))
}
