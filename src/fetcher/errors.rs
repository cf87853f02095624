use reqwest::StatusCode;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("failed to build http client: {0}")]
    Client(String),

    #[error("connect timeout")]
    ConnectTimeout,

    #[error("connection failed: {0}")]
    Connect(String),

    #[error("request failed: {0}")]
    Request(String),

    #[error("failed to read response body: {0}")]
    Body(String),

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("task failed: {0}")]
    Task(String),

    /// An item raised during its fetch; the batch was still run to completion.
    #[error("failed to pull document {document_id}: {source}")]
    Item {
        document_id: String,
        #[source]
        source: Box<FetchError>,
    },

    /// An item completed with a non-200 response.
    #[error("failed to pull document {document_id}: HTTP status code {}", .status.as_u16())]
    Status {
        document_id: String,
        status: StatusCode,
    },
}

impl FetchError {
    pub fn from_reqwest_error(err: reqwest::Error) -> Self {
        if err.is_timeout() && err.is_connect() {
            Self::ConnectTimeout
        } else if err.is_connect() {
            Self::Connect(err.to_string())
        } else if err.is_body() || err.is_decode() {
            Self::Body(err.to_string())
        } else {
            Self::Request(err.to_string())
        }
    }

    /// Document id of the item a batch-level error refers to.
    pub fn document_id(&self) -> Option<&str> {
        match self {
            Self::Item { document_id, .. } | Self::Status { document_id, .. } => {
                Some(document_id.as_str())
            }
            _ => None,
        }
    }
}
