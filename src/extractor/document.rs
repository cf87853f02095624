//! Access to the markup payload of persisted parse responses.
//!
//! A persisted document is the verbatim body returned by the parse endpoint.
//! The markup sits at `parse.text`, either as a string (`formatversion=2`) or
//! wrapped in an object under `"*"` (legacy format).

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::instrument;

#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid json: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("no markup payload at parse.text")]
    MissingMarkup,
}

#[derive(Debug, Deserialize)]
struct ParseResponse {
    parse: Option<ParseBody>,
}

#[derive(Debug, Deserialize)]
struct ParseBody {
    text: Option<MarkupField>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum MarkupField {
    Plain(String),
    Legacy {
        #[serde(rename = "*")]
        content: String,
    },
}

impl MarkupField {
    fn into_markup(self) -> String {
        match self {
            Self::Plain(markup) => markup,
            Self::Legacy { content } => content,
        }
    }
}

/// Pulls the markup payload out of a parse endpoint response body.
pub fn markup_payload(json_text: &str) -> Result<String, DocumentError> {
    let response: ParseResponse = serde_json::from_str(json_text)?;
    response
        .parse
        .and_then(|body| body.text)
        .map(MarkupField::into_markup)
        .ok_or(DocumentError::MissingMarkup)
}

/// Reads a persisted document from disk and returns its markup payload.
#[instrument(skip_all, fields(path = %path.display()))]
pub async fn read_markup(path: &Path) -> Result<String, DocumentError> {
    let json_text = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| DocumentError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    markup_payload(&json_text)
}
