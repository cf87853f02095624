//! Removal of low-value documents from a collection directory.
//!
//! A pass reads every document, classifies it, and only then deletes the
//! excluded ones, so a verdict never depends on earlier deletions in the same
//! pass.

pub mod criteria;
pub mod errors;
pub mod markers;
pub mod report;

pub use criteria::{Criterion, ExclusionVerdict, MIN_CONTENT_BYTES, classify};
pub use errors::CullError;
pub use markers::stub_marker;
pub use report::RemovalReport;

use crate::extractor::read_markup;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, instrument};

/// Lists the `*.json` documents directly inside `dir`, sorted by path.
pub async fn collect_documents(dir: &Path) -> Result<Vec<PathBuf>, CullError> {
    let list_err = |source: std::io::Error| CullError::ListDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut entries = tokio::fs::read_dir(dir).await.map_err(list_err)?;
    let mut paths = Vec::new();
    while let Some(entry) = entries.next_entry().await.map_err(list_err)? {
        let path = entry.path();
        let is_json = path.extension().is_some_and(|ext| ext == "json");
        if is_json && entry.file_type().await.map_err(list_err)?.is_file() {
            paths.push(path);
        }
    }

    paths.sort();
    Ok(paths)
}

/// Classifies each document in `paths` for `locale` and deletes the excluded
/// ones.
#[instrument(skip(paths), fields(count = paths.len()))]
pub async fn filter_documents(paths: &[PathBuf], locale: &str) -> Result<RemovalReport, CullError> {
    let mut report = RemovalReport::default();
    let mut excluded = Vec::new();

    for path in paths {
        let markup = read_markup(path)
            .await
            .map_err(|source| CullError::Document {
                path: path.clone(),
                source,
            })?;

        let verdict = classify(&markup, locale);
        if verdict.is_excluded() {
            debug!("{} excluded: {:?}", path.display(), verdict);
            excluded.push(path.as_path());
        }
        report.record(verdict);
    }

    remove_all(&excluded).await?;

    info!(
        "Removed {} of {} documents (stub: {}, empty: {}, below size: {})",
        report.total(),
        report.examined,
        report.stub,
        report.empty,
        report.below_size
    );
    Ok(report)
}

/// Runs [`filter_documents`] over every document in `dir`.
pub async fn cull_directory(dir: &Path, locale: &str) -> Result<RemovalReport, CullError> {
    let paths = collect_documents(dir).await?;
    filter_documents(&paths, locale).await
}

/// Attempts every removal before reporting the first failure.
async fn remove_all(paths: &[&Path]) -> Result<(), CullError> {
    let mut first_failure = None;
    let mut failed = 0;

    for path in paths {
        if let Err(source) = tokio::fs::remove_file(path).await {
            error!("Failed to remove {}: {}", path.display(), source);
            failed += 1;
            if first_failure.is_none() {
                first_failure = Some((path.to_path_buf(), source));
            }
        }
    }

    match first_failure {
        Some((path, source)) => Err(CullError::Remove {
            path,
            failed,
            source,
        }),
        None => Ok(()),
    }
}
