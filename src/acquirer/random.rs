use crate::acquirer::{
    chunk::{RANDOM_LIMIT_MAX, chunk_sizes},
    errors::AcquireError,
};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::collections::BTreeMap;
use tracing::{debug, info, instrument};
use url::Url;

/// One entry of the random endpoint's `query.random` list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RandomArticle {
    pub id: u64,
    pub title: String,
}

#[derive(Debug, Deserialize)]
struct RandomResponse {
    query: RandomQuery,
}

#[derive(Debug, Deserialize)]
struct RandomQuery {
    random: Vec<RandomArticle>,
}

/// Collects `count` random main-namespace article ids from `endpoint`.
///
/// Requests above [`RANDOM_LIMIT_MAX`] are split into sequential calls. The
/// result is keyed by id; when an id shows up in more than one call, the
/// title seen last is kept. Zero-sized chunks are skipped, so a `count` of
/// zero issues no request.
#[instrument(skip(client, endpoint), fields(endpoint = %endpoint))]
pub async fn acquire_random_ids(
    client: &Client,
    endpoint: &Url,
    count: usize,
) -> Result<BTreeMap<u64, String>, AcquireError> {
    let chunks = chunk_sizes(count, RANDOM_LIMIT_MAX);
    if chunks.len() > 1 {
        info!("Chunking random article requests at API max: {:?}", chunks);
    }

    let mut articles = BTreeMap::new();
    for size in chunks.into_iter().filter(|&size| size > 0) {
        for article in fetch_random_chunk(client, endpoint, size).await? {
            articles.insert(article.id, article.title);
        }
    }

    info!("Acquired {} unique article ids", articles.len());
    Ok(articles)
}

async fn fetch_random_chunk(
    client: &Client,
    endpoint: &Url,
    size: usize,
) -> Result<Vec<RandomArticle>, AcquireError> {
    let limit = size.to_string();
    let params = [
        ("format", "json"),
        ("action", "query"),
        ("list", "random"),
        ("rnnamespace", "0"),
        ("prop", "revisions"),
        ("rvprop", "content"),
        ("rnlimit", limit.as_str()),
    ];

    let response = client
        .get(endpoint.clone())
        .query(&params)
        .send()
        .await
        .map_err(|e| AcquireError::Request(e.to_string()))?;

    let status = response.status();
    if status != StatusCode::OK {
        return Err(AcquireError::Http { status });
    }

    let body: RandomResponse = response
        .json()
        .await
        .map_err(|e| AcquireError::Decode(e.to_string()))?;

    debug!("Received {} ids for rnlimit={}", body.query.random.len(), size);
    Ok(body.query.random)
}
