#![allow(dead_code)]

use harvest::config::{Config, LogFormat};
use harvest::fetcher::build_client;
use reqwest::Client;
use serde_json::json;

pub fn test_client() -> Client {
    let config = Config::new("http://127.0.0.1/{lang}", "harvest-tests/0.1", 5, LogFormat::Text);
    build_client(&config).expect("Failed to build test client")
}

/// Body shaped like a `formatversion=2` parse endpoint response.
pub fn parse_body(page_id: u64, title: &str, markup: &str) -> String {
    json!({
        "curtimestamp": "2024-03-01T12:00:00Z",
        "parse": {
            "title": title,
            "pageid": page_id,
            "text": markup,
        }
    })
    .to_string()
}

/// Body shaped like a `list=random` query response.
pub fn random_body(articles: &[(u64, &str)]) -> String {
    let random: Vec<_> = articles
        .iter()
        .map(|(id, title)| json!({"id": id, "ns": 0, "title": title}))
        .collect();
    json!({
        "batchcomplete": "",
        "continue": {"rncontinue": "0.1|0.2|0|0", "continue": "-||"},
        "query": {"random": random}
    })
    .to_string()
}

pub fn paragraphs(len: usize) -> String {
    format!("<p>{}</p>", "a".repeat(len))
}
