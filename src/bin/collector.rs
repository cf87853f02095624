use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use harvest::{
    acquirer::{acquire_random_ids, api_endpoint, parse_requests},
    config::Config,
    culler::collect_documents,
    fetcher::{build_client, fetch_all},
    telemetry::init_tracing,
};
use tracing::info;

/// Pull random encyclopedia articles into a directory of JSON documents
#[derive(Parser, Debug)]
#[command(name = "collector", version)]
struct Args {
    /// Language edition tag (en, pt, ...)
    #[arg(value_name = "LANG")]
    lang: String,

    /// Number of random articles to request
    #[arg(value_name = "NUMBER")]
    number: usize,

    /// Directory the documents are written to
    #[arg(value_name = "TARGETDIR")]
    target_dir: PathBuf,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config = Config::from_env()?;
    init_tracing(config.log_format());

    info!("Start collection");

    tokio::fs::create_dir_all(&args.target_dir)
        .await
        .with_context(|| format!("Failed to create {}", args.target_dir.display()))?;

    let endpoint = api_endpoint(config.api_endpoint(), &args.lang)?;
    let client = build_client(&config)?;

    let articles = acquire_random_ids(&client, &endpoint, args.number)
        .await
        .context("Failed attempt to pull random article ids")?;

    let requests = parse_requests(&endpoint, articles.keys().copied());
    fetch_all(&client, requests, &args.target_dir)
        .await
        .context("Failed attempt to pull randomized data")?;

    let documents = collect_documents(&args.target_dir).await?;
    println!(
        "Pulled articles from `{}` to {}",
        args.lang,
        args.target_dir.display()
    );
    println!(
        "Total JSON files in {}: {}",
        args.target_dir.display(),
        documents.len()
    );

    info!("End collection");
    Ok(())
}
