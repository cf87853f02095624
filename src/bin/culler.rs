use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use harvest::{
    config::Config,
    culler::{collect_documents, filter_documents},
    telemetry::init_tracing,
};
use tracing::info;

/// Remove stub, empty and too-short documents from a collection directory
#[derive(Parser, Debug)]
#[command(name = "culler", version)]
struct Args {
    /// Language edition tag the documents were collected from
    #[arg(value_name = "LANG")]
    lang: String,

    /// Directory holding the JSON documents
    #[arg(value_name = "TARGETDIR")]
    target_dir: PathBuf,

    /// Print the removal report as JSON
    #[arg(long)]
    json: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config = Config::from_env()?;
    init_tracing(config.log_format());

    info!("Start culling {}", args.target_dir.display());

    let documents = collect_documents(&args.target_dir).await?;
    let report = filter_documents(&documents, &args.lang)
        .await
        .context("Culling failed")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Start file count: {}", documents.len());
        println!("Remaining file count: {}", report.retained());
        if report.total() > 0 {
            println!("Removed {} files that met exclusion criteria", report.total());
            println!("  stub: {}", report.stub);
            println!("  empty: {}", report.empty);
            println!("  below size: {}", report.below_size);
        } else {
            println!("No files were removed.");
        }
    }

    info!("End culling");
    Ok(())
}
