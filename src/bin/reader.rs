use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use harvest::{
    config::Config,
    extractor::{extract_clean_text, read_markup},
    telemetry::init_tracing,
};

/// Print the cleaned article text of collected documents
#[derive(Parser, Debug)]
#[command(name = "reader", version)]
struct Args {
    /// JSON document path(s)
    #[arg(value_name = "FILEPATH", required = true)]
    paths: Vec<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config = Config::from_env()?;
    init_tracing(config.log_format());

    for path in &args.paths {
        let markup = read_markup(path)
            .await
            .with_context(|| format!("{}", path.display()))?;
        match extract_clean_text(&markup) {
            Some(text) => println!("{}", text),
            None => bail!("{}: No content available", path.display()),
        }
    }

    Ok(())
}
