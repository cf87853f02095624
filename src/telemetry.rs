use crate::config::LogFormat;
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber for the binaries.
///
/// `RUST_LOG` wins when set; otherwise `info` and above are shown.
pub fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    match format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}
