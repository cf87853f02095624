pub mod acquirer;
pub mod config;
pub mod culler;
pub mod extractor;
pub mod fetcher;
pub mod telemetry;
