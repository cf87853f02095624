pub mod client;
pub mod errors;
pub mod pipeline;
pub mod types;

pub use client::{build_client, fetch_and_store};
pub use errors::FetchError;
pub use pipeline::fetch_all;
pub use types::{ArticleRequest, FetchOutcome, destination_path};
