pub mod chunk;
pub mod errors;
pub mod random;
pub mod requests;

pub use chunk::{RANDOM_LIMIT_MAX, chunk_sizes};
pub use errors::AcquireError;
pub use random::{RandomArticle, acquire_random_ids};
pub use requests::{api_endpoint, parse_requests};
