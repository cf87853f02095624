use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AcquireError {
    #[error("invalid locale tag: {0:?}")]
    InvalidLocale(String),

    #[error("invalid api endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),

    #[error("random article request failed: {0}")]
    Request(String),

    #[error("random article request failed with HTTP status code {}", .status.as_u16())]
    Http { status: StatusCode },

    #[error("unexpected random article response: {0}")]
    Decode(String),
}
