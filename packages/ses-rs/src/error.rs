use thiserror::Error;

pub type Result<T> = std::result::Result<T, SesError>;

#[derive(Debug, Error)]
pub enum SesError {
    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("SES API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("invalid request: {0}")]
    InvalidRequest(String),
}
