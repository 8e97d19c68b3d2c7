use thiserror::Error;

/// Failures at the server boundary. Converted to `ServerFnError` (and
/// logged) before they cross back to the client.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("missing required environment variable {0}")]
    MissingConfig(&'static str),

    #[error("document store error: {0}")]
    Store(#[from] mongodb::error::Error),

    #[error("token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),
}
