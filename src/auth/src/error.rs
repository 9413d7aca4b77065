use thiserror::Error;

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("Invalid token: {0}")]
    Invalid(#[from] jsonwebtoken::errors::Error),

    #[error("Token is missing the `{0}` claim")]
    MissingClaim(&'static str),

    #[error(transparent)]
    Other(Box<dyn std::error::Error + Send + Sync>),
}
