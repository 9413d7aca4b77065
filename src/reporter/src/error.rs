use reporter_auth::TokenError;
use thiserror::Error;

/// Errors surfaced to the caller of [`crate::Sentry::initialize`].
#[derive(Debug, Error)]
pub enum ReporterError {
    #[error("failed to initialize the error reporter for DSN `{dsn}`: {source}")]
    InitFailed {
        dsn: String,
        #[source]
        source: sentry::types::ParseDsnError,
    },

    #[error("failed to load reporter settings: {0}")]
    Settings(#[from] config::ConfigError),
}

/// Why no user could be attached to an event. Never leaves the reporter.
#[derive(Debug, Error)]
pub enum IdentityError {
    #[error("no identity extractor configured")]
    NoExtractor,

    #[error("no token manager found in request context")]
    NoTokenManager,

    #[error("no token found in request context")]
    NoToken,

    #[error("failed to parse token: {0}")]
    TokenParse(#[from] TokenError),
}
