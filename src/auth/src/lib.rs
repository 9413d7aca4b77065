//! Request-scoped authentication data consumed by the error reporter.
//!
//! The reporter never talks to an identity provider itself. It reads a
//! [`TokenParser`] and a raw bearer token out of a [`RequestContext`] and asks
//! the parser for the [`TokenClaims`] of the caller.

pub mod claims;
pub mod context;
pub mod error;
pub mod jwt;
#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use claims::TokenClaims;
pub use context::{bearer_token, RequestContext};
pub use error::TokenError;
pub use jwt::JwtTokenManager;

/// Turns a raw bearer token into verified claims.
pub trait TokenParser: Send + Sync {
    fn parse_token(&self, raw: &str) -> Result<TokenClaims, TokenError>;
}
