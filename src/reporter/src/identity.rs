use reporter_auth::{RequestContext, TokenError};
use serde::{Deserialize, Serialize};

use crate::error::IdentityError;

/// The user attached to a reported event. Either complete or absent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    pub username: String,
    pub email: String,
    pub id: String,
}

impl From<UserIdentity> for sentry::User {
    fn from(identity: UserIdentity) -> Self {
        sentry::User {
            id: Some(identity.id),
            email: Some(identity.email),
            username: Some(identity.username),
            ..Default::default()
        }
    }
}

/// Derives the user behind a request.
///
/// Implementations must not mutate the context and should be cheap: they run
/// on the calling thread for every captured error.
pub trait IdentityExtractor: Send + Sync {
    fn extract(&self, ctx: &RequestContext) -> Result<UserIdentity, IdentityError>;
}

impl<F> IdentityExtractor for F
where
    F: Fn(&RequestContext) -> Result<UserIdentity, IdentityError> + Send + Sync,
{
    fn extract(&self, ctx: &RequestContext) -> Result<UserIdentity, IdentityError> {
        self(ctx)
    }
}

/// Default extractor: events are reported without a user.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoExtractor;

impl IdentityExtractor for NoExtractor {
    fn extract(&self, _ctx: &RequestContext) -> Result<UserIdentity, IdentityError> {
        Err(IdentityError::NoExtractor)
    }
}

/// Reads the bearer token from the request and maps its claims to a user.
#[derive(Clone, Copy, Debug, Default)]
pub struct TokenIdentityExtractor;

impl IdentityExtractor for TokenIdentityExtractor {
    fn extract(&self, ctx: &RequestContext) -> Result<UserIdentity, IdentityError> {
        let parser = ctx.token_parser().ok_or(IdentityError::NoTokenManager)?;
        let raw = ctx.token().ok_or(IdentityError::NoToken)?;
        let claims = parser.parse_token(raw)?;

        // parsers other than JwtTokenManager may hand back blank claims
        for (claim, value) in [
            ("sub", claims.subject()),
            ("preferred_username", claims.username()),
            ("email", claims.email()),
        ] {
            if value.is_empty() {
                return Err(TokenError::MissingClaim(claim).into());
            }
        }

        Ok(UserIdentity {
            username: claims.username().to_string(),
            email: claims.email().to_string(),
            id: claims.subject().to_string(),
        })
    }
}
