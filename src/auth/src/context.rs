use std::fmt;
use std::sync::Arc;

use typed_builder::TypedBuilder;

use crate::TokenParser;

const BEARER_SCHEME: &str = "Bearer ";

/// Authentication data attached to a single request.
///
/// Both the parser and the token are optional: a request that never went
/// through the authentication middleware simply carries neither.
#[derive(Clone, Default, TypedBuilder)]
pub struct RequestContext {
    #[builder(default, setter(strip_option))]
    token_parser: Option<Arc<dyn TokenParser>>,

    #[builder(default, setter(into, strip_option))]
    token: Option<String>,

    #[builder(default, setter(into, strip_option))]
    request_id: Option<String>,
}

impl RequestContext {
    pub fn token_parser(&self) -> Option<&dyn TokenParser> {
        self.token_parser.as_deref()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }
}

impl fmt::Debug for RequestContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // never print the token itself
        f.debug_struct("RequestContext")
            .field("token_parser", &self.token_parser.is_some())
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("request_id", &self.request_id)
            .finish()
    }
}

/// Extracts the raw token from an `Authorization` header value.
pub fn bearer_token(header_value: &str) -> Option<&str> {
    let token = header_value.trim().strip_prefix(BEARER_SCHEME)?.trim();
    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}
