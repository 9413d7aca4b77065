use serde::{Deserialize, Serialize};

/// Claims the reporter cares about. Anything else in the token is ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    #[serde(default)]
    pub sub: String,
    #[serde(default)]
    pub preferred_username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub exp: u64,
}

impl TokenClaims {
    pub fn subject(&self) -> &str {
        &self.sub
    }

    pub fn username(&self) -> &str {
        &self.preferred_username
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}
