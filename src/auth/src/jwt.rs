use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use tracing::debug;

use crate::claims::TokenClaims;
use crate::error::TokenError;
use crate::TokenParser;

/// Verifies signed JWTs against a single key and returns their claims.
///
/// The expiry is always checked. Issuer and audience are only checked when
/// configured with [`JwtTokenManager::with_issuer`] and
/// [`JwtTokenManager::with_audience`].
#[derive(Clone)]
pub struct JwtTokenManager {
    key: DecodingKey,
    validation: Validation,
}

impl JwtTokenManager {
    pub fn new(key: DecodingKey, algorithm: Algorithm) -> Self {
        let mut validation = Validation::new(algorithm);
        validation.validate_exp = true;
        validation.validate_aud = false;

        Self { key, validation }
    }

    /// RS256 manager from a PEM encoded RSA public key.
    pub fn from_rsa_pem(pem: &[u8]) -> Result<Self, TokenError> {
        let key = DecodingKey::from_rsa_pem(pem)?;
        Ok(Self::new(key, Algorithm::RS256))
    }

    pub fn with_issuer(mut self, issuer: &str) -> Self {
        self.validation.set_issuer(&[issuer]);
        self
    }

    pub fn with_audience(mut self, audience: &str) -> Self {
        self.validation.set_audience(&[audience]);
        self.validation.validate_aud = true;
        self
    }
}

impl TokenParser for JwtTokenManager {
    fn parse_token(&self, raw: &str) -> Result<TokenClaims, TokenError> {
        let token_data = decode::<TokenClaims>(raw, &self.key, &self.validation).map_err(|err| {
            debug!("rejected token: {}", err);
            TokenError::from(err)
        })?;
        let claims = token_data.claims;

        if claims.sub.is_empty() {
            return Err(TokenError::MissingClaim("sub"));
        }
        if claims.preferred_username.is_empty() {
            return Err(TokenError::MissingClaim("preferred_username"));
        }
        if claims.email.is_empty() {
            return Err(TokenError::MissingClaim("email"));
        }

        Ok(claims)
    }
}
