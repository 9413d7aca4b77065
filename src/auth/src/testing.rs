//! Token fixtures for tests. Never enable the `testing` feature in a release build.

use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};

use crate::claims::TokenClaims;
use crate::jwt::JwtTokenManager;

pub const TEST_PRIVATE_KEY: &str = include_str!("../tests/fixtures/private_key.pem");
pub const TEST_PUBLIC_KEY: &str = include_str!("../tests/fixtures/public_key.pem");

/// A token with an RS256 header, no claims and no signature.
const INCOMPLETE_TOKEN: &str = "eyJhbGciOiJSUzI1NiIsInR5cCI6IkpXVCJ9.e30.";

/// Manager that accepts tokens produced by [`generate_token`].
pub fn test_token_manager() -> JwtTokenManager {
    JwtTokenManager::from_rsa_pem(TEST_PUBLIC_KEY.as_bytes())
        .expect("test public key must be a valid RSA PEM")
}

/// Signs a token valid for one hour. The email is derived as `{username}@email.com`.
pub fn generate_token(identity_id: &str, username: &str) -> String {
    generate_token_with_claims(&TokenClaims {
        sub: identity_id.to_string(),
        preferred_username: username.to_string(),
        email: format!("{}@email.com", username),
        exp: jsonwebtoken::get_current_timestamp() + 3600,
    })
}

pub fn generate_token_with_claims(claims: &TokenClaims) -> String {
    let key = EncodingKey::from_rsa_pem(TEST_PRIVATE_KEY.as_bytes())
        .expect("test private key must be a valid RSA PEM");
    encode(&Header::new(Algorithm::RS256), claims, &key).expect("failed to sign test token")
}

pub fn incomplete_token() -> String {
    INCOMPLETE_TOKEN.to_string()
}
