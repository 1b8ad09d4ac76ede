//! HS256 session tokens.
//!
//! Tokens are stateless: validity comes from the signature and the `exp` claim.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

pub const TOKEN_TYPE: &str = "bearer";

/// Claims carried by every session token
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Claims {
    /// Username the token was issued to
    pub sub: String,
    /// Expiry, UTC Unix timestamp
    pub exp: i64,
    /// Issued-at, UTC Unix timestamp
    pub iat: i64,
}

#[derive(Clone)]
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: Duration,
}

impl std::fmt::Debug for TokenIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenIssuer")
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}

impl TokenIssuer {
    pub fn new(secret: &str, ttl_minutes: i64) -> AppResult<Self> {
        let ttl = Duration::try_minutes(ttl_minutes).ok_or_else(|| {
            AppError::Internal(format!("Token TTL of {} minutes is out of range", ttl_minutes))
        })?;

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl,
        })
    }

    /// Sign a token for `username` expiring `ttl` from now
    pub fn issue(&self, username: &str) -> AppResult<String> {
        let now = Utc::now();
        let expires = now
            .checked_add_signed(self.ttl)
            .ok_or_else(|| AppError::Internal("Token expiry overflows".to_string()))?;
        let claims = Claims {
            sub: username.to_string(),
            exp: expires.timestamp(),
            iat: now.timestamp(),
        };

        Ok(encode(&Header::default(), &claims, &self.encoding_key)?)
    }

    /// Check signature and expiry, returning the embedded claims
    pub fn verify(&self, token: &str) -> AppResult<Claims> {
        let data = decode::<Claims>(token, &self.decoding_key, &Validation::default())?;
        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::{assert_err, assert_ok};

    #[test]
    fn test_issue_and_verify() {
        let issuer = TokenIssuer::new("test-secret", 30).unwrap();
        let token = issuer.issue("alice").unwrap();

        let claims = issuer.verify(&token).unwrap();
        assert_eq!(claims.sub, "alice");
        assert_eq!(claims.exp - claims.iat, 30 * 60);
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = assert_ok!(TokenIssuer::new("secret-a", 30).unwrap().issue("alice"));
        assert_err!(TokenIssuer::new("secret-b", 30).unwrap().verify(&token));
    }

    #[test]
    fn test_expired_token_rejected() {
        // Negative TTL well past jsonwebtoken's default 60s leeway
        let issuer = TokenIssuer::new("test-secret", -10).unwrap();
        let token = issuer.issue("alice").unwrap();
        assert_err!(issuer.verify(&token));
    }

    #[test]
    fn test_out_of_range_ttl_is_error() {
        assert_err!(TokenIssuer::new("test-secret", i64::MAX));
        assert_err!(TokenIssuer::new("test-secret", i64::MIN));
    }

    #[test]
    fn test_expiry_overflow_is_error() {
        // Representable as a duration, but past chrono's maximum date once added to now
        let issuer = assert_ok!(TokenIssuer::new("test-secret", i64::MAX / 60_000 - 1));
        assert_err!(issuer.issue("alice"));
    }
}
