use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Claims carried by every access token. `sub` is the account's mobile
/// number, `exp` a unix timestamp in seconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: usize,
}

/// Signing material for access tokens, built once at startup from the
/// configured secret. The algorithm is pinned to HS256 on both the issue
/// and validate paths; a token naming any other algorithm is rejected
/// outright, whatever its signature.
#[derive(Clone)]
pub struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl TokenKeys {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    pub fn issue(
        &self,
        subject: &str,
        ttl: Duration,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let claims = Claims {
            sub: subject.to_string(),
            exp: (Utc::now() + ttl).timestamp() as usize,
        };
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
    }

    /// Returns the subject of a structurally valid, correctly signed,
    /// unexpired token. Every failure mode collapses into one opaque error.
    pub fn validate(&self, token: &str) -> Result<String, jsonwebtoken::errors::Error> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        let data = decode::<Claims>(token, &self.decoding, &validation)?;
        Ok(data.claims.sub)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "unit-test-signing-secret";

    #[test]
    fn issued_token_validates_to_its_subject() {
        let keys = TokenKeys::new(SECRET);
        let token = keys.issue("9990001111", Duration::minutes(30)).unwrap();
        assert_eq!(keys.validate(&token).unwrap(), "9990001111");
    }

    #[test]
    fn validation_is_idempotent() {
        let keys = TokenKeys::new(SECRET);
        let token = keys.issue("9990001111", Duration::minutes(30)).unwrap();
        let first = keys.validate(&token).unwrap();
        let second = keys.validate(&token).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn expired_token_is_rejected() {
        let keys = TokenKeys::new(SECRET);
        // Past the decoder's default clock leeway.
        let token = keys.issue("9990001111", Duration::minutes(-5)).unwrap();
        assert!(keys.validate(&token).is_err());
    }

    #[test]
    fn token_signed_with_another_secret_is_rejected() {
        let keys = TokenKeys::new(SECRET);
        let other = TokenKeys::new("some-other-secret");
        let token = other.issue("9990001111", Duration::minutes(30)).unwrap();
        assert!(keys.validate(&token).is_err());
    }

    #[test]
    fn token_under_a_different_algorithm_is_rejected() {
        // Same secret, header re-signed as HS384: still refused because the
        // validator only ever accepts HS256.
        let keys = TokenKeys::new(SECRET);
        let claims = Claims {
            sub: "9990001111".to_string(),
            exp: (Utc::now() + Duration::minutes(30)).timestamp() as usize,
        };
        let forged = encode(
            &Header::new(Algorithm::HS384),
            &claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap();
        assert!(keys.validate(&forged).is_err());
    }

    #[test]
    fn token_without_subject_claim_is_rejected() {
        #[derive(Serialize)]
        struct NoSubject {
            exp: usize,
        }

        let keys = TokenKeys::new(SECRET);
        let claims = NoSubject {
            exp: (Utc::now() + Duration::minutes(30)).timestamp() as usize,
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap();
        assert!(keys.validate(&token).is_err());
    }

    #[test]
    fn garbage_input_is_rejected() {
        let keys = TokenKeys::new(SECRET);
        assert!(keys.validate("not.a.token").is_err());
        assert!(keys.validate("").is_err());
    }
}
