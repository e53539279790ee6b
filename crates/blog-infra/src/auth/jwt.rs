//! JWT token service implementation.

use chrono::{TimeDelta, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use blog_core::ports::{AuthError, IdentityClaims, TokenService};

/// Default signing secret. Only acceptable outside production.
pub const DEFAULT_JWT_SECRET: &str = "change-me-in-production";

/// Registered claim names owned by the token service.
const RESERVED_CLAIMS: [&str; 3] = ["exp", "iat", "iss"];

/// JWT token service configuration.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub expiration_hours: i64,
    pub issuer: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: DEFAULT_JWT_SECRET.to_string(),
            expiration_hours: 10,
            issuer: "blog-api".to_string(),
        }
    }
}

/// Wire form of the token payload: the caller's identity plus the
/// registered claims.
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    #[serde(flatten)]
    identity: IdentityClaims,
    exp: i64,
    iat: i64,
    iss: String,
}

/// JWT-based token service (HS256).
pub struct JwtTokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    config: JwtConfig,
}

impl JwtTokenService {
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        Self {
            encoding_key,
            decoding_key,
            config,
        }
    }
}

impl TokenService for JwtTokenService {
    fn issue(&self, identity: &IdentityClaims) -> Result<String, AuthError> {
        let now = Utc::now();
        let exp = now + TimeDelta::hours(self.config.expiration_hours);

        let mut identity = identity.clone();
        for reserved in RESERVED_CLAIMS {
            identity.extra.remove(reserved);
        }

        let claims = Claims {
            identity,
            exp: exp.timestamp(),
            iat: now.timestamp(),
            iss: self.config.issuer.clone(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AuthError::Signing(e.to_string()))
    }

    fn verify(&self, token: &str) -> Result<IdentityClaims, AuthError> {
        let mut validation = Validation::default();
        validation.set_issuer(&[&self.config.issuer]);
        validation.leeway = 0;

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => AuthError::InvalidToken(e.to_string()),
            }
        })?;

        Ok(token_data.claims.identity)
    }

    fn expiration_seconds(&self) -> i64 {
        self.config.expiration_hours * 3600
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn test_config() -> JwtConfig {
        JwtConfig {
            secret: "test-secret-key".to_string(),
            expiration_hours: 1,
            issuer: "test-issuer".to_string(),
        }
    }

    #[test]
    fn test_issue_token_success() {
        let service = JwtTokenService::new(test_config());

        let token = service
            .issue(&IdentityClaims::with_email("test@example.com"))
            .unwrap();

        assert!(!token.is_empty());
        assert_eq!(token.split('.').count(), 3);
    }

    #[test]
    fn test_verify_round_trips_identity() {
        let service = JwtTokenService::new(test_config());
        let mut identity = IdentityClaims::with_email("test@example.com");
        identity.extra.insert("name".to_string(), json!("Tester"));
        identity.extra.insert("uid".to_string(), json!(42));

        let token = service.issue(&identity).unwrap();
        let claims = service.verify(&token).unwrap();

        assert_eq!(claims, identity);
    }

    #[test]
    fn test_reserved_claims_are_not_taken_from_the_caller() {
        let service = JwtTokenService::new(test_config());
        let mut identity = IdentityClaims::with_email("test@example.com");
        identity.extra.insert("exp".to_string(), json!(0));

        let token = service.issue(&identity).unwrap();
        let claims = service.verify(&token).unwrap();

        assert_eq!(claims.email, "test@example.com");
        assert!(!claims.extra.contains_key("exp"));
    }

    #[test]
    fn test_verify_invalid_token() {
        let service = JwtTokenService::new(test_config());

        let result = service.verify("invalid-token");

        assert!(matches!(result.unwrap_err(), AuthError::InvalidToken(_)));
    }

    #[test]
    fn test_verify_expired_token() {
        let issuer = JwtTokenService::new(JwtConfig {
            expiration_hours: -1,
            ..test_config()
        });
        let verifier = JwtTokenService::new(test_config());

        let token = issuer
            .issue(&IdentityClaims::with_email("late@example.com"))
            .unwrap();

        assert!(matches!(
            verifier.verify(&token).unwrap_err(),
            AuthError::TokenExpired
        ));
    }

    #[test]
    fn test_verify_wrong_secret() {
        let service = JwtTokenService::new(test_config());
        let other = JwtTokenService::new(JwtConfig {
            secret: "another-secret".to_string(),
            ..test_config()
        });

        let token = other
            .issue(&IdentityClaims::with_email("test@test.com"))
            .unwrap();

        assert!(service.verify(&token).is_err());
    }

    #[test]
    fn test_verify_wrong_issuer_token() {
        let service1 = JwtTokenService::new(JwtConfig {
            issuer: "issuer1".to_string(),
            ..test_config()
        });
        let service2 = JwtTokenService::new(JwtConfig {
            issuer: "issuer2".to_string(),
            ..test_config()
        });

        let token = service1
            .issue(&IdentityClaims::with_email("test@test.com"))
            .unwrap();

        assert!(service2.verify(&token).is_err());
    }

    #[test]
    fn test_expiration_seconds() {
        let service = JwtTokenService::new(JwtConfig::default());

        assert_eq!(service.expiration_seconds(), 36000);
    }
}
