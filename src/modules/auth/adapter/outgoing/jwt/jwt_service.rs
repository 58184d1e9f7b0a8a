use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::jwt_config::JwtConfig;
use crate::modules::auth::application::ports::outgoing::TokenProvider;

/// Structure for JWT Claims
#[derive(Debug, Serialize, Deserialize)]
pub struct JwtClaims {
    pub sub: Uuid,          // User ID
    pub exp: i64,           // Expiration timestamp
    pub token_type: String, // Always "session"
}

#[derive(Clone)]
pub struct JwtTokenService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl JwtTokenService {
    /// Initialize the service with config
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret_key.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret_key.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }
}

impl TokenProvider for JwtTokenService {
    fn sign_session_token(&self, user_id: Uuid) -> Result<String, String> {
        let expiration = Utc::now() + Duration::seconds(self.config.session_token_expiry);
        let claims = JwtClaims {
            sub: user_id,
            exp: expiration.timestamp(),
            token_type: "session".to_string(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| e.to_string())
    }

    fn verify_session_token(&self, token: &str) -> Result<Uuid, String> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false; // Enforced manually below

        let decoded = decode::<JwtClaims>(token, &self.decoding_key, &validation)
            .map_err(|e| e.to_string())?;

        let now = Utc::now().timestamp();
        if decoded.claims.exp < now {
            return Err("Token has expired".to_string());
        }

        if decoded.claims.token_type != "session" {
            return Err("Invalid token type".to_string());
        }

        Ok(decoded.claims.sub)
    }
}
