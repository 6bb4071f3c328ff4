use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::{
    error::{AppError, AppResult},
    models::Identity,
};

/// How long an issued session token stays valid
const TOKEN_TTL_HOURS: i64 = 24;

/// Claims carried by a session token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User id
    pub sub: String,
    pub username: String,
    pub role: String,
    /// Expiry as a unix timestamp
    pub exp: i64,
}

/// Issues and validates signed session tokens for authenticated identities
#[derive(Clone)]
pub struct TokenIssuer {
    secret: String,
}

impl TokenIssuer {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Signs a token for an authenticated identity
    pub fn issue(&self, identity: &Identity) -> AppResult<String> {
        let claims = Claims {
            sub: identity.user_id.to_string(),
            username: identity.username.clone(),
            role: identity.role.clone(),
            exp: (Utc::now() + Duration::hours(TOKEN_TTL_HOURS)).timestamp(),
        };

        jsonwebtoken::encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|e| AppError::Internal(format!("failed to sign token: {e}")))
    }

    /// Verifies a token's signature and expiry, returning its claims
    pub fn verify(&self, token: &str) -> AppResult<Claims> {
        jsonwebtoken::decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::default(),
        )
        .map(|data| data.claims)
        .map_err(|_| AppError::Unauthorized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity() -> Identity {
        Identity {
            user_id: 1,
            username: "ada".to_string(),
            role: "Admin".to_string(),
        }
    }

    #[test]
    fn test_issue_and_verify_round_trip() {
        let issuer = TokenIssuer::new("test-secret");
        let token = issuer.issue(&identity()).unwrap();

        let claims = issuer.verify(&token).unwrap();
        assert_eq!(claims.sub, "1");
        assert_eq!(claims.username, "ada");
        assert_eq!(claims.role, "Admin");
        assert!(claims.exp > Utc::now().timestamp());
    }

    #[test]
    fn test_verify_rejects_other_secret() {
        let token = TokenIssuer::new("one-secret").issue(&identity()).unwrap();
        let result = TokenIssuer::new("another-secret").verify(&token);
        assert!(matches!(result, Err(AppError::Unauthorized)));
    }

    #[test]
    fn test_verify_rejects_garbage() {
        let issuer = TokenIssuer::new("test-secret");
        assert!(issuer.verify("not-a-token").is_err());
    }
}
