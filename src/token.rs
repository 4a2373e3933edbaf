//! Stateless session token issuance.
//!
//! Validity is decided solely by signature and expiry at verification time;
//! verification itself lives with the callers consuming the tokens.

use anyhow::{Context, Result};
use jsonwebtoken::{encode, EncodingKey, Header};
use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime};
use uuid::Uuid;

use crate::models::{Role, User};

/// Claim set embedded in an issued token.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub user_id: Uuid,
    pub role: Role,
    /// Absolute expiry as a unix timestamp.
    pub exp: i64,
}

pub struct TokenIssuer {
    secret: String,
    token_duration: Duration,
}

impl TokenIssuer {
    pub fn new(secret: impl Into<String>, token_duration: Duration) -> Self {
        Self {
            secret: secret.into(),
            token_duration,
        }
    }

    /// Signs a claim set for the user, expiring `token_duration` from now.
    pub fn generate(&self, user: &User) -> Result<String> {
        let expires_at = OffsetDateTime::now_utc() + self.token_duration;
        let claims = Claims {
            user_id: user.id,
            role: user.role,
            exp: expires_at.unix_timestamp(),
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .context("failed to sign token")
    }
}
