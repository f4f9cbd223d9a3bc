//! Caller identity carried by bearer tokens
//!
//! Tokens are issued by the external authentication service; this server only
//! verifies them and reads the role.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// User role. Lector may only read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Lector,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Lector => "lector",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// JWT Claims for authenticated users
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserClaims {
    pub sub: String,
    pub role: Role,
    pub exp: i64,
    pub iat: i64,
}

impl UserClaims {
    /// Claims valid for `hours` from now
    pub fn new(sub: impl Into<String>, role: Role, hours: i64) -> Self {
        let now = chrono::Utc::now();
        Self {
            sub: sub.into(),
            role,
            iat: now.timestamp(),
            exp: (now + chrono::Duration::hours(hours)).timestamp(),
        }
    }

    /// Create a new JWT token
    pub fn create_token(&self, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
        use jsonwebtoken::{encode, EncodingKey, Header};
        encode(
            &Header::default(),
            self,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
    }

    /// Parse JWT token
    pub fn from_token(token: &str, secret: &str) -> Result<Self, jsonwebtoken::errors::Error> {
        use jsonwebtoken::{decode, DecodingKey, Validation};
        let token_data = decode::<Self>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::default(),
        )?;
        Ok(token_data.claims)
    }

    /// Both roles may read records
    pub fn require_read_equipment(&self) -> Result<(), AppError> {
        Ok(())
    }

    pub fn require_write_equipment(&self) -> Result<(), AppError> {
        match self.role {
            Role::Admin => Ok(()),
            Role::Lector => Err(AppError::Authorization(
                "Insufficient rights to modify equipment records".to_string(),
            )),
        }
    }
}
