use std::env;

use jsonwebtoken::Algorithm;

use crate::error::AppError;

/// Verification settings for identity-provider tokens
#[derive(Debug, Clone)]
pub struct SecurityConfig {
    /// Shared secret the identity provider signs tokens with
    pub jwt_secret: Vec<u8>,
    /// JWT algorithm to use (defaults to HS256)
    pub algorithm: Algorithm,
}

impl SecurityConfig {
    pub fn new(jwt_secret: impl Into<Vec<u8>>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            algorithm: Algorithm::HS256,
        }
    }

    /// Read `BACKEND_JWT_SECRET`; missing or empty is a configuration error.
    pub fn from_env() -> Result<Self, AppError> {
        match env::var("BACKEND_JWT_SECRET") {
            Ok(secret) if !secret.trim().is_empty() => Ok(Self::new(secret.into_bytes())),
            _ => Err(AppError::config(
                "BACKEND_JWT_SECRET must be set to the identity provider's signing secret",
            )),
        }
    }
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self::new(b"default_secret_for_tests_only".to_vec())
    }
}
