use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::de::DeserializeOwned;

use super::claims::IdentityClaims;
use crate::state::security_config::SecurityConfig;
use crate::AppError;

/// Lifetime of tokens minted by `mint_access_token`.
pub const ACCESS_TOKEN_TTL_SECS: i64 = 15 * 60;

/// Mint a token the way the identity provider does. Used by tests and local tooling.
pub fn mint_access_token(
    sub: &str,
    name: Option<&str>,
    now: SystemTime,
    security: &SecurityConfig,
) -> Result<String, AppError> {
    let iat = now
        .duration_since(UNIX_EPOCH)
        .map_err(|_| AppError::internal("Failed to get current time"))?
        .as_secs() as i64;

    let claims = IdentityClaims {
        sub: sub.to_string(),
        name: name.map(str::to_string),
        iat,
        exp: iat + ACCESS_TOKEN_TTL_SECS,
    };

    encode(
        &Header::new(security.algorithm),
        &claims,
        &EncodingKey::from_secret(&security.jwt_secret),
    )
    .map_err(|e| AppError::internal(format!("Failed to encode JWT: {e}")))
}

/// Decode and validate a token into any claims type.
///
/// Expired tokens map to `UnauthorizedExpiredJwt`; every other failure to
/// `UnauthorizedInvalidJwt`.
pub fn decode_claims<C: DeserializeOwned>(
    token: &str,
    security: &SecurityConfig,
) -> Result<C, AppError> {
    // Default Validation already checks exp; pin algorithm to configured algorithm.
    let validation = Validation::new(security.algorithm);

    decode::<C>(
        token,
        &DecodingKey::from_secret(&security.jwt_secret),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        ErrorKind::ExpiredSignature => AppError::unauthorized_expired_jwt(),
        _ => AppError::unauthorized_invalid_jwt(),
    })
}

pub fn verify_access_token(
    token: &str,
    security: &SecurityConfig,
) -> Result<IdentityClaims, AppError> {
    decode_claims(token, security)
}
