use std::future::Future;
use std::pin::Pin;

use actix_web::dev::Payload;
use actix_web::http::header::AUTHORIZATION;
use actix_web::{web, FromRequest, HttpRequest};
use serde::de::DeserializeOwned;

use crate::auth::jwt::decode_claims;
use crate::error::AppError;
use crate::state::app_state::AppState;

/// Pull the token out of an `Authorization: Bearer <token>` header.
pub fn bearer_token(req: &HttpRequest) -> Result<String, AppError> {
    let auth_value = req
        .headers()
        .get(AUTHORIZATION)
        .ok_or_else(AppError::unauthorized_missing_bearer)?
        .to_str()
        .map_err(|_| AppError::unauthorized_missing_bearer())?;

    let parts: Vec<&str> = auth_value.split_whitespace().collect();
    match parts.as_slice() {
        ["Bearer", token] if !token.is_empty() => Ok((*token).to_string()),
        _ => Err(AppError::unauthorized_missing_bearer()),
    }
}

/// Verified claims of the request's bearer token
#[derive(Debug, Clone)]
pub struct JwtClaims<C> {
    pub claims: C,
}

impl<C> FromRequest for JwtClaims<C>
where
    C: DeserializeOwned + 'static,
{
    type Error = AppError;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let req = req.clone();

        Box::pin(async move {
            let token = bearer_token(&req)?;

            let app_state = req
                .app_data::<web::Data<AppState>>()
                .ok_or_else(|| AppError::internal("AppState not found"))?;

            let claims = decode_claims::<C>(&token, &app_state.security)?;
            Ok(JwtClaims { claims })
        })
    }
}
