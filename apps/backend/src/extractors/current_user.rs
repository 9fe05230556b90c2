use std::future::Future;
use std::pin::Pin;

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use serde::Serialize;

use super::jwt::JwtClaims;
use crate::auth::claims::IdentityClaims;
use crate::error::AppError;

/// The authenticated caller, as described by the identity provider's token.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CurrentUser {
    pub sub: String,
    pub display_name: String,
}

impl From<IdentityClaims> for CurrentUser {
    fn from(claims: IdentityClaims) -> Self {
        let display_name = claims.display_name().to_string();
        Self {
            sub: claims.sub,
            display_name,
        }
    }
}

impl FromRequest for CurrentUser {
    type Error = AppError;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let claims = JwtClaims::<IdentityClaims>::from_request(req, payload);
        Box::pin(async move { Ok(CurrentUser::from(claims.await?.claims)) })
    }
}
