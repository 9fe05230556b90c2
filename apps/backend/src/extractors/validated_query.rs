use std::ops::Deref;

use actix_web::dev::Payload;
use actix_web::{web, FromRequest, HttpRequest};
use futures_util::future::{ready, Ready};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::AppError;
use crate::errors::ErrorCode;

/// Query-string extractor whose failures render as problem details.
///
/// Missing parameters and values of the wrong type become a 400
/// `BAD_REQUEST` instead of actix's plain-text rejection.
#[derive(Debug)]
pub struct ValidatedQuery<T>(pub T);

impl<T> ValidatedQuery<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for ValidatedQuery<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> FromRequest for ValidatedQuery<T>
where
    T: DeserializeOwned + 'static,
{
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let result = web::Query::<T>::from_query(req.query_string())
            .map(|q| ValidatedQuery(q.into_inner()))
            .map_err(|e| {
                debug!(path = %req.path(), error = %e, "Rejected query string");
                AppError::bad_request(
                    ErrorCode::BadRequest,
                    format!("Invalid query parameters: {e}"),
                )
            });
        ready(result)
    }
}
