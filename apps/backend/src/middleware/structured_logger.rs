//! One `request_completed` event per request, levelled by status class.
//!
//! Carries the matched route pattern rather than the raw path, and the
//! `name` query parameter as `player` when the request names one.

use std::future::{ready, Ready};
use std::time::Instant;

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::StatusCode;
use actix_web::{web, Error as ActixError, HttpMessage};
use futures_util::future::LocalBoxFuture;
use serde::Deserialize;
use tracing::{error, info, warn};

use super::request_trace::TraceId;
use crate::web::trace_ctx::UNKNOWN_TRACE_ID;

#[derive(Deserialize)]
struct PlayerParam {
    name: String,
}

/// What the completion event needs, captured before the request is handed on.
#[derive(Debug)]
struct RequestSummary {
    method: String,
    route: String,
    player: Option<String>,
    trace_id: String,
}

impl RequestSummary {
    fn from_request(req: &ServiceRequest) -> Self {
        let route = req
            .request()
            .match_pattern()
            .unwrap_or_else(|| req.path().to_string());
        let player = web::Query::<PlayerParam>::from_query(req.query_string())
            .ok()
            .map(|q| q.into_inner().name);
        let trace_id = req
            .extensions()
            .get::<TraceId>()
            .map(|t| t.0.clone())
            .unwrap_or_else(|| UNKNOWN_TRACE_ID.to_string());

        Self {
            method: req.method().to_string(),
            route,
            player,
            trace_id,
        }
    }

    fn emit(&self, status: StatusCode, duration_us: u64) {
        let status_code = status.as_u16();
        let player = self.player.as_deref();

        if status.is_server_error() {
            error!(
                http.method = %self.method,
                http.route = %self.route,
                player,
                http.status_code = status_code,
                duration_us,
                trace_id = %self.trace_id,
                "request_completed"
            );
        } else if status.is_client_error() {
            warn!(
                http.method = %self.method,
                http.route = %self.route,
                player,
                http.status_code = status_code,
                duration_us,
                trace_id = %self.trace_id,
                "request_completed"
            );
        } else {
            info!(
                http.method = %self.method,
                http.route = %self.route,
                player,
                http.status_code = status_code,
                duration_us,
                trace_id = %self.trace_id,
                "request_completed"
            );
        }
    }
}

pub struct StructuredLogger;

impl<S, B> Transform<S, ServiceRequest> for StructuredLogger
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type InitError = ();
    type Transform = StructuredLoggerMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(StructuredLoggerMiddleware { service }))
    }
}

pub struct StructuredLoggerMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for StructuredLoggerMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let start = Instant::now();
        let summary = RequestSummary::from_request(&req);
        let fut = self.service.call(req);

        Box::pin(async move {
            let result = fut.await;

            let status = match &result {
                Ok(res) => res.status(),
                Err(err) => err.as_response_error().status_code(),
            };
            summary.emit(status, start.elapsed().as_micros() as u64);

            result
        })
    }
}
