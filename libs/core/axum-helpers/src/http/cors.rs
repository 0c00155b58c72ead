use crate::errors::AppError;
use axum::{
    extract::{Request, State},
    http::{HeaderValue, Method, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::time::Duration;
use tower_http::cors::CorsLayer;

/// Message returned when a request comes from a foreign origin.
pub const CORS_REJECTION_MESSAGE: &str = "Error de CORS";

/// Creates a CORS layer that advertises a single allowed origin.
///
/// The layer answers preflights and sets `Access-Control-*` headers; it does
/// not refuse requests. Pair it with [`origin_guard`] to reject them.
pub fn create_cors_layer(allowed_origin: HeaderValue) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(allowed_origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .max_age(Duration::from_secs(3600))
}

/// The only origin browsers may call the API from.
#[derive(Debug, Clone)]
pub struct AllowedOrigin(HeaderValue);

impl AllowedOrigin {
    pub fn new(origin: HeaderValue) -> Self {
        Self(origin)
    }

    pub fn matches(&self, origin: &HeaderValue) -> bool {
        self.0 == origin
    }
}

/// Rejects every request whose `Origin` header is not the allowed origin.
///
/// A missing `Origin` counts as a mismatch. Mount docs and health probes
/// outside the guarded router.
pub async fn origin_guard(
    State(allowed): State<AllowedOrigin>,
    request: Request,
    next: Next,
) -> Response {
    let origin = request.headers().get(header::ORIGIN);
    if origin.is_some_and(|origin| allowed.matches(origin)) {
        return next.run(request).await;
    }

    tracing::warn!(origin = ?origin, "Rejected request from disallowed origin");
    AppError::Forbidden(CORS_REJECTION_MESSAGE.to_string()).into_response()
}
