//! HTTP middleware module.
//!
//! This module provides HTTP-level middleware for:
//! - CORS configuration and origin enforcement
//! - Security headers
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::http::{AllowedOrigin, create_cors_layer, origin_guard, security_headers};
//!
//! let app = Router::new()
//!     .layer(axum::middleware::from_fn(security_headers))
//!     .layer(axum::middleware::from_fn_with_state(AllowedOrigin::new(origin.clone()), origin_guard))
//!     .layer(create_cors_layer(origin));
//! ```

pub mod cors;
pub mod security;

pub use cors::{AllowedOrigin, CORS_REJECTION_MESSAGE, create_cors_layer, origin_guard};
pub use security::security_headers;
