//! Custom extractors for Axum handlers.

pub mod validated_request;

pub use validated_request::{ValidatedInput, ValidatedRequest};
