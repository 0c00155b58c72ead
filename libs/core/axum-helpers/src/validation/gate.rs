use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use utoipa::ToSchema;

use super::Violation;
use crate::errors::ErrorCode;

/// 400 response carrying every violation collected for a request.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct InputErrors {
    pub errors: Vec<Violation>,
}

/// Lets the request through when no rule failed.
pub fn gate(violations: Vec<Violation>) -> Result<(), InputErrors> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(InputErrors { errors: violations })
    }
}

impl IntoResponse for InputErrors {
    fn into_response(self) -> Response {
        tracing::info!(
            error_code = ErrorCode::ValidationError.code(),
            violations = self.errors.len(),
            fields = ?self.errors.iter().map(|v| v.field.as_str()).collect::<Vec<_>>(),
            "Request rejected by validation"
        );

        (StatusCode::BAD_REQUEST, Json(self)).into_response()
    }
}
