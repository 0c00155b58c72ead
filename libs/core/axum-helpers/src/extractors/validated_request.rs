//! Extractor that runs a [`RuleSet`] over path parameters and the JSON body
//! before the handler sees the request.

use crate::errors::AppError;
use crate::validation::{RequestInput, RuleSet, gate};
use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::header::CONTENT_TYPE,
    response::{IntoResponse, Response},
};
use serde_json::Value;
use std::collections::HashMap;

/// A request shape with declared validation rules.
///
/// `from_validated` is only called once `rules()` reported no violations, so
/// it can rely on every checked field being well-formed.
pub trait ValidatedInput: Sized {
    type Rejection: IntoResponse;

    fn rules() -> RuleSet;

    fn from_validated(input: RequestInput) -> Result<Self, Self::Rejection>;
}

/// Extracts `T` after its rule set passed.
///
/// Violations are answered with `400 {"errors": [...]}`. Bodies without a JSON
/// content type are validated as `{}`; a malformed JSON body is a 400
/// `INVALID_JSON`.
///
/// # Example
/// ```ignore
/// async fn create(ValidatedRequest(input): ValidatedRequest<CreateProductRequest>) { .. }
/// ```
pub struct ValidatedRequest<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedRequest<T>
where
    T: ValidatedInput,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let (mut parts, body) = req.into_parts();

        let params = Path::<HashMap<String, String>>::from_request_parts(&mut parts, state)
            .await
            .map(|Path(params)| params)
            .unwrap_or_default();

        let is_json = parts
            .headers
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|content_type| content_type.contains("application/json"));

        let bytes = Bytes::from_request(Request::from_parts(parts, body), state)
            .await
            .map_err(|e| AppError::from(e).into_response())?;

        let body = if is_json && !bytes.is_empty() {
            serde_json::from_slice(&bytes).map_err(|e| AppError::from(e).into_response())?
        } else {
            Value::Object(Default::default())
        };

        let input = RequestInput::new(params, body);
        gate(T::rules().check(&input)).map_err(IntoResponse::into_response)?;

        T::from_validated(input)
            .map(ValidatedRequest)
            .map_err(IntoResponse::into_response)
    }
}
