//! Reusable OpenAPI response types for consistent API documentation.

use super::ErrorResponse;
use crate::validation::InputErrors;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/json",
    example = json!({
        "code": 1005,
        "error": "INTERNAL_ERROR",
        "message": "An internal server error occurred"
    })
)]
pub struct InternalServerErrorResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Validation Error",
    content_type = "application/json",
    example = json!({
        "errors": [
            {
                "field": "name",
                "message": "El nombre del producto no puede ir vacio",
                "location": "body",
                "value": ""
            },
            {
                "field": "price",
                "message": "Precio no valido",
                "location": "body",
                "value": -5
            }
        ]
    })
)]
pub struct BadRequestValidationResponse(pub InputErrors);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Malformed JSON body",
    content_type = "application/json",
    example = json!({
        "code": 1010,
        "error": "INVALID_JSON",
        "message": "Invalid JSON format",
        "details": { "reason": "key must be a string at line 1 column 3" }
    })
)]
pub struct BadRequestJsonResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Forbidden - Origin not allowed",
    content_type = "application/json",
    example = json!({
        "code": 1007,
        "error": "FORBIDDEN",
        "message": "Error de CORS"
    })
)]
pub struct ForbiddenResponse(pub ErrorResponse);
