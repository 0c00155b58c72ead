//! Per-route input rules for the products API.
//!
//! | Route           | Rules                                      |
//! |-----------------|--------------------------------------------|
//! | `GET /{id}`     | id                                         |
//! | `POST /`        | name, price, optional availability         |
//! | `PUT /{id}`     | id, name, price, availability              |
//! | `PATCH /{id}`   | id                                         |
//! | `DELETE /{id}`  | id                                         |

use axum_helpers::validation::{FieldRule, RequestInput, RuleSet, body, checks, param};
use axum_helpers::ValidatedInput;
use serde_json::Value;

use crate::error::ProductError;
use crate::models::{CreateProduct, UpdateProduct};

pub const ID_INVALID: &str = "Id no valido";
pub const NAME_EMPTY: &str = "El nombre del producto no puede ir vacio";
pub const PRICE_NOT_NUMERIC: &str = "valor no valido";
pub const PRICE_EMPTY: &str = "El precio del producto no puede ir vacio";
pub const PRICE_NOT_POSITIVE: &str = "Precio no valido";
pub const AVAILABILITY_INVALID: &str = "valor para disponibilidad no valido";

fn is_positive(value: &Value) -> bool {
    checks::as_f64(value).is_some_and(|price| price > 0.0)
}

fn id() -> FieldRule {
    param("id").is_int().with_message(ID_INVALID)
}

fn name() -> FieldRule {
    body("name").not_empty().with_message(NAME_EMPTY)
}

fn price() -> FieldRule {
    body("price")
        .is_numeric()
        .with_message(PRICE_NOT_NUMERIC)
        .not_empty()
        .with_message(PRICE_EMPTY)
        .custom(is_positive)
        .with_message(PRICE_NOT_POSITIVE)
}

fn availability() -> FieldRule {
    body("availability")
        .is_boolean()
        .with_message(AVAILABILITY_INVALID)
}

pub fn id_rules() -> RuleSet {
    RuleSet::new().rule(id())
}

pub fn create_rules() -> RuleSet {
    RuleSet::new()
        .rule(name())
        .rule(price())
        .rule(availability().optional())
}

pub fn update_rules() -> RuleSet {
    RuleSet::new()
        .rule(id())
        .rule(name())
        .rule(price())
        .rule(availability())
}

fn parse_id(input: &RequestInput) -> Result<i64, ProductError> {
    let raw = input.param("id").unwrap_or_default();
    raw.parse()
        .map_err(|_| ProductError::UnknownId(raw.to_string()))
}

fn parse_name(input: &RequestInput) -> String {
    checks::as_text(input.field("name"))
}

fn parse_price(input: &RequestInput) -> Result<f64, ProductError> {
    input
        .field("price")
        .and_then(checks::as_f64)
        .ok_or_else(|| ProductError::Validation(PRICE_NOT_NUMERIC.to_string()))
}

fn parse_availability(input: &RequestInput) -> Result<Option<bool>, ProductError> {
    input
        .field("availability")
        .map(|value| {
            checks::as_bool(value)
                .ok_or_else(|| ProductError::Validation(AVAILABILITY_INVALID.to_string()))
        })
        .transpose()
}

/// A validated product id taken from the path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductId(pub i64);

impl ValidatedInput for ProductId {
    type Rejection = ProductError;

    fn rules() -> RuleSet {
        id_rules()
    }

    fn from_validated(input: RequestInput) -> Result<Self, ProductError> {
        parse_id(&input).map(ProductId)
    }
}

impl ValidatedInput for CreateProduct {
    type Rejection = ProductError;

    fn rules() -> RuleSet {
        create_rules()
    }

    fn from_validated(input: RequestInput) -> Result<Self, ProductError> {
        Ok(CreateProduct {
            name: parse_name(&input),
            price: parse_price(&input)?,
            availability: parse_availability(&input)?,
        })
    }
}

/// Path id plus the replacement fields of a `PUT`.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateProductRequest {
    pub id: i64,
    pub input: UpdateProduct,
}

impl ValidatedInput for UpdateProductRequest {
    type Rejection = ProductError;

    fn rules() -> RuleSet {
        update_rules()
    }

    fn from_validated(input: RequestInput) -> Result<Self, ProductError> {
        let availability = parse_availability(&input)?
            .ok_or_else(|| ProductError::Validation(AVAILABILITY_INVALID.to_string()))?;

        Ok(UpdateProductRequest {
            id: parse_id(&input)?,
            input: UpdateProduct {
                name: parse_name(&input),
                price: parse_price(&input)?,
                availability,
            },
        })
    }
}
