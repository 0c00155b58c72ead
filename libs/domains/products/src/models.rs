use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Body sent for every id that does not resolve to a product.
pub const NOT_FOUND_MESSAGE: &str = "Producto no encontrado";

/// Body of a successful delete.
pub const DELETED_MESSAGE: &str = "producto eliminado";

/// Product entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Store-assigned identifier, never reused
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Monitor curvo de 49 pulgadas")]
    pub name: String,
    #[schema(example = 300)]
    pub price: f64,
    #[schema(example = true)]
    pub availability: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Full replacement of the user-editable fields.
    pub fn apply_update(&mut self, input: UpdateProduct) {
        self.name = input.name;
        self.price = input.price;
        self.availability = input.availability;
        self.updated_at = Utc::now();
    }
}

/// DTO for creating a new product
#[derive(Debug, Clone, PartialEq, Deserialize, Validate, ToSchema)]
pub struct CreateProduct {
    #[validate(length(min = 1, message = "El nombre del producto no puede ir vacio"))]
    #[schema(example = "Monitor curvo de 49 pulgadas")]
    pub name: String,

    #[validate(range(exclusive_min = 0.0, message = "Precio no valido"))]
    #[schema(example = 300)]
    pub price: f64,

    /// Defaults to `true`
    #[serde(default)]
    pub availability: Option<bool>,
}

/// DTO for replacing a product's fields
#[derive(Debug, Clone, PartialEq, Deserialize, Validate, ToSchema)]
pub struct UpdateProduct {
    #[validate(length(min = 1, message = "El nombre del producto no puede ir vacio"))]
    #[schema(example = "Monitor curvo de 49 pulgadas")]
    pub name: String,

    #[validate(range(exclusive_min = 0.0, message = "Precio no valido"))]
    #[schema(example = 399)]
    pub price: f64,

    #[schema(example = false)]
    pub availability: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProductResponse {
    pub data: Product,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProductListResponse {
    pub data: Vec<Product>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteResponse {
    #[schema(example = "producto eliminado")]
    pub data: String,
}

impl Default for DeleteResponse {
    fn default() -> Self {
        Self {
            data: DELETED_MESSAGE.to_string(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct NotFoundBody {
    #[schema(example = "Producto no encontrado")]
    pub error: String,
}

impl Default for NotFoundBody {
    fn default() -> Self {
        Self {
            error: NOT_FOUND_MESSAGE.to_string(),
        }
    }
}
