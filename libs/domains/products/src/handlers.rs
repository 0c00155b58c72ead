//! HTTP handlers for Products API

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{
    ValidatedRequest,
    errors::responses::{
        BadRequestJsonResponse, BadRequestValidationResponse, ForbiddenResponse,
        InternalServerErrorResponse,
    },
};
use std::sync::Arc;
use utoipa::{OpenApi, ToResponse};

use crate::error::ProductResult;
use crate::models::{
    CreateProduct, DeleteResponse, NotFoundBody, Product, ProductListResponse, ProductResponse,
    UpdateProduct,
};
use crate::repository::ProductRepository;
use crate::rules::{ProductId, UpdateProductRequest};
use crate::service::ProductService;

#[derive(ToResponse)]
#[response(
    description = "Product not found",
    content_type = "application/json",
    example = json!({ "error": "Producto no encontrado" })
)]
pub struct ProductNotFoundResponse(pub NotFoundBody);

/// OpenAPI documentation for Products API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_products,
        create_product,
        get_product,
        update_product,
        toggle_availability,
        delete_product,
    ),
    components(
        schemas(
            Product, CreateProduct, UpdateProduct, ProductResponse,
            ProductListResponse, DeleteResponse, NotFoundBody
        ),
        responses(
            ProductNotFoundResponse,
            BadRequestValidationResponse,
            BadRequestJsonResponse,
            ForbiddenResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Products", description = "API operations related to products")
    )
)]
pub struct ApiDoc;

/// Create the products router with all HTTP endpoints
pub fn router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_products).post(create_product))
        .route(
            "/{id}",
            get(get_product)
                .put(update_product)
                .patch(toggle_availability)
                .delete(delete_product),
        )
        .with_state(shared_service)
}

/// List all products, newest id first
#[utoipa::path(
    get,
    path = "",
    tag = "Products",
    responses(
        (status = 200, description = "List of products", body = ProductListResponse),
        (status = 403, response = ForbiddenResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
) -> ProductResult<Json<ProductListResponse>> {
    let data = service.list_products().await?;
    Ok(Json(ProductListResponse { data }))
}

/// Create a new product
#[utoipa::path(
    post,
    path = "",
    tag = "Products",
    request_body = CreateProduct,
    responses(
        (status = 201, description = "Product created", body = ProductResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 403, response = ForbiddenResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    ValidatedRequest(input): ValidatedRequest<CreateProduct>,
) -> ProductResult<impl IntoResponse> {
    let data = service.create_product(input).await?;
    Ok((StatusCode::CREATED, Json(ProductResponse { data })))
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Products",
    params(("id" = i64, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product found", body = ProductResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = ProductNotFoundResponse),
        (status = 403, response = ForbiddenResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    ValidatedRequest(ProductId(id)): ValidatedRequest<ProductId>,
) -> ProductResult<Json<ProductResponse>> {
    let data = service.get_product(id).await?;
    Ok(Json(ProductResponse { data }))
}

/// Replace a product's name, price and availability
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Products",
    params(("id" = i64, Path, description = "Product ID")),
    request_body = UpdateProduct,
    responses(
        (status = 200, description = "Product updated", body = ProductResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = ProductNotFoundResponse),
        (status = 403, response = ForbiddenResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    ValidatedRequest(request): ValidatedRequest<UpdateProductRequest>,
) -> ProductResult<Json<ProductResponse>> {
    let data = service.update_product(request.id, request.input).await?;
    Ok(Json(ProductResponse { data }))
}

/// Flip a product's availability
#[utoipa::path(
    patch,
    path = "/{id}",
    tag = "Products",
    params(("id" = i64, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Availability toggled", body = ProductResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = ProductNotFoundResponse),
        (status = 403, response = ForbiddenResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn toggle_availability<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    ValidatedRequest(ProductId(id)): ValidatedRequest<ProductId>,
) -> ProductResult<Json<ProductResponse>> {
    let data = service.toggle_availability(id).await?;
    Ok(Json(ProductResponse { data }))
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Products",
    params(("id" = i64, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product deleted", body = DeleteResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = ProductNotFoundResponse),
        (status = 403, response = ForbiddenResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    ValidatedRequest(ProductId(id)): ValidatedRequest<ProductId>,
) -> ProductResult<Json<DeleteResponse>> {
    service.delete_product(id).await?;
    Ok(Json(DeleteResponse::default()))
}
