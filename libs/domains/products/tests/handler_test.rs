//! Handler tests for Products domain
//!
//! These drive `handlers::router` end to end over an in-memory store:
//! - Route rules and the 400 violation list
//! - Status codes and `{data: ...}` envelopes
//! - The literal 404 body
//! - Store failures surfacing as a generic 500

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_products::*;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt; // For oneshot()

fn app() -> Router {
    handlers::router(ProductService::new(InMemoryProductRepository::new()))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string())),
        None => builder.body(Body::empty()),
    }
    .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

async fn create(app: &Router, name: &str, price: f64) -> Value {
    let (status, body) = send(app, "POST", "/", Some(json!({ "name": name, "price": price }))).await;
    assert_eq!(status, StatusCode::CREATED);
    body["data"].clone()
}

fn fields(body: &Value) -> Vec<String> {
    body["errors"]
        .as_array()
        .expect("errors array")
        .iter()
        .map(|e| e["field"].as_str().unwrap_or_default().to_string())
        .collect()
}

#[tokio::test]
async fn test_create_returns_201_with_new_id() {
    let app = app();
    let first = create(&app, "Monitor curvo", 399.0).await;
    let second = create(&app, "Teclado", 45.0).await;

    assert_eq!(first["name"], "Monitor curvo");
    assert_eq!(first["availability"], true);
    assert!(first["createdAt"].is_string());
    assert_ne!(first["id"], second["id"]);
}

#[tokio::test]
async fn test_create_then_get_round_trip() {
    let app = app();
    let created = create(&app, "Monitor curvo", 399.0).await;
    let id = created["id"].as_i64().unwrap();

    let (status, body) = send(&app, "GET", &format!("/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "Monitor curvo");
    assert_eq!(body["data"]["price"], 399.0);
    assert_eq!(body["data"]["availability"], true);
}

#[tokio::test]
async fn test_create_accepts_explicit_availability() {
    let app = app();
    let (status, body) = send(
        &app,
        "POST",
        "/",
        Some(json!({ "name": "Silla", "price": "19.90", "availability": false })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["availability"], false);
    assert_eq!(body["data"]["price"], 19.9);
}

#[tokio::test]
async fn test_missing_ids_return_literal_404() {
    let app = app();
    let update = json!({ "name": "X", "price": 10, "availability": true });

    for (method, body) in [
        ("GET", None),
        ("PUT", Some(update)),
        ("PATCH", None),
        ("DELETE", None),
    ] {
        let (status, body) = send(&app, method, "/999", body).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{method}");
        assert_eq!(body, json!({ "error": "Producto no encontrado" }), "{method}");
    }
}

#[tokio::test]
async fn test_non_integer_id_is_rejected_on_every_id_route() {
    let app = app();
    let update = json!({ "name": "X", "price": 10, "availability": true });

    for (method, body) in [
        ("GET", None),
        ("PUT", Some(update)),
        ("PATCH", None),
        ("DELETE", None),
    ] {
        let (status, body) = send(&app, method, "/abc", body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{method}");
        assert_eq!(fields(&body), ["id"], "{method}");
        assert_eq!(body["errors"][0]["message"], "Id no valido");
        assert_eq!(body["errors"][0]["location"], "params");
    }
}

#[tokio::test]
async fn test_out_of_range_id_is_not_found() {
    let (status, body) = send(&app(), "GET", "/99999999999999999999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Producto no encontrado" }));
}

#[tokio::test]
async fn test_zero_padded_id_addresses_same_product() {
    let app = app();
    let id = create(&app, "Monitor curvo", 399.0).await["id"].as_i64().unwrap();
    assert_eq!(id, 1);

    let (status, body) = send(&app, "GET", "/01", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id"], 1);
    assert_eq!(body["data"]["name"], "Monitor curvo");
}

#[tokio::test]
async fn test_toggle_twice_restores_availability() {
    let app = app();
    let id = create(&app, "Lampara", 20.0).await["id"].as_i64().unwrap();

    let (status, body) = send(&app, "PATCH", &format!("/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["availability"], false);

    let (_, body) = send(&app, "PATCH", &format!("/{id}"), None).await;
    assert_eq!(body["data"]["availability"], true);
    assert_eq!(body["data"]["name"], "Lampara");
}

#[tokio::test]
async fn test_delete_is_terminal() {
    let app = app();
    let id = create(&app, "Mesa", 120.0).await["id"].as_i64().unwrap();

    let (status, body) = send(&app, "DELETE", &format!("/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "data": "producto eliminado" }));

    let (status, _) = send(&app, "GET", &format!("/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let next = create(&app, "Silla", 30.0).await;
    assert_ne!(next["id"].as_i64().unwrap(), id);
}

#[tokio::test]
async fn test_list_is_ordered_by_id_desc() {
    let app = app();
    for (name, price) in [("A", 1.0), ("B", 2.0), ("C", 3.0)] {
        create(&app, name, price).await;
    }

    let (status, body) = send(&app, "GET", "/", None).await;
    assert_eq!(status, StatusCode::OK);

    let ids: Vec<i64> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, [3, 2, 1]);
}

#[tokio::test]
async fn test_create_rejects_zero_and_negative_price() {
    let app = app();
    for price in [json!(0), json!(-5)] {
        let (status, body) =
            send(&app, "POST", "/", Some(json!({ "name": "Monitor", "price": price }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(fields(&body), ["price"]);
        assert_eq!(body["errors"][0]["message"], "Precio no valido");
    }

    let (_, body) = send(&app, "GET", "/", None).await;
    assert_eq!(body["data"], json!([]));
}

#[tokio::test]
async fn test_create_rejects_empty_name() {
    let (status, body) = send(
        &app(),
        "POST",
        "/",
        Some(json!({ "name": "", "price": 10 })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(fields(&body), ["name"]);
    assert_eq!(
        body["errors"][0]["message"],
        "El nombre del producto no puede ir vacio"
    );
}

#[tokio::test]
async fn test_update_returns_updated_record() {
    let app = app();
    let id = create(&app, "Monitor", 399.0).await["id"].as_i64().unwrap();

    let (status, body) = send(
        &app,
        "PUT",
        &format!("/{id}"),
        Some(json!({ "name": "Monitor curvo", "price": 349.5, "availability": false })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id"], id);
    assert_eq!(body["data"]["name"], "Monitor curvo");
    assert_eq!(body["data"]["price"], 349.5);
    assert_eq!(body["data"]["availability"], false);
}

#[tokio::test]
async fn test_update_requires_every_field() {
    let app = app();
    let id = create(&app, "Monitor", 399.0).await["id"].as_i64().unwrap();

    let (status, body) = send(&app, "PUT", &format!("/{id}"), Some(json!({ "price": "abc" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        fields(&body),
        ["name", "price", "price", "availability"]
    );
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from("{ \"name\": "))
        .unwrap();

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

struct FailingRepository;

#[async_trait]
impl ProductRepository for FailingRepository {
    async fn list(&self) -> ProductResult<Vec<Product>> {
        Err(ProductError::Database("connection refused".to_string()))
    }

    async fn get_by_id(&self, _id: i64) -> ProductResult<Option<Product>> {
        Err(ProductError::Database("connection refused".to_string()))
    }

    async fn create(&self, _input: CreateProduct) -> ProductResult<Product> {
        Err(ProductError::Database("connection refused".to_string()))
    }

    async fn update(&self, _id: i64, _input: UpdateProduct) -> ProductResult<Product> {
        Err(ProductError::Database("connection refused".to_string()))
    }

    async fn set_availability(&self, _id: i64, _availability: bool) -> ProductResult<Product> {
        Err(ProductError::Database("connection refused".to_string()))
    }

    async fn delete(&self, _id: i64) -> ProductResult<bool> {
        Err(ProductError::Database("connection refused".to_string()))
    }
}

#[tokio::test]
async fn test_store_failures_return_generic_500() {
    let app = handlers::router(ProductService::new(FailingRepository));

    for (method, uri, body) in [
        ("GET", "/", None),
        ("GET", "/1", None),
        ("POST", "/", Some(json!({ "name": "A", "price": 1 }))),
        ("PATCH", "/1", None),
        ("DELETE", "/1", None),
    ] {
        let (status, body) = send(&app, method, uri, body).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{method} {uri}");
        assert_eq!(body["error"], "DATABASE_ERROR");
        assert_eq!(body["message"], "An internal server error occurred");
        assert!(!body.to_string().contains("connection refused"));
    }
}
