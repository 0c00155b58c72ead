//! API routes module

pub mod health;
pub mod products;

use axum::Router;

use crate::state::AppState;

/// Routes mounted under `/api`
pub fn routes(state: &AppState) -> Router {
    Router::new().nest("/products", products::router(state))
}

/// Create missing tables
pub async fn init_schema(state: &AppState) -> eyre::Result<()> {
    products::init_schema(state).await
}
