//! Products API routes

use axum::Router;
use database::postgres::create_table_if_not_exists;
use domain_products::{PgProductRepository, ProductService, entity, handlers};
use tracing::info;

use crate::state::AppState;

pub fn router(state: &AppState) -> Router {
    let repository = PgProductRepository::new(state.db.clone());
    handlers::router(ProductService::new(repository))
}

pub async fn init_schema(state: &AppState) -> eyre::Result<()> {
    create_table_if_not_exists(&state.db, entity::Entity).await?;
    info!("Products table is in sync");
    Ok(())
}
