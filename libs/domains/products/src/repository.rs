use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::RwLock;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product, UpdateProduct};

/// Repository trait for Product persistence
///
/// Implementations own id assignment and timestamps. Concurrent writes to the
/// same id are last-write-wins.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// All products, highest id first
    async fn list(&self) -> ProductResult<Vec<Product>>;

    async fn get_by_id(&self, id: i64) -> ProductResult<Option<Product>>;

    /// Insert a product; availability defaults to `true`
    async fn create(&self, input: CreateProduct) -> ProductResult<Product>;

    /// Replace name, price and availability; `NotFound` if absent
    async fn update(&self, id: i64, input: UpdateProduct) -> ProductResult<Product>;

    /// Set only the availability flag; `NotFound` if absent
    async fn set_availability(&self, id: i64, availability: bool) -> ProductResult<Product>;

    /// Hard delete; returns whether a row was removed
    async fn delete(&self, id: i64) -> ProductResult<bool>;
}

/// Process-local store, used by tests and for running without a database.
#[derive(Clone, Default)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<BTreeMap<i64, Product>>>,
    last_id: Arc<AtomicI64>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn list(&self) -> ProductResult<Vec<Product>> {
        let products = self.products.read().await;
        Ok(products.values().rev().cloned().collect())
    }

    async fn get_by_id(&self, id: i64) -> ProductResult<Option<Product>> {
        Ok(self.products.read().await.get(&id).cloned())
    }

    async fn create(&self, input: CreateProduct) -> ProductResult<Product> {
        let id = self.last_id.fetch_add(1, Ordering::SeqCst) + 1;
        let now = Utc::now();
        let product = Product {
            id,
            name: input.name,
            price: input.price,
            availability: input.availability.unwrap_or(true),
            created_at: now,
            updated_at: now,
        };

        self.products.write().await.insert(id, product.clone());
        tracing::debug!(product_id = id, "Stored product in memory");
        Ok(product)
    }

    async fn update(&self, id: i64, input: UpdateProduct) -> ProductResult<Product> {
        let mut products = self.products.write().await;
        let product = products.get_mut(&id).ok_or(ProductError::NotFound(id))?;
        product.apply_update(input);
        Ok(product.clone())
    }

    async fn set_availability(&self, id: i64, availability: bool) -> ProductResult<Product> {
        let mut products = self.products.write().await;
        let product = products.get_mut(&id).ok_or(ProductError::NotFound(id))?;
        product.availability = availability;
        product.updated_at = Utc::now();
        Ok(product.clone())
    }

    async fn delete(&self, id: i64) -> ProductResult<bool> {
        Ok(self.products.write().await.remove(&id).is_some())
    }
}
