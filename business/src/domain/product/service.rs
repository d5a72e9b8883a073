use async_trait::async_trait;

use super::errors::ProductError;
use super::model::{Product, ProductCreate};

/// Inbound port for the product catalog.
///
/// The only component a transport layer should depend on. Validation
/// failures are returned before the store is touched; store failures are
/// passed through with their kind intact.
#[async_trait]
pub trait ProductService: Send + Sync {
    async fn get_by_id(&self, id: i64) -> Result<Product, ProductError>;
    async fn get_all_products(&self) -> Result<Vec<Product>, ProductError>;
    async fn get_all_products_by_store(&self, store: &str)
    -> Result<Vec<Product>, ProductError>;
    async fn add(&self, input: ProductCreate) -> Result<(), ProductError>;
    async fn update_price(&self, id: i64, new_price: f32) -> Result<(), ProductError>;
    async fn delete_by_id(&self, id: i64) -> Result<(), ProductError>;
}
