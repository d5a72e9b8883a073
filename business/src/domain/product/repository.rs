use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::Product;

/// Storage port for products.
///
/// Point lookups and mutations report a missing row as
/// `RepositoryError::NotFound`. Bulk reads may degrade to an empty list
/// instead of failing, depending on how the adapter is configured.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn get_all_by_store(&self, store: &str) -> Result<Vec<Product>, RepositoryError>;
    async fn add(&self, product: &Product) -> Result<(), RepositoryError>;
    async fn get_by_id(&self, id: i64) -> Result<Product, RepositoryError>;
    async fn delete_by_id(&self, id: i64) -> Result<(), RepositoryError>;
    async fn update_price(&self, id: i64, new_price: f32) -> Result<(), RepositoryError>;
}
