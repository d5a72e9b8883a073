use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{Product, ProductCreate};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::service::ProductService;

pub struct ProductServiceImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ProductService for ProductServiceImpl {
    async fn get_by_id(&self, id: i64) -> Result<Product, ProductError> {
        self.logger.debug(&format!("Fetching product by id: {}", id));

        self.repository
            .get_by_id(id)
            .await
            .map_err(|e| ProductError::from_repository(id, e))
    }

    async fn get_all_products(&self) -> Result<Vec<Product>, ProductError> {
        let products = self.repository.get_all().await?;
        self.logger
            .debug(&format!("Found {} products", products.len()));
        Ok(products)
    }

    async fn get_all_products_by_store(
        &self,
        store: &str,
    ) -> Result<Vec<Product>, ProductError> {
        let products = self.repository.get_all_by_store(store).await?;
        self.logger.debug(&format!(
            "Found {} products for store {}",
            products.len(),
            store
        ));
        Ok(products)
    }

    async fn add(&self, input: ProductCreate) -> Result<(), ProductError> {
        self.logger.info(&format!("Adding product: {}", input.name));

        let product = Product::new(input).inspect_err(|e| {
            self.logger.warn(&format!("Product rejected: {}", e));
        })?;

        self.repository.add(&product).await?;
        Ok(())
    }

    async fn update_price(&self, id: i64, new_price: f32) -> Result<(), ProductError> {
        self.logger.info(&format!(
            "Updating price of product {} to {}",
            id, new_price
        ));

        self.repository
            .update_price(id, new_price)
            .await
            .map_err(|e| ProductError::from_repository(id, e))
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), ProductError> {
        self.logger.info(&format!("Deleting product: {}", id));

        self.repository
            .delete_by_id(id)
            .await
            .map_err(|e| ProductError::from_repository(id, e))
    }
}
