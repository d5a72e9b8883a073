use async_trait::async_trait;
use sqlx::PgPool;
use strum_macros::{Display, EnumString};

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;
use business::domain::product::repository::ProductRepository;

use super::entity::ProductEntity;

const SELECT_PRODUCTS: &str = "SELECT id, name, price, discount, store FROM products";

/// What a bulk read does when the query itself fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum BulkReadPolicy {
    /// Log the failure and answer with an empty list.
    #[default]
    Degrade,
    /// Surface the failure as a `RepositoryError::DatabaseError`.
    Propagate,
}

impl BulkReadPolicy {
    fn settle(
        self,
        rows: Result<Vec<ProductEntity>, sqlx::Error>,
        context: &str,
    ) -> Result<Vec<Product>, RepositoryError> {
        match rows {
            Ok(entities) => Ok(entities.into_iter().map(ProductEntity::into_domain).collect()),
            Err(e) => {
                tracing::error!(error = %e, "{}", context);
                match self {
                    BulkReadPolicy::Degrade => Ok(Vec::new()),
                    BulkReadPolicy::Propagate => Err(RepositoryError::database_error(context)),
                }
            }
        }
    }
}

/// Keeps the driver's own message, for operations whose failure reaches the caller as-is.
fn driver_error(error: sqlx::Error) -> RepositoryError {
    RepositoryError::database_error(error.to_string())
}

pub struct ProductRepositoryPostgres {
    pool: PgPool,
    bulk_read_policy: BulkReadPolicy,
}

impl ProductRepositoryPostgres {
    pub fn new(pool: PgPool, bulk_read_policy: BulkReadPolicy) -> Self {
        Self {
            pool,
            bulk_read_policy,
        }
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryPostgres {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let rows = sqlx::query_as::<_, ProductEntity>(&format!("{SELECT_PRODUCTS} ORDER BY id"))
            .fetch_all(&self.pool)
            .await;

        self.bulk_read_policy
            .settle(rows, "Error while getting all products")
    }

    async fn get_all_by_store(&self, store: &str) -> Result<Vec<Product>, RepositoryError> {
        let rows = sqlx::query_as::<_, ProductEntity>(&format!(
            "{SELECT_PRODUCTS} WHERE store = $1 ORDER BY id"
        ))
        .bind(store)
        .fetch_all(&self.pool)
        .await;

        self.bulk_read_policy
            .settle(rows, &format!("Error while getting products of store {}", store))
    }

    async fn add(&self, product: &Product) -> Result<(), RepositoryError> {
        let id: i32 = sqlx::query_scalar(
            "INSERT INTO products (name, price, discount, store) VALUES ($1, $2, $3, $4) RETURNING id",
        )
        .bind(&product.name)
        .bind(product.price)
        .bind(product.discount)
        .bind(&product.store)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Error while adding product");
            driver_error(e)
        })?;

        tracing::info!(id, name = %product.name, "Product added");
        Ok(())
    }

    async fn get_by_id(&self, id: i64) -> Result<Product, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(&format!("{SELECT_PRODUCTS} WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, id, "Error while getting product by id");
                RepositoryError::database_error(format!("Error while getting product by id {}", id))
            })?
            .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, id, "Error while deleting product");
                RepositoryError::database_error(format!("Error while deleting product by id {}", id))
            })?;

        if result.rows_affected() == 0 {
            tracing::warn!(id, "Product to delete not found");
            return Err(RepositoryError::NotFound);
        }

        tracing::info!(id, "Product deleted");
        Ok(())
    }

    async fn update_price(&self, id: i64, new_price: f32) -> Result<(), RepositoryError> {
        let result = sqlx::query("UPDATE products SET price = $1 WHERE id = $2")
            .bind(new_price)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, id, "Error while updating product price");
                RepositoryError::database_error(format!(
                    "Error while updating product price by id {}",
                    id
                ))
            })?;

        if result.rows_affected() == 0 {
            tracing::warn!(id, "Product to update not found");
            return Err(RepositoryError::NotFound);
        }

        tracing::info!(id, new_price, "Product price updated");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
    use std::time::Duration;

    fn unreachable_pool() -> PgPool {
        PgPoolOptions::new()
            .acquire_timeout(Duration::from_millis(300))
            .connect_lazy_with(PgConnectOptions::new().host("127.0.0.1").port(1))
    }

    fn product() -> Product {
        Product {
            id: None,
            name: "AirFryer".to_string(),
            price: 1000.0,
            discount: 10.0,
            store: "ABC TECH".to_string(),
        }
    }

    fn entity(id: i32) -> ProductEntity {
        ProductEntity {
            id,
            name: "AirFryer".to_string(),
            price: 1000.0,
            discount: 0.0,
            store: "ABC TECH".to_string(),
        }
    }

    #[test]
    fn should_parse_bulk_read_policy_from_config_value() {
        assert_eq!("degrade".parse::<BulkReadPolicy>(), Ok(BulkReadPolicy::Degrade));
        assert_eq!("Propagate".parse::<BulkReadPolicy>(), Ok(BulkReadPolicy::Propagate));
        assert!("ignore".parse::<BulkReadPolicy>().is_err());
        assert_eq!(BulkReadPolicy::default().to_string(), "degrade");
    }

    #[test]
    fn should_map_rows_in_order_on_success() {
        let products = BulkReadPolicy::Propagate
            .settle(Ok(vec![entity(1), entity(2)]), "unused")
            .unwrap();

        let ids: Vec<_> = products.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![Some(1), Some(2)]);
    }

    #[test]
    fn should_degrade_failed_bulk_read_to_empty_list() {
        let products = BulkReadPolicy::Degrade
            .settle(Err(sqlx::Error::PoolTimedOut), "Error while getting all products")
            .unwrap();

        assert!(products.is_empty());
    }

    #[test]
    fn should_propagate_failed_bulk_read_when_configured() {
        let err = BulkReadPolicy::Propagate
            .settle(Err(sqlx::Error::PoolClosed), "Error while getting all products")
            .unwrap_err();

        assert_eq!(
            err,
            RepositoryError::database_error("Error while getting all products")
        );
    }

    #[test]
    fn should_keep_driver_message_in_database_error() {
        let err = driver_error(sqlx::Error::PoolTimedOut);

        assert_eq!(
            err,
            RepositoryError::database_error(sqlx::Error::PoolTimedOut.to_string())
        );
    }

    #[tokio::test]
    async fn should_surface_driver_error_when_insert_fails() {
        let repo = ProductRepositoryPostgres::new(unreachable_pool(), BulkReadPolicy::Degrade);

        let err = repo.add(&product()).await.unwrap_err();

        match err {
            RepositoryError::DatabaseError(message) => {
                assert!(!message.is_empty());
                assert_ne!(message, "Error while adding product");
            }
            other => panic!("expected database error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn should_degrade_bulk_read_on_unreachable_database() {
        let repo = ProductRepositoryPostgres::new(unreachable_pool(), BulkReadPolicy::Degrade);

        let products = repo.get_all().await.unwrap();

        assert!(products.is_empty());
    }
}
