use std::sync::Arc;

use logger::TracingLogger;
use persistence::product::repository::{BulkReadPolicy, ProductRepositoryPostgres};

use business::application::product::service::ProductServiceImpl;

use crate::api::product::routes::ProductApi;

pub struct DependencyContainer {
    pub product_api: ProductApi,
}

impl DependencyContainer {
    /// Wires the catalog: the pool is moved into the repository, which is
    /// shared with the service behind an `Arc`.
    pub fn new(pool: sqlx::PgPool, bulk_read_policy: BulkReadPolicy) -> Self {
        let logger = Arc::new(TracingLogger::new("product_service"));

        // Infrastructure adapters
        let product_repository = Arc::new(ProductRepositoryPostgres::new(pool, bulk_read_policy));

        let product_service = Arc::new(ProductServiceImpl {
            repository: product_repository,
            logger,
        });

        Self {
            product_api: ProductApi::new(product_service),
        }
    }
}
