use sqlx::FromRow;

use business::domain::product::model::Product;

/// Row of the `products` table. `id` is a `serial`, hence `i32` on the wire.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct ProductEntity {
    pub id: i32,
    pub name: String,
    pub price: f32,
    pub discount: f32,
    pub store: String,
}

impl ProductEntity {
    /// The single row-to-domain mapping shared by every read path.
    pub fn into_domain(self) -> Product {
        Product::from_repository(
            i64::from(self.id),
            self.name,
            self.price,
            self.discount,
            self.store,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_row_into_domain_product() {
        let entity = ProductEntity {
            id: 3,
            name: "Ütü".to_string(),
            price: 1000.0,
            discount: 50.0,
            store: "ABC TECH".to_string(),
        };

        let product = entity.into_domain();

        assert_eq!(product.id, Some(3));
        assert_eq!(product.name, "Ütü");
        assert_eq!(product.price, 1000.0);
        assert_eq!(product.discount, 50.0);
        assert_eq!(product.store, "ABC TECH");
    }
}
