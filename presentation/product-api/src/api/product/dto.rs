use poem_openapi::Object;

use business::domain::product::model::{Product, ProductCreate};

#[derive(Debug, Clone, Object)]
pub struct AddProductRequest {
    /// Product name
    pub name: String,
    /// Unit price
    pub price: f32,
    /// Discount percentage, between 0 and 75
    pub discount: f32,
    /// Selling store or brand
    pub store: String,
}

impl From<AddProductRequest> for ProductCreate {
    fn from(request: AddProductRequest) -> Self {
        Self {
            name: request.name,
            price: request.price,
            discount: request.discount,
            store: request.store,
        }
    }
}

/// Product as exposed over HTTP. The id is intentionally not part of the body.
#[derive(Debug, Clone, PartialEq, Object)]
pub struct ProductResponse {
    pub name: String,
    pub price: f32,
    pub discount: f32,
    pub store: String,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            name: product.name,
            price: product.price,
            discount: product.discount,
            store: product.store,
        }
    }
}
