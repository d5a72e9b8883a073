use std::sync::Arc;

use poem_openapi::{
    ApiResponse, OpenApi,
    param::{Path, Query},
    payload::Json,
};

use business::domain::product::service::ProductService;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::product::dto::{AddProductRequest, ProductResponse};
use crate::api::tags::ApiTags;

pub struct ProductApi {
    service: Arc<dyn ProductService>,
}

impl ProductApi {
    pub fn new(service: Arc<dyn ProductService>) -> Self {
        Self { service }
    }
}

/// Product catalog API
///
/// Endpoints for creating, reading, repricing and deleting products.
#[OpenApi]
impl ProductApi {
    /// Get a product by ID
    ///
    /// Any failed lookup answers 404 with its description.
    #[oai(path = "/api/v1/products/:id", method = "get", tag = "ApiTags::Products")]
    async fn get_product_by_id(&self, id: Path<i64>) -> GetProductByIdResponse {
        match self.service.get_by_id(id.0).await {
            Ok(product) => GetProductByIdResponse::Ok(Json(product.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetProductByIdResponse::NotFound(json)
            }
        }
    }

    /// List products
    ///
    /// Returns every product, or only those of `store` when the parameter is
    /// present and non-empty.
    #[oai(path = "/api/v1/products", method = "get", tag = "ApiTags::Products")]
    async fn get_all_products(&self, store: Query<Option<String>>) -> GetAllProductsResponse {
        let result = match store.0.as_deref().filter(|s| !s.is_empty()) {
            Some(store) => self.service.get_all_products_by_store(store).await,
            None => self.service.get_all_products().await,
        };

        match result {
            Ok(products) => {
                GetAllProductsResponse::Ok(Json(products.into_iter().map(Into::into).collect()))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAllProductsResponse::InternalError(json)
            }
        }
    }

    /// Add a product
    ///
    /// Rejects discounts above 75 with 422.
    #[oai(path = "/api/v1/products", method = "post", tag = "ApiTags::Products")]
    async fn add_product(&self, body: Json<AddProductRequest>) -> AddProductResponse {
        match self.service.add(body.0.into()).await {
            Ok(()) => AddProductResponse::Created,
            Err(err) => {
                let (_status, json) = err.into_error_response();
                AddProductResponse::UnprocessableEntity(json)
            }
        }
    }

    /// Update the price of a product
    #[oai(path = "/api/v1/products/:id", method = "put", tag = "ApiTags::Products")]
    async fn update_price(
        &self,
        id: Path<i64>,
        #[oai(name = "newPrice")] new_price: Query<Option<f32>>,
    ) -> UpdatePriceResponse {
        let Some(new_price) = new_price.0 else {
            return UpdatePriceResponse::BadRequest(ErrorResponse::new("newPrice should be sent"));
        };

        match self.service.update_price(id.0, new_price).await {
            Ok(()) => UpdatePriceResponse::Created,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => UpdatePriceResponse::NotFound(json),
                    _ => UpdatePriceResponse::UnprocessableEntity(json),
                }
            }
        }
    }

    /// Delete a product
    ///
    /// Permanently removes a product from the catalog.
    #[oai(path = "/api/v1/products/:id", method = "delete", tag = "ApiTags::Products")]
    async fn delete_product_by_id(&self, id: Path<i64>) -> DeleteProductResponse {
        match self.service.delete_by_id(id.0).await {
            Ok(()) => DeleteProductResponse::Ok,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => DeleteProductResponse::NotFound(json),
                    _ => DeleteProductResponse::UnprocessableEntity(json),
                }
            }
        }
    }
}

#[derive(ApiResponse)]
#[oai(bad_request_handler = "get_product_by_id_bad_request")]
pub enum GetProductByIdResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
}

fn get_product_by_id_bad_request(err: poem::Error) -> GetProductByIdResponse {
    GetProductByIdResponse::BadRequest(ErrorResponse::new(err.to_string()))
}

#[derive(ApiResponse)]
pub enum GetAllProductsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ProductResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(ApiResponse)]
#[oai(bad_request_handler = "add_product_bad_request")]
pub enum AddProductResponse {
    #[oai(status = 201)]
    Created,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 422)]
    UnprocessableEntity(Json<ErrorResponse>),
}

fn add_product_bad_request(err: poem::Error) -> AddProductResponse {
    AddProductResponse::BadRequest(ErrorResponse::new(err.to_string()))
}

#[derive(ApiResponse)]
#[oai(bad_request_handler = "update_price_bad_request")]
pub enum UpdatePriceResponse {
    #[oai(status = 201)]
    Created,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 422)]
    UnprocessableEntity(Json<ErrorResponse>),
}

fn update_price_bad_request(err: poem::Error) -> UpdatePriceResponse {
    UpdatePriceResponse::BadRequest(ErrorResponse::new(err.to_string()))
}

#[derive(ApiResponse)]
#[oai(bad_request_handler = "delete_product_bad_request")]
pub enum DeleteProductResponse {
    #[oai(status = 200)]
    Ok,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 422)]
    UnprocessableEntity(Json<ErrorResponse>),
}

fn delete_product_bad_request(err: poem::Error) -> DeleteProductResponse {
    DeleteProductResponse::BadRequest(ErrorResponse::new(err.to_string()))
}
