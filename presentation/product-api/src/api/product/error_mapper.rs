use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::product::errors::ProductError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

/// Status by error kind: validation 422, missing product 404, storage 500.
///
/// Endpoints narrow the storage case further (mutations answer 422).
impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let status = match &self {
            ProductError::DiscountTooHigh | ProductError::DiscountNegative => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            ProductError::NotFound(_) => StatusCode::NOT_FOUND,
            ProductError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, ErrorResponse::new(self.to_string()))
    }
}
