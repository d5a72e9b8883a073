use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

/// Error body returned by every endpoint: `{"errorDescription": "..."}`
#[derive(Object, Debug, Clone, PartialEq)]
#[oai(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub error_description: String,
}

impl ErrorResponse {
    pub fn new(error_description: impl Into<String>) -> Json<Self> {
        Json(Self {
            error_description: error_description.into(),
        })
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}
