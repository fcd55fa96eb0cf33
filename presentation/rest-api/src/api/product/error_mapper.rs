use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::product::errors::ProductError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match &self {
            ProductError::InvalidSku => ErrorResponse::validation("product.invalid_sku"),
            ProductError::InvalidPageSize => ErrorResponse::validation("product.invalid_page_size"),
            ProductError::Gateway(err) => ErrorResponse::upstream(err.to_string()),
        }
    }
}
