use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::category::errors::CategoryError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for CategoryError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match &self {
            CategoryError::InvalidId => ErrorResponse::validation("category.invalid_id"),
            CategoryError::InvalidPageSize => {
                ErrorResponse::validation("category.invalid_page_size")
            }
            CategoryError::Gateway(err) => ErrorResponse::upstream(err.to_string()),
        }
    }
}
