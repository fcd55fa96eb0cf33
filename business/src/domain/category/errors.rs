#[derive(Debug, thiserror::Error)]
pub enum CategoryError {
    #[error("category.invalid_id")]
    InvalidId,
    #[error("category.invalid_page_size")]
    InvalidPageSize,
    #[error("{0}")]
    Gateway(#[from] crate::domain::errors::GatewayError),
}
