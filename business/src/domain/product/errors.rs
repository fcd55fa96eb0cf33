#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.invalid_sku")]
    InvalidSku,
    #[error("product.invalid_page_size")]
    InvalidPageSize,
    #[error("{0}")]
    Gateway(#[from] crate::domain::errors::GatewayError),
}
