use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;

#[derive(Debug, Clone)]
pub struct GetProductBySkuParams {
    /// Percent-decoded SKU.
    pub sku: String,
}

#[async_trait]
pub trait GetProductBySkuUseCase: Send + Sync {
    async fn execute(&self, params: GetProductBySkuParams) -> Result<Product, ProductError>;
}
