use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::shared::pagination::Paged;

#[derive(Debug, Clone)]
pub struct GetProductsByCategoryParams {
    pub category_id: i64,
    pub limit: u32,
    pub page: u32,
}

#[async_trait]
pub trait GetProductsByCategoryUseCase: Send + Sync {
    async fn execute(
        &self,
        params: GetProductsByCategoryParams,
    ) -> Result<Paged<Product>, ProductError>;
}
