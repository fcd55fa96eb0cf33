use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::gateway::ProductGateway;
use crate::domain::product::model::Product;
use crate::domain::product::use_cases::get_by_category::{
    GetProductsByCategoryParams, GetProductsByCategoryUseCase,
};
use crate::domain::shared::pagination::Paged;

pub struct GetProductsByCategoryUseCaseImpl {
    pub gateway: Arc<dyn ProductGateway>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductsByCategoryUseCase for GetProductsByCategoryUseCaseImpl {
    async fn execute(
        &self,
        params: GetProductsByCategoryParams,
    ) -> Result<Paged<Product>, ProductError> {
        if params.limit == 0 {
            return Err(ProductError::InvalidPageSize);
        }

        self.logger.info(&format!(
            "Fetching products for category {} (page {}, limit {})",
            params.category_id, params.page, params.limit
        ));
        self.logger
            .debug("Backend does not scope products by category; page is unfiltered");

        let products = self
            .gateway
            .list_by_category(params.category_id, params.limit, params.page.max(1))
            .await
            .inspect_err(|e| self.logger.error(&e.to_string()))?;

        self.logger
            .info(&format!("Found {} products", products.items.len()));
        Ok(products)
    }
}
