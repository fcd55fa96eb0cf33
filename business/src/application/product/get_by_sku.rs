use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::gateway::ProductGateway;
use crate::domain::product::model::Product;
use crate::domain::product::use_cases::get_by_sku::{GetProductBySkuParams, GetProductBySkuUseCase};
use crate::domain::product::value_objects::Sku;

pub struct GetProductBySkuUseCaseImpl {
    pub gateway: Arc<dyn ProductGateway>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductBySkuUseCase for GetProductBySkuUseCaseImpl {
    async fn execute(&self, params: GetProductBySkuParams) -> Result<Product, ProductError> {
        let sku = Sku::parse(&params.sku)?;
        self.logger.info(&format!("Fetching product by sku: {}", sku));

        let product = self
            .gateway
            .get_by_sku(&sku)
            .await
            .inspect_err(|e| self.logger.error(&e.to_string()))?;

        Ok(product)
    }
}
