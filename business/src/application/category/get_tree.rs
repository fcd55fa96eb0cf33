use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::category::errors::CategoryError;
use crate::domain::category::gateway::CategoryGateway;
use crate::domain::category::model::Category;
use crate::domain::category::use_cases::get_tree::GetCategoryTreeUseCase;
use crate::domain::logger::Logger;

pub struct GetCategoryTreeUseCaseImpl {
    pub gateway: Arc<dyn CategoryGateway>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetCategoryTreeUseCase for GetCategoryTreeUseCaseImpl {
    async fn execute(&self) -> Result<Category, CategoryError> {
        self.logger.info("Fetching category tree");

        let tree = self
            .gateway
            .get_tree()
            .await
            .inspect_err(|e| self.logger.error(&e.to_string()))?;

        let visible = tree.without_inactive();
        self.logger.info(&format!(
            "Found {} active top-level categories",
            visible.children.len()
        ));
        Ok(visible)
    }
}
