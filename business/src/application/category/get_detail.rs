use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::category::errors::CategoryError;
use crate::domain::category::gateway::CategoryGateway;
use crate::domain::category::use_cases::get_detail::{
    CategoryDetail, GetCategoryDetailParams, GetCategoryDetailUseCase,
};
use crate::domain::errors::GatewayError;
use crate::domain::logger::Logger;
use crate::domain::product::gateway::ProductGateway;
use crate::domain::shared::pagination::total_pages;

pub struct GetCategoryDetailUseCaseImpl {
    pub categories: Arc<dyn CategoryGateway>,
    pub products: Arc<dyn ProductGateway>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetCategoryDetailUseCase for GetCategoryDetailUseCaseImpl {
    async fn execute(
        &self,
        params: GetCategoryDetailParams,
    ) -> Result<CategoryDetail, CategoryError> {
        if params.id < 1 {
            return Err(CategoryError::InvalidId);
        }
        if params.page_size == 0 {
            return Err(CategoryError::InvalidPageSize);
        }

        let current_page = u32::try_from(params.page.max(1)).unwrap_or(u32::MAX);
        self.logger.info(&format!(
            "Fetching category {} with products page {}",
            params.id, current_page
        ));

        let (category, products) = tokio::try_join!(
            self.categories.get_by_id(params.id),
            self.products
                .list_by_category(params.id, params.page_size, current_page),
        )
        .inspect_err(|e: &GatewayError| self.logger.error(&e.to_string()))?;

        let total_pages = total_pages(products.total_count, params.page_size);
        Ok(CategoryDetail {
            category,
            products,
            current_page,
            page_size: params.page_size,
            total_pages,
        })
    }
}
