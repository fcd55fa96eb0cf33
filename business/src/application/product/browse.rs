use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::gateway::ProductGateway;
use crate::domain::product::use_cases::browse::{
    BrowseProductsParams, BrowseProductsUseCase, ListingMode, ProductListing,
};
use crate::domain::shared::pagination::{SearchCriteria, SortOrder};

pub struct BrowseProductsUseCaseImpl {
    pub gateway: Arc<dyn ProductGateway>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl BrowseProductsUseCase for BrowseProductsUseCaseImpl {
    async fn execute(&self, params: BrowseProductsParams) -> Result<ProductListing, ProductError> {
        if params.page_size == 0 {
            return Err(ProductError::InvalidPageSize);
        }

        let query = params
            .search
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .map(str::to_string);

        let (products, mode, current_page) = match query {
            Some(query) => {
                self.logger
                    .info(&format!("Searching products for '{}'", query));
                let products = self
                    .gateway
                    .search(&query, params.page_size)
                    .await
                    .inspect_err(|e| self.logger.error(&e.to_string()))?;
                (products, ListingMode::Search { query }, 1)
            }
            None => {
                let current_page = u32::try_from(params.page.max(1)).unwrap_or(u32::MAX);
                self.logger.info(&format!(
                    "Listing products page {} (size {})",
                    current_page, params.page_size
                ));
                let criteria = SearchCriteria::page(params.page_size, current_page)
                    .with_sort(SortOrder::ascending("name"));
                let products = self
                    .gateway
                    .list(criteria)
                    .await
                    .inspect_err(|e| self.logger.error(&e.to_string()))?;
                (products, ListingMode::Browse, current_page)
            }
        };

        self.logger.info(&format!(
            "Found {} products ({} in total)",
            products.items.len(),
            products.total_count
        ));

        Ok(ProductListing::new(
            products,
            mode,
            current_page,
            params.page_size,
        ))
    }
}
