use async_trait::async_trait;

use crate::domain::category::errors::CategoryError;
use crate::domain::category::model::Category;
use crate::domain::product::model::Product;
use crate::domain::shared::pagination::Paged;

#[derive(Debug, Clone)]
pub struct GetCategoryDetailParams {
    pub id: i64,
    pub page: i64,
    pub page_size: u32,
}

/// A category together with one page of its products.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryDetail {
    pub category: Category,
    pub products: Paged<Product>,
    pub current_page: u32,
    pub page_size: u32,
    pub total_pages: u32,
}

#[async_trait]
pub trait GetCategoryDetailUseCase: Send + Sync {
    async fn execute(&self, params: GetCategoryDetailParams)
    -> Result<CategoryDetail, CategoryError>;
}
