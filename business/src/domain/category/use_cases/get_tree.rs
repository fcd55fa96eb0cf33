use async_trait::async_trait;

use crate::domain::category::errors::CategoryError;
use crate::domain::category::model::Category;

#[async_trait]
pub trait GetCategoryTreeUseCase: Send + Sync {
    async fn execute(&self) -> Result<Category, CategoryError>;
}
