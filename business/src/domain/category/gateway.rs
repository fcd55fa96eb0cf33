use async_trait::async_trait;

use crate::domain::errors::GatewayError;

use super::model::Category;

#[async_trait]
pub trait CategoryGateway: Send + Sync {
    /// Whole tree under a locally fabricated root.
    async fn get_tree(&self) -> Result<Category, GatewayError>;
    async fn get_by_id(&self, id: i64) -> Result<Category, GatewayError>;
}
