use std::sync::Arc;

use async_trait::async_trait;

use business::domain::category::gateway::CategoryGateway;
use business::domain::category::model::Category;
use business::domain::errors::GatewayError;

use crate::client::{Action, CommerceClient};
use crate::mapper::to_category_tree;

pub struct CategoryGatewayHttp {
    client: Arc<CommerceClient>,
}

impl CategoryGatewayHttp {
    pub fn new(client: Arc<CommerceClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CategoryGateway for CategoryGatewayHttp {
    async fn get_tree(&self) -> Result<Category, GatewayError> {
        let data = self.client.fetch(Action::Categories, &[]).await?;
        to_category_tree(data)
    }

    /// The backend has no single-category action, so this answers with a
    /// placeholder without any request.
    async fn get_by_id(&self, id: i64) -> Result<Category, GatewayError> {
        tracing::debug!(category_id = id, "serving placeholder category");
        Ok(Category::placeholder(id))
    }
}
