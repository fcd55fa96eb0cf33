use async_trait::async_trait;

use crate::domain::errors::GatewayError;
use crate::domain::shared::pagination::{Paged, SearchCriteria};

use super::model::Product;
use super::value_objects::Sku;

#[async_trait]
pub trait ProductGateway: Send + Sync {
    /// Pages through the catalog. Sort orders are echoed, not applied.
    async fn list(&self, criteria: SearchCriteria) -> Result<Paged<Product>, GatewayError>;
    async fn search(&self, query: &str, limit: u32) -> Result<Paged<Product>, GatewayError>;
    async fn get_by_sku(&self, sku: &Sku) -> Result<Product, GatewayError>;
    /// The backend cannot filter by category yet; the page is unscoped.
    async fn list_by_category(
        &self,
        category_id: i64,
        limit: u32,
        page: u32,
    ) -> Result<Paged<Product>, GatewayError>;
}
