use std::sync::Arc;

use async_trait::async_trait;

use business::domain::errors::GatewayError;
use business::domain::product::gateway::ProductGateway;
use business::domain::product::model::Product;
use business::domain::product::value_objects::Sku;
use business::domain::shared::pagination::{Paged, SearchCriteria};

use crate::client::{Action, CommerceClient};
use crate::mapper::{to_product_page, to_single_product};

pub struct ProductGatewayHttp {
    client: Arc<CommerceClient>,
}

impl ProductGatewayHttp {
    pub fn new(client: Arc<CommerceClient>) -> Self {
        Self { client }
    }

    /// Query parameters for a listing call. Sort orders are never sent; the
    /// backend has no sorting.
    pub fn list_params(criteria: &SearchCriteria) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(page_size) = criteria.page_size.filter(|s| *s > 0) {
            params.push(("limit", page_size.to_string()));
        }
        if let Some(current_page) = criteria.current_page.filter(|p| *p > 0) {
            params.push(("page", current_page.to_string()));
        }
        params
    }

    pub fn search_params(query: &str, limit: u32) -> Vec<(&'static str, String)> {
        vec![("search", query.to_string()), ("limit", limit.to_string())]
    }

    pub fn sku_params(sku: &Sku) -> Vec<(&'static str, String)> {
        vec![("sku", sku.as_str().to_string())]
    }
}

#[async_trait]
impl ProductGateway for ProductGatewayHttp {
    async fn list(&self, criteria: SearchCriteria) -> Result<Paged<Product>, GatewayError> {
        let data = self
            .client
            .fetch(Action::Products, &Self::list_params(&criteria))
            .await?;
        to_product_page(data, criteria)
    }

    async fn search(&self, query: &str, limit: u32) -> Result<Paged<Product>, GatewayError> {
        let data = self
            .client
            .fetch(Action::Products, &Self::search_params(query, limit))
            .await?;
        to_product_page(data, SearchCriteria::for_search(query))
    }

    async fn get_by_sku(&self, sku: &Sku) -> Result<Product, GatewayError> {
        let data = self
            .client
            .fetch(Action::Product, &Self::sku_params(sku))
            .await?;
        to_single_product(data)
    }

    async fn list_by_category(
        &self,
        category_id: i64,
        limit: u32,
        page: u32,
    ) -> Result<Paged<Product>, GatewayError> {
        // TODO: send category_id once the backend's products action can filter by it
        let criteria = SearchCriteria::page(limit, page);
        let data = self
            .client
            .fetch(Action::Products, &Self::list_params(&criteria))
            .await?;
        to_product_page(data, SearchCriteria::for_category(category_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::shared::pagination::SortOrder;
    use std::time::Duration;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::sync::oneshot;

    /// Serves one HTTP response with `body` and reports the request target it
    /// received.
    async fn serve_once(body: &'static str) -> (Arc<CommerceClient>, oneshot::Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = oneshot::channel();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            let request = String::from_utf8_lossy(&request).to_string();
            let target = request
                .lines()
                .next()
                .and_then(|line| line.split_whitespace().nth(1))
                .unwrap_or_default()
                .to_string();
            let response = format!(
                "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
            let _ = tx.send(target);
        });

        let client = Arc::new(CommerceClient::new(
            format!("http://{}/api.php", addr),
            format!("http://{}", addr),
            Duration::from_secs(5),
        ));
        (client, rx)
    }

    #[test]
    fn should_send_limit_and_page_but_not_sort_orders() {
        let criteria = SearchCriteria::page(12, 3).with_sort(SortOrder::ascending("name"));

        let params = ProductGatewayHttp::list_params(&criteria);

        assert_eq!(
            params,
            vec![("limit", "12".to_string()), ("page", "3".to_string())]
        );
    }

    #[test]
    fn should_omit_missing_paging_parameters() {
        assert!(ProductGatewayHttp::list_params(&SearchCriteria::default()).is_empty());
    }

    #[test]
    fn should_send_search_text_with_limit() {
        let params = ProductGatewayHttp::search_params("house blend", 12);

        assert_eq!(
            params,
            vec![
                ("search", "house blend".to_string()),
                ("limit", "12".to_string())
            ]
        );
    }

    #[test]
    fn should_pass_decoded_sku_to_query_encoder() {
        let sku = Sku::parse("Mug 12oz/Black").unwrap();

        let params = ProductGatewayHttp::sku_params(&sku);

        assert_eq!(params, vec![("sku", "Mug 12oz/Black".to_string())]);
    }

    #[tokio::test]
    async fn should_surface_transport_error_when_backend_is_down() {
        // Port 9 (discard) is not expected to serve HTTP
        let client = Arc::new(CommerceClient::new(
            "http://127.0.0.1:9/api.php".to_string(),
            "http://127.0.0.1:9".to_string(),
            Duration::from_millis(500),
        ));
        let gateway = ProductGatewayHttp::new(client);

        let result = gateway.list(SearchCriteria::page(12, 1)).await;

        let error = result.unwrap_err();
        assert!(matches!(error, GatewayError::Transport(_)));
        assert!(error.to_string().starts_with("API Error:"));
    }

    #[tokio::test]
    async fn should_encode_sku_once_and_map_product_from_backend() {
        let (client, target) = serve_once(
            r#"{"id":7,"sku":"Mug 12oz/Black","name":"Travel Mug","price":"9.00","status":1}"#,
        )
        .await;
        let gateway = ProductGatewayHttp::new(client);

        let product = gateway
            .get_by_sku(&Sku::parse("Mug 12oz/Black").unwrap())
            .await
            .unwrap();

        assert_eq!(
            target.await.unwrap(),
            "/api.php?action=product&sku=Mug+12oz%2FBlack"
        );
        assert_eq!(product.id, 7);
        assert_eq!(product.sku.as_str(), "Mug 12oz/Black");
        assert_eq!(product.name, "Travel Mug");
        assert_eq!(product.price, 9.0);
    }

    #[tokio::test]
    async fn should_send_action_first_and_map_listing_from_backend() {
        let (client, target) = serve_once(
            r#"{"items":[{"id":1,"sku":"COF-001","name":"House Blend","price":"12.50"}],"total_count":25}"#,
        )
        .await;
        let gateway = ProductGatewayHttp::new(client);
        let criteria = SearchCriteria::page(12, 2).with_sort(SortOrder::ascending("name"));

        let page = gateway.list(criteria).await.unwrap();

        assert_eq!(target.await.unwrap(), "/api.php?action=products&limit=12&page=2");
        assert_eq!(page.total_count, 25);
        assert_eq!(page.items[0].sku.as_str(), "COF-001");
        assert_eq!(page.search_criteria.current_page, Some(2));
    }
}
