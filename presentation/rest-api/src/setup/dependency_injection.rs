use std::sync::Arc;

use logger::TracingLogger;

use commerce::category_gateway::CategoryGatewayHttp;
use commerce::client::CommerceClient;
use commerce::product_gateway::ProductGatewayHttp;

use business::application::category::get_detail::GetCategoryDetailUseCaseImpl;
use business::application::category::get_tree::GetCategoryTreeUseCaseImpl;
use business::application::product::browse::BrowseProductsUseCaseImpl;
use business::application::product::get_by_category::GetProductsByCategoryUseCaseImpl;
use business::application::product::get_by_sku::GetProductBySkuUseCaseImpl;

use crate::api::category::routes::CategoryApi;
use crate::api::health::routes::Api as HealthApi;
use crate::api::product::routes::{FeaturedCollection, ProductApi};
use crate::config::app_config::AppConfig;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub product_api: ProductApi,
    pub category_api: CategoryApi,
}

impl DependencyContainer {
    pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let product_logger = Arc::new(TracingLogger::new("product"));
        let category_logger = Arc::new(TracingLogger::new("category"));
        let health_api = HealthApi::new();

        // Infrastructure adapters
        let commerce_client = Arc::new(CommerceClient::new(
            config.commerce.api_url.clone(),
            config.commerce.base_url.clone(),
            config.commerce.timeout,
        ));
        let media = commerce_client.media.clone();
        let product_gateway = Arc::new(ProductGatewayHttp::new(commerce_client.clone()));
        let category_gateway = Arc::new(CategoryGatewayHttp::new(commerce_client));

        // Product use cases
        let browse_use_case = Arc::new(BrowseProductsUseCaseImpl {
            gateway: product_gateway.clone(),
            logger: product_logger.clone(),
        });
        let get_by_sku_use_case = Arc::new(GetProductBySkuUseCaseImpl {
            gateway: product_gateway.clone(),
            logger: product_logger.clone(),
        });
        let get_by_category_use_case = Arc::new(GetProductsByCategoryUseCaseImpl {
            gateway: product_gateway.clone(),
            logger: product_logger,
        });

        // Category use cases
        let get_tree_use_case = Arc::new(GetCategoryTreeUseCaseImpl {
            gateway: category_gateway.clone(),
            logger: category_logger.clone(),
        });
        let get_detail_use_case = Arc::new(GetCategoryDetailUseCaseImpl {
            categories: category_gateway,
            products: product_gateway,
            logger: category_logger,
        });

        let product_api = ProductApi::new(
            browse_use_case,
            get_by_sku_use_case,
            get_by_category_use_case,
            media.clone(),
            FeaturedCollection {
                category_id: config.storefront.featured_category_id,
                limit: config.storefront.featured_limit,
            },
            config.storefront.page_size,
        );

        let category_api = CategoryApi::new(
            get_tree_use_case,
            get_detail_use_case,
            media,
            config.storefront.page_size,
        );

        Ok(Self {
            health_api,
            product_api,
            category_api,
        })
    }
}
