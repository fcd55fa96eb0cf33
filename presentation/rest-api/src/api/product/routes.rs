use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};

use business::domain::product::use_cases::browse::{BrowseProductsParams, BrowseProductsUseCase};
use business::domain::product::use_cases::get_by_category::{
    GetProductsByCategoryParams, GetProductsByCategoryUseCase,
};
use business::domain::product::use_cases::get_by_sku::{
    GetProductBySkuParams, GetProductBySkuUseCase,
};
use business::domain::product::value_objects::MediaBase;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::product::dto::{ProductListResponse, ProductPageResponse, ProductResponse};
use crate::api::tags::ApiTags;

/// Category and size of the featured coffee collection.
#[derive(Debug, Clone, Copy)]
pub struct FeaturedCollection {
    pub category_id: i64,
    pub limit: u32,
}

pub struct ProductApi {
    browse_use_case: Arc<dyn BrowseProductsUseCase>,
    get_by_sku_use_case: Arc<dyn GetProductBySkuUseCase>,
    get_by_category_use_case: Arc<dyn GetProductsByCategoryUseCase>,
    media: MediaBase,
    featured: FeaturedCollection,
    page_size: u32,
}

impl ProductApi {
    pub fn new(
        browse_use_case: Arc<dyn BrowseProductsUseCase>,
        get_by_sku_use_case: Arc<dyn GetProductBySkuUseCase>,
        get_by_category_use_case: Arc<dyn GetProductsByCategoryUseCase>,
        media: MediaBase,
        featured: FeaturedCollection,
        page_size: u32,
    ) -> Self {
        Self {
            browse_use_case,
            get_by_sku_use_case,
            get_by_category_use_case,
            media,
            featured,
            page_size,
        }
    }
}

/// Product catalog API
///
/// Read-only listings, search and detail pages backed by the commerce backend.
#[OpenApi]
impl ProductApi {
    /// List or search products
    ///
    /// A non-blank `search` switches to search mode and always starts at page 1;
    /// otherwise the catalog is paged and sorted by name.
    #[oai(path = "/products", method = "get", tag = "ApiTags::Products")]
    async fn list_products(
        &self,
        search: Query<Option<String>>,
        page: Query<Option<i64>>,
        page_size: Query<Option<u32>>,
    ) -> ListProductsResponse {
        let params = BrowseProductsParams {
            search: search.0,
            page: page.0.unwrap_or(1),
            page_size: page_size.0.unwrap_or(self.page_size),
        };

        match self.browse_use_case.execute(params).await {
            Ok(listing) => ListProductsResponse::Ok(Json(ProductListResponse::from_listing(
                listing,
                &self.media,
            ))),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => ListProductsResponse::BadRequest(json),
                    _ => ListProductsResponse::BadGateway(json),
                }
            }
        }
    }

    /// Get a product by SKU
    ///
    /// The SKU segment is percent-decoded before lookup.
    #[oai(path = "/products/:sku", method = "get", tag = "ApiTags::Products")]
    async fn get_product_by_sku(&self, sku: Path<String>) -> GetProductBySkuResponse {
        match self
            .get_by_sku_use_case
            .execute(GetProductBySkuParams { sku: sku.0 })
            .await
        {
            Ok(product) => GetProductBySkuResponse::Ok(Json(ProductResponse::from_product(
                product,
                &self.media,
            ))),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => GetProductBySkuResponse::BadRequest(json),
                    _ => GetProductBySkuResponse::BadGateway(json),
                }
            }
        }
    }

    /// Featured coffee collection
    ///
    /// Products of the featured category. The backend does not scope by
    /// category yet, so the list is the unfiltered first page.
    #[oai(path = "/coffee", method = "get", tag = "ApiTags::Products")]
    async fn get_coffee(&self) -> GetCoffeeResponse {
        let params = GetProductsByCategoryParams {
            category_id: self.featured.category_id,
            limit: self.featured.limit,
            page: 1,
        };

        match self.get_by_category_use_case.execute(params).await {
            Ok(page) => GetCoffeeResponse::Ok(Json(ProductPageResponse::from_page(
                page,
                &self.media,
            ))),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => GetCoffeeResponse::BadRequest(json),
                    _ => GetCoffeeResponse::BadGateway(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum ListProductsResponse {
    #[oai(status = 200)]
    Ok(Json<ProductListResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductBySkuResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetCoffeeResponse {
    #[oai(status = 200)]
    Ok(Json<ProductPageResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
}
