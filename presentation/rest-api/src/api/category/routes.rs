use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};

use business::domain::category::use_cases::get_detail::{
    GetCategoryDetailParams, GetCategoryDetailUseCase,
};
use business::domain::category::use_cases::get_tree::GetCategoryTreeUseCase;
use business::domain::product::value_objects::MediaBase;

use crate::api::category::dto::{CategoryDetailResponse, CategoryResponse};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct CategoryApi {
    get_tree_use_case: Arc<dyn GetCategoryTreeUseCase>,
    get_detail_use_case: Arc<dyn GetCategoryDetailUseCase>,
    media: MediaBase,
    page_size: u32,
}

impl CategoryApi {
    pub fn new(
        get_tree_use_case: Arc<dyn GetCategoryTreeUseCase>,
        get_detail_use_case: Arc<dyn GetCategoryDetailUseCase>,
        media: MediaBase,
        page_size: u32,
    ) -> Self {
        Self {
            get_tree_use_case,
            get_detail_use_case,
            media,
            page_size,
        }
    }
}

/// Category API
#[OpenApi]
impl CategoryApi {
    /// Category tree
    ///
    /// Active categories under the synthetic root (id 1, level 0).
    #[oai(path = "/categories", method = "get", tag = "ApiTags::Categories")]
    async fn get_categories(&self) -> GetCategoriesResponse {
        match self.get_tree_use_case.execute().await {
            Ok(tree) => GetCategoriesResponse::Ok(Json(tree.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetCategoriesResponse::BadGateway(json)
            }
        }
    }

    /// Category detail with one page of products
    ///
    /// The category record is a placeholder and the products are not yet
    /// scoped to it.
    #[oai(path = "/categories/:id", method = "get", tag = "ApiTags::Categories")]
    async fn get_category(
        &self,
        id: Path<i64>,
        page: Query<Option<i64>>,
        page_size: Query<Option<u32>>,
    ) -> GetCategoryResponse {
        let params = GetCategoryDetailParams {
            id: id.0,
            page: page.0.unwrap_or(1),
            page_size: page_size.0.unwrap_or(self.page_size),
        };

        match self.get_detail_use_case.execute(params).await {
            Ok(detail) => GetCategoryResponse::Ok(Json(CategoryDetailResponse::from_detail(
                detail,
                &self.media,
            ))),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => GetCategoryResponse::BadRequest(json),
                    _ => GetCategoryResponse::BadGateway(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetCategoriesResponse {
    #[oai(status = 200)]
    Ok(Json<CategoryResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetCategoryResponse {
    #[oai(status = 200)]
    Ok(Json<CategoryDetailResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
}
