use poem_openapi::Object;

use business::domain::category::model::Category;
use business::domain::category::use_cases::get_detail::CategoryDetail;
use business::domain::product::value_objects::MediaBase;

use crate::api::product::dto::ProductPageResponse;

#[derive(Debug, Clone, Object)]
pub struct CategoryResponse {
    pub id: i64,
    pub parent_id: i64,
    pub name: String,
    pub is_active: bool,
    pub position: i64,
    pub level: i64,
    pub product_count: u64,
    pub url: String,
    pub children_data: Vec<CategoryResponse>,
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            url: format!("/categories/{}", category.id),
            id: category.id,
            parent_id: category.parent_id,
            name: category.name,
            is_active: category.is_active,
            position: category.position,
            level: category.level,
            product_count: category.product_count,
            children_data: category.children.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CategoryDetailResponse {
    pub category: CategoryResponse,
    pub products: ProductPageResponse,
    pub current_page: u32,
    pub page_size: u32,
    pub total_pages: u32,
    pub has_previous: bool,
    pub has_next: bool,
}

impl CategoryDetailResponse {
    pub fn from_detail(detail: CategoryDetail, media: &MediaBase) -> Self {
        Self {
            category: detail.category.into(),
            products: ProductPageResponse::from_page(detail.products, media),
            current_page: detail.current_page,
            page_size: detail.page_size,
            total_pages: detail.total_pages,
            has_previous: detail.current_page > 1,
            has_next: detail.current_page < detail.total_pages,
        }
    }
}
