use poem_openapi::Object;

use business::domain::product::model::{
    DESCRIPTION_ATTRIBUTE, Product, SHORT_DESCRIPTION_ATTRIBUTE,
};
use business::domain::product::use_cases::browse::{ListingMode, ProductListing};
use business::domain::product::value_objects::MediaBase;
use business::domain::shared::pagination::{Paged, SearchCriteria, SortOrder};

/// Shown when a product has no image.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder-product.jpg";

#[derive(Debug, Clone, Object)]
pub struct CustomAttributeResponse {
    pub attribute_code: String,
    pub value: String,
}

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    pub id: i64,
    /// Stable external key
    pub sku: String,
    pub name: String,
    pub price: f64,
    /// Backend status flag; 1 is sellable
    pub status: i32,
    pub purchasable: bool,
    pub attribute_set_id: i64,
    pub visibility: i64,
    pub type_id: String,
    pub weight: f64,
    pub custom_attributes: Vec<CustomAttributeResponse>,
    /// Resolved image URL, or the placeholder asset
    pub image_url: String,
    pub description: String,
    pub short_description: String,
    /// Storefront link with the SKU percent-encoded
    pub url: String,
}

impl ProductResponse {
    pub fn from_product(product: Product, media: &MediaBase) -> Self {
        let image_url = match media.resolve(&product.image_path()) {
            url if url.is_empty() => PLACEHOLDER_IMAGE.to_string(),
            url => url,
        };
        let description = product.attribute_text(DESCRIPTION_ATTRIBUTE);
        let short_description = product.attribute_text(SHORT_DESCRIPTION_ATTRIBUTE);
        let url = format!("/products/{}", product.sku.to_path_segment());

        Self {
            id: product.id,
            sku: product.sku.to_string(),
            name: product.name,
            price: product.price,
            status: product.status.value(),
            purchasable: product.status.is_purchasable(),
            attribute_set_id: product.attribute_set_id,
            visibility: product.visibility,
            type_id: product.type_id,
            weight: product.weight,
            custom_attributes: product
                .custom_attributes
                .into_iter()
                .map(|a| CustomAttributeResponse {
                    attribute_code: a.attribute_code,
                    value: a.value.to_string(),
                })
                .collect(),
            image_url,
            description,
            short_description,
            url,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct SortOrderResponse {
    pub field: String,
    pub direction: String,
}

impl From<SortOrder> for SortOrderResponse {
    fn from(sort: SortOrder) -> Self {
        Self {
            field: sort.field,
            direction: sort.direction.to_string(),
        }
    }
}

/// Criteria the page was produced with.
#[derive(Debug, Clone, Object)]
pub struct SearchCriteriaResponse {
    #[oai(skip_serializing_if_is_none)]
    pub page_size: Option<u32>,
    #[oai(skip_serializing_if_is_none)]
    pub current_page: Option<u32>,
    pub sort_orders: Vec<SortOrderResponse>,
    #[oai(skip_serializing_if_is_none)]
    pub search: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub category_id: Option<i64>,
}

impl From<SearchCriteria> for SearchCriteriaResponse {
    fn from(criteria: SearchCriteria) -> Self {
        Self {
            page_size: criteria.page_size,
            current_page: criteria.current_page,
            sort_orders: criteria.sort_orders.into_iter().map(Into::into).collect(),
            search: criteria.search,
            category_id: criteria.category_id,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ProductPageResponse {
    pub items: Vec<ProductResponse>,
    pub total_count: u64,
    pub search_criteria: SearchCriteriaResponse,
}

impl ProductPageResponse {
    pub fn from_page(page: Paged<Product>, media: &MediaBase) -> Self {
        Self {
            items: page
                .items
                .into_iter()
                .map(|p| ProductResponse::from_product(p, media))
                .collect(),
            total_count: page.total_count,
            search_criteria: page.search_criteria.into(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ProductListResponse {
    pub items: Vec<ProductResponse>,
    pub total_count: u64,
    pub search_criteria: SearchCriteriaResponse,
    pub current_page: u32,
    pub page_size: u32,
    pub total_pages: u32,
    pub has_previous: bool,
    pub has_next: bool,
    /// Trimmed search text when the listing is a search
    #[oai(skip_serializing_if_is_none)]
    pub search: Option<String>,
}

impl ProductListResponse {
    pub fn from_listing(listing: ProductListing, media: &MediaBase) -> Self {
        let has_previous = listing.has_previous();
        let has_next = listing.has_next();
        let search = match listing.mode {
            ListingMode::Search { query } => Some(query),
            ListingMode::Browse => None,
        };
        let page = ProductPageResponse::from_page(listing.products, media);

        Self {
            items: page.items,
            total_count: page.total_count,
            search_criteria: page.search_criteria,
            current_page: listing.current_page,
            page_size: listing.page_size,
            total_pages: listing.total_pages,
            has_previous,
            has_next,
            search,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::product::model::NewProductProps;
    use business::domain::product::value_objects::{ProductStatus, Sku};

    fn media() -> MediaBase {
        MediaBase::new("http://127.0.0.1:8082")
    }

    fn product(image: Option<&str>) -> Product {
        Product::new(NewProductProps {
            id: 1,
            sku: Sku::parse("COF 001").unwrap(),
            name: "House Blend".to_string(),
            price: 12.5,
            status: ProductStatus::ENABLED,
            type_id: None,
            image: image.map(str::to_string),
            description: Some("Chocolate notes".to_string()),
            short_description: None,
        })
    }

    #[test]
    fn should_resolve_image_and_encode_link() {
        let response = ProductResponse::from_product(product(Some("/h/house.jpg")), &media());

        assert_eq!(
            response.image_url,
            "http://127.0.0.1:8082/pub/media/catalog/product/h/house.jpg"
        );
        assert_eq!(response.url, "/products/COF%20001");
        assert_eq!(response.description, "Chocolate notes");
        assert_eq!(response.short_description, "");
        assert!(response.purchasable);
        assert_eq!(response.custom_attributes.len(), 3);
    }

    #[test]
    fn should_fall_back_to_placeholder_image() {
        let response = ProductResponse::from_product(product(None), &media());

        assert_eq!(response.image_url, PLACEHOLDER_IMAGE);
    }

    #[test]
    fn should_expose_pagination_flags_for_listing() {
        let listing = ProductListing {
            products: Paged::new(vec![product(None)], 25, SearchCriteria::page(12, 3)),
            mode: ListingMode::Browse,
            current_page: 3,
            page_size: 12,
            total_pages: 3,
        };

        let response = ProductListResponse::from_listing(listing, &media());

        assert!(response.has_previous);
        assert!(!response.has_next);
        assert_eq!(response.search, None);
        assert_eq!(response.search_criteria.current_page, Some(3));
    }
}
