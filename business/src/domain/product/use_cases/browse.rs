use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::shared::pagination::{Paged, total_pages};

#[derive(Debug, Clone)]
pub struct BrowseProductsParams {
    /// Free text; blank means plain listing.
    pub search: Option<String>,
    /// Requested page, not yet clamped.
    pub page: i64,
    pub page_size: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ListingMode {
    Browse,
    Search { query: String },
}

/// A product page together with the pagination state it was fetched for.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductListing {
    pub products: Paged<Product>,
    pub mode: ListingMode,
    pub current_page: u32,
    pub page_size: u32,
    pub total_pages: u32,
}

impl ProductListing {
    /// Derives the page count from the total. A search only ever returns its
    /// first page, so it reports at most one page whatever the total.
    pub fn new(
        products: Paged<Product>,
        mode: ListingMode,
        current_page: u32,
        page_size: u32,
    ) -> Self {
        let pages = total_pages(products.total_count, page_size);
        let total_pages = match mode {
            ListingMode::Browse => pages,
            ListingMode::Search { .. } => pages.min(1),
        };
        Self {
            products,
            mode,
            current_page,
            page_size,
            total_pages,
        }
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }
}

#[async_trait]
pub trait BrowseProductsUseCase: Send + Sync {
    async fn execute(&self, params: BrowseProductsParams) -> Result<ProductListing, ProductError>;
}
