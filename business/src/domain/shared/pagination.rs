use serde::{Deserialize, Serialize};

/// Page size used by the storefront listings.
pub const DEFAULT_PAGE_SIZE: u32 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl std::fmt::Display for SortDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortDirection::Asc => write!(f, "ASC"),
            SortDirection::Desc => write!(f, "DESC"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SortOrder {
    pub field: String,
    pub direction: SortDirection,
}

impl SortOrder {
    pub fn ascending(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Asc,
        }
    }
}

/// Criteria a listing was produced with, echoed back alongside the items.
///
/// Only `page_size`, `current_page` and `search` reach the backend; sort
/// orders and the category id are carried for the caller's benefit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchCriteria {
    pub page_size: Option<u32>,
    pub current_page: Option<u32>,
    pub sort_orders: Vec<SortOrder>,
    pub search: Option<String>,
    pub category_id: Option<i64>,
}

impl SearchCriteria {
    pub fn page(page_size: u32, current_page: u32) -> Self {
        Self {
            page_size: Some(page_size),
            current_page: Some(current_page),
            ..Self::default()
        }
    }

    pub fn with_sort(mut self, sort: SortOrder) -> Self {
        self.sort_orders.push(sort);
        self
    }

    pub fn for_search(query: impl Into<String>) -> Self {
        Self {
            search: Some(query.into()),
            ..Self::default()
        }
    }

    pub fn for_category(category_id: i64) -> Self {
        Self {
            category_id: Some(category_id),
            ..Self::default()
        }
    }
}

/// One page of records plus the total across all pages.
#[derive(Debug, Clone, PartialEq)]
pub struct Paged<T> {
    pub items: Vec<T>,
    pub total_count: u64,
    pub search_criteria: SearchCriteria,
}

impl<T> Paged<T> {
    pub fn new(items: Vec<T>, total_count: u64, search_criteria: SearchCriteria) -> Self {
        Self {
            items,
            total_count,
            search_criteria,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn total_pages(&self, page_size: u32) -> u32 {
        total_pages(self.total_count, page_size)
    }
}

/// Number of pages needed to show `total_count` records, `page_size` at a time.
pub fn total_pages(total_count: u64, page_size: u32) -> u32 {
    if page_size == 0 {
        return 0;
    }
    let pages = total_count.div_ceil(u64::from(page_size));
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// Clamps a requested page number into `[1, total_pages]`.
///
/// With no pages at all the only valid page is 1.
pub fn clamp_page(requested: i64, total_pages: u32) -> u32 {
    let last = i64::from(total_pages.max(1));
    // `last` fits in u32, so the clamped value does too
    requested.clamp(1, last) as u32
}
