use std::env;

use business::domain::shared::pagination::DEFAULT_PAGE_SIZE;

/// Storefront presentation settings.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Category shown on the coffee page.
    pub featured_category_id: i64,
    pub featured_limit: u32,
    pub page_size: u32,
}

impl StorefrontConfig {
    /// Environment variables:
    /// - FEATURED_CATEGORY_ID (default: 3)
    /// - FEATURED_LIMIT (default: 50)
    pub fn from_env() -> Self {
        Self {
            featured_category_id: parse_or(env::var("FEATURED_CATEGORY_ID").ok(), 3),
            featured_limit: parse_or(env::var("FEATURED_LIMIT").ok(), 50),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

fn parse_or<T: std::str::FromStr>(raw: Option<String>, default: T) -> T {
    raw.and_then(|v| v.trim().parse().ok()).unwrap_or(default)
}
