use serde::{Deserialize, Serialize};

use super::errors::ProductError;

/// Stock-keeping unit: the stable external key of a product.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Sku(String);

impl Sku {
    /// Builds a SKU from user input, already percent-decoded. Surrounding
    /// whitespace is dropped.
    pub fn parse(raw: impl AsRef<str>) -> Result<Self, ProductError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ProductError::InvalidSku);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Keeps a SKU exactly as a backend record carries it. Only a blank
    /// value is rejected; surrounding whitespace is part of the key.
    pub fn from_record(raw: impl Into<String>) -> Result<Self, ProductError> {
        let raw: String = raw.into();
        if raw.trim().is_empty() {
            return Err(ProductError::InvalidSku);
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Percent-encoded form used in `/products/{sku}` links.
    pub fn to_path_segment(&self) -> String {
        urlencoding::encode(&self.0).into_owned()
    }
}

impl std::fmt::Display for Sku {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Integer status flag reported by the commerce backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductStatus(i32);

impl ProductStatus {
    pub const ENABLED: ProductStatus = ProductStatus(1);

    pub fn new(value: i32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i32 {
        self.0
    }

    /// Only enabled products can be added to the cart.
    pub fn is_purchasable(&self) -> bool {
        *self == Self::ENABLED
    }
}

impl Default for ProductStatus {
    fn default() -> Self {
        Self::ENABLED
    }
}

/// Base URL of the commerce backend's media host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaBase(String);

const PRODUCT_MEDIA_PATH: &str = "/pub/media/catalog/product";

impl MediaBase {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self(base_url.trim_end_matches('/').to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Resolves a product image path to a fetchable URL.
    ///
    /// Absolute http(s) URLs pass through, relative paths are joined onto the
    /// product media directory and an empty path stays empty.
    pub fn resolve(&self, path: &str) -> String {
        if path.is_empty() {
            return String::new();
        }
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        if path.starts_with('/') {
            format!("{}{}{}", self.0, PRODUCT_MEDIA_PATH, path)
        } else {
            format!("{}{}/{}", self.0, PRODUCT_MEDIA_PATH, path)
        }
    }
}
