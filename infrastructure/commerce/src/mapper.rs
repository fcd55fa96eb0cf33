use serde_json::Value;

use business::domain::category::model::Category;
use business::domain::errors::GatewayError;
use business::domain::product::model::{NewProductProps, Product};
use business::domain::product::value_objects::{ProductStatus, Sku};
use business::domain::shared::pagination::{Paged, SearchCriteria};

use crate::dto::{
    ApiCategoryItem, ApiListEnvelope, ApiProductItem, as_bool, as_f64, as_i64, as_text,
};

/// Price from the backend's decimal string; anything unparsable is 0.
pub fn parse_price(value: Option<&Value>) -> f64 {
    as_f64(value)
        .filter(|p| p.is_finite() && *p >= 0.0)
        .unwrap_or(0.0)
}

/// Status flag; missing, null or 0 falls back to sellable.
pub fn parse_status(value: Option<&Value>) -> ProductStatus {
    match as_i64(value) {
        Some(status) if status != 0 => {
            ProductStatus::new(i32::try_from(status).unwrap_or(i32::MAX))
        }
        _ => ProductStatus::ENABLED,
    }
}

pub fn to_product(item: ApiProductItem) -> Result<Product, GatewayError> {
    let sku = as_text(item.sku.as_ref())
        .ok_or_else(|| GatewayError::decode("product without sku"))
        .and_then(|s| {
            Sku::from_record(s).map_err(|_| GatewayError::decode("product with blank sku"))
        })?;

    Ok(Product::new(NewProductProps {
        id: as_i64(item.id.as_ref()).unwrap_or_default(),
        sku,
        name: as_text(item.name.as_ref()).unwrap_or_default(),
        price: parse_price(item.price.as_ref()),
        status: parse_status(item.status.as_ref()),
        type_id: as_text(item.type_id.as_ref()),
        image: as_text(item.image.as_ref()),
        description: as_text(item.description.as_ref()),
        short_description: as_text(item.short_description.as_ref()),
    }))
}

/// Single-item responses carry the product fields at the top level.
pub fn to_single_product(data: Value) -> Result<Product, GatewayError> {
    let item: ApiProductItem =
        serde_json::from_value(data).map_err(|e| GatewayError::decode(e.to_string()))?;
    to_product(item)
}

/// Maps a list envelope, echoing the criteria the page was requested with.
///
/// An item that cannot be keyed by a SKU is left out of the page; the rest
/// of the listing is still returned.
pub fn to_product_page(
    data: Value,
    search_criteria: SearchCriteria,
) -> Result<Paged<Product>, GatewayError> {
    let envelope: ApiListEnvelope =
        serde_json::from_value(data).map_err(|e| GatewayError::decode(e.to_string()))?;

    let items = envelope
        .items
        .unwrap_or_default()
        .into_iter()
        .filter_map(|raw| {
            serde_json::from_value::<ApiProductItem>(raw)
                .map_err(|e| GatewayError::decode(e.to_string()))
                .and_then(to_product)
                .inspect_err(|e| tracing::warn!(error = %e, "skipping product item"))
                .ok()
        })
        .collect();

    let total_count = as_i64(envelope.total_count.as_ref())
        .and_then(|n| u64::try_from(n).ok())
        .unwrap_or(0);

    Ok(Paged::new(items, total_count, search_criteria))
}

pub fn to_category(item: ApiCategoryItem) -> Category {
    Category {
        id: as_i64(item.id.as_ref()).unwrap_or_default(),
        parent_id: as_i64(item.parent_id.as_ref()).unwrap_or_default(),
        name: as_text(item.name.as_ref()).unwrap_or_default(),
        is_active: as_bool(item.is_active.as_ref()).unwrap_or(true),
        position: as_i64(item.position.as_ref()).unwrap_or_default(),
        level: as_i64(item.level.as_ref()).unwrap_or_default(),
        product_count: as_i64(item.product_count.as_ref())
            .and_then(|n| u64::try_from(n).ok())
            .unwrap_or(0),
        children: item
            .children_data
            .unwrap_or_default()
            .into_iter()
            .filter_map(category_from_value)
            .collect(),
    }
}

fn category_from_value(value: Value) -> Option<Category> {
    serde_json::from_value::<ApiCategoryItem>(value)
        .map(to_category)
        .inspect_err(|e| tracing::warn!(error = %e, "skipping category item"))
        .ok()
}

/// Wraps the backend's top-level categories in the synthetic root.
///
/// Accepts a bare array or an object with an `items` array.
pub fn to_category_tree(data: Value) -> Result<Category, GatewayError> {
    let raw = match data {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("items") {
            Some(Value::Array(items)) => items,
            _ => return Err(GatewayError::decode("category list missing")),
        },
        _ => return Err(GatewayError::decode("category list missing")),
    };

    let children = raw.into_iter().filter_map(category_from_value).collect();

    Ok(Category::synthetic_root(children))
}
