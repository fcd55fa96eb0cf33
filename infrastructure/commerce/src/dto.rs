use serde::Deserialize;
use serde_json::Value;

/// Product item as the backend sends it. Every field is optional; the mapper
/// decides the fallbacks.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ApiProductItem {
    pub id: Option<Value>,
    pub sku: Option<Value>,
    pub name: Option<Value>,
    pub price: Option<Value>,
    pub type_id: Option<Value>,
    pub status: Option<Value>,
    pub image: Option<Value>,
    pub description: Option<Value>,
    pub short_description: Option<Value>,
}

/// Envelope of the list actions.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ApiListEnvelope {
    pub items: Option<Vec<Value>>,
    pub total_count: Option<Value>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ApiCategoryItem {
    pub id: Option<Value>,
    pub parent_id: Option<Value>,
    pub name: Option<Value>,
    pub is_active: Option<Value>,
    pub position: Option<Value>,
    pub level: Option<Value>,
    pub product_count: Option<Value>,
    pub children_data: Option<Vec<Value>>,
}

/// Text from a JSON string, number or bool. Null, arrays and objects have
/// no text form.
pub fn as_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Integer from a JSON number or a numeric string.
pub fn as_i64(value: Option<&Value>) -> Option<i64> {
    match value? {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Float from a JSON number or a numeric string.
pub fn as_f64(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Flag from a bool, 0/1, or "0"/"1".
pub fn as_bool(value: Option<&Value>) -> Option<bool> {
    match value? {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => n.as_i64().map(|i| i != 0),
        Value::String(s) => match s.trim() {
            "1" | "true" => Some(true),
            "0" | "false" | "" => Some(false),
            _ => None,
        },
        _ => None,
    }
}
