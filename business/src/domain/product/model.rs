use super::value_objects::{ProductStatus, Sku};

pub const DEFAULT_ATTRIBUTE_SET_ID: i64 = 4;
/// Visible in both catalog and search.
pub const DEFAULT_VISIBILITY: i64 = 4;
pub const DEFAULT_WEIGHT: f64 = 1.0;
pub const DEFAULT_TYPE_ID: &str = "simple";

pub const IMAGE_ATTRIBUTE: &str = "image";
pub const DESCRIPTION_ATTRIBUTE: &str = "description";
pub const SHORT_DESCRIPTION_ATTRIBUTE: &str = "short_description";

#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
    Text(String),
    Number(f64),
    Flag(bool),
}

impl std::fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttributeValue::Text(text) => write!(f, "{}", text),
            AttributeValue::Number(number) => write!(f, "{}", number),
            AttributeValue::Flag(flag) => write!(f, "{}", flag),
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(s: &str) -> Self {
        AttributeValue::Text(s.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(s: String) -> Self {
        AttributeValue::Text(s)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CustomAttribute {
    pub attribute_code: String,
    pub value: AttributeValue,
}

impl CustomAttribute {
    pub fn new(attribute_code: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        Self {
            attribute_code: attribute_code.into(),
            value: value.into(),
        }
    }
}

/// Normalized catalog product.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i64,
    pub sku: Sku,
    pub name: String,
    pub attribute_set_id: i64,
    pub price: f64,
    pub status: ProductStatus,
    pub visibility: i64,
    pub type_id: String,
    pub weight: f64,
    pub custom_attributes: Vec<CustomAttribute>,
}

/// Fields the commerce backend actually supplies, already defaulted.
pub struct NewProductProps {
    pub id: i64,
    pub sku: Sku,
    pub name: String,
    pub price: f64,
    pub status: ProductStatus,
    pub type_id: Option<String>,
    pub image: Option<String>,
    pub description: Option<String>,
    pub short_description: Option<String>,
}

impl Product {
    /// Builds the normalized shape: fixed constants for the fields the
    /// backend does not provide, and image/descriptions folded into the
    /// attribute list so every consumer looks them up the same way.
    pub fn new(props: NewProductProps) -> Self {
        let price = if props.price.is_finite() && props.price > 0.0 {
            props.price
        } else {
            0.0
        };

        let type_id = props
            .type_id
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_TYPE_ID.to_string());

        let custom_attributes = vec![
            CustomAttribute::new(IMAGE_ATTRIBUTE, props.image.unwrap_or_default()),
            CustomAttribute::new(DESCRIPTION_ATTRIBUTE, props.description.unwrap_or_default()),
            CustomAttribute::new(
                SHORT_DESCRIPTION_ATTRIBUTE,
                props.short_description.unwrap_or_default(),
            ),
        ];

        Self {
            id: props.id,
            sku: props.sku,
            name: props.name,
            attribute_set_id: DEFAULT_ATTRIBUTE_SET_ID,
            price,
            status: props.status,
            visibility: DEFAULT_VISIBILITY,
            type_id,
            weight: DEFAULT_WEIGHT,
            custom_attributes,
        }
    }

    pub fn custom_attribute(&self, attribute_code: &str) -> Option<&AttributeValue> {
        self.custom_attributes
            .iter()
            .find(|a| a.attribute_code == attribute_code)
            .map(|a| &a.value)
    }

    /// Attribute value as text, or an empty string when absent.
    pub fn attribute_text(&self, attribute_code: &str) -> String {
        self.custom_attribute(attribute_code)
            .map(|v| v.to_string())
            .unwrap_or_default()
    }

    pub fn image_path(&self) -> String {
        self.attribute_text(IMAGE_ATTRIBUTE)
    }

    pub fn is_purchasable(&self) -> bool {
        self.status.is_purchasable()
    }
}
