use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::product::Product;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateProductPayload {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    pub price: Decimal,
    pub description: Option<String>,
    pub image_url: Option<String>,
    #[validate(range(min = 1))]
    pub category_id: i64,
}

/// Partial update. A field left out of the request body stays untouched; a
/// field that is present is applied even when it holds a zero or empty
/// value.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateProductPayload {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    pub price: Option<Decimal>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    #[validate(range(min = 1))]
    pub category_id: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductResponse {
    pub id: i64,
    pub name: String,
    pub price: Decimal,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub category_id: i64,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductListResponse {
    pub items: Vec<ProductResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ProductListQuery {
    pub category_id: Option<i64>,
    pub search: Option<String>,
}

impl From<Product> for ProductResponse {
    fn from(value: Product) -> Self {
        Self {
            id: value.id,
            name: value.name,
            price: value.price,
            description: value.description,
            image_url: value.image_url,
            category_id: value.category_id,
            is_active: value.is_active,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}
