use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::product::model::Product;

/// Body for both create and full update.
#[derive(Debug, Clone, Object)]
pub struct ProductRequest {
    /// Display title (cannot be blank)
    pub title: String,
    /// Unit price, zero or more
    pub price: f64,
    #[oai(skip_serializing_if_is_none)]
    pub category: Option<String>,
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ProductResponse {
    pub id: String,
    pub title: String,
    pub price: f64,
    #[oai(skip_serializing_if_is_none)]
    pub category: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.to_string(),
            title: product.title,
            price: product.price,
            category: product.category,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}
