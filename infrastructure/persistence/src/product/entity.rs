use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

use business::domain::product::model::Product;
use business::domain::shared::value_objects::ProductId;

use crate::db::numeric_to_f64;

#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: String,
    pub title: String,
    pub price: BigDecimal,
    pub category: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProductEntity {
    pub fn into_domain(self) -> Product {
        Product::from_repository(
            ProductId::new(self.id),
            self.title,
            numeric_to_f64(&self.price, "products.price"),
            self.category,
            self.created_at,
            self.updated_at,
        )
    }
}
