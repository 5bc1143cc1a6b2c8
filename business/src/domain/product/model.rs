use chrono::{DateTime, Utc};

use super::errors::ProductError;
use crate::domain::shared::value_objects::ProductId;

#[derive(Debug, Clone)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub price: f64,
    pub category: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct NewProductProps {
    pub title: String,
    pub price: f64,
    pub category: Option<String>,
}

impl Product {
    pub fn new(props: NewProductProps) -> Result<Self, ProductError> {
        validate(&props.title, props.price)?;

        let now = Utc::now();
        Ok(Self {
            id: ProductId::generate(),
            title: props.title,
            price: props.price,
            category: props.category,
            created_at: now,
            updated_at: now,
        })
    }

    /// Replaces the editable fields, keeping the identity and creation time.
    pub fn update(self, props: NewProductProps) -> Result<Self, ProductError> {
        validate(&props.title, props.price)?;

        Ok(Self {
            title: props.title,
            price: props.price,
            category: props.category,
            updated_at: Utc::now(),
            ..self
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: ProductId,
        title: String,
        price: f64,
        category: Option<String>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title,
            price,
            category,
            created_at,
            updated_at,
        }
    }
}

/// Largest price a `NUMERIC(12, 2)` column holds.
pub const MAX_PRICE: f64 = 9_999_999_999.99;

fn validate(title: &str, price: f64) -> Result<(), ProductError> {
    if title.trim().is_empty() {
        return Err(ProductError::TitleEmpty);
    }
    if !price.is_finite() || !(0.0..=MAX_PRICE).contains(&price) || !has_whole_cents(price) {
        return Err(ProductError::InvalidPrice);
    }
    Ok(())
}

/// True when `price` has at most two decimal places, allowing for binary
/// rounding (19.99 * 100 is 1998.9999999999998).
fn has_whole_cents(price: f64) -> bool {
    let cents = price * 100.0;
    (cents - cents.round()).abs() <= 4.0 * f64::EPSILON * cents.abs().max(1.0)
}
