use chrono::{DateTime, Utc};

use crate::domain::shared::value_objects::CartId;

/// A shopping cart. Its line items live in the `cart_product` relation and are
/// removed together with the cart.
#[derive(Debug, Clone)]
pub struct Cart {
    pub id: CartId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Cart {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: CartId::generate(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(id: CartId, created_at: DateTime<Utc>, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            created_at,
            updated_at,
        }
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}
