use chrono::{DateTime, Utc};
use sqlx::FromRow;

use business::domain::cart::model::Cart;
use business::domain::shared::value_objects::CartId;

#[derive(Debug, FromRow)]
pub struct CartEntity {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CartEntity {
    pub fn into_domain(self) -> Cart {
        Cart::from_repository(CartId::new(self.id), self.created_at, self.updated_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_convert_into_domain_cart() {
        let now = Utc::now();
        let entity = CartEntity {
            id: "c1".to_string(),
            created_at: now,
            updated_at: now,
        };

        let cart = entity.into_domain();

        assert_eq!(cart.id, CartId::new("c1"));
        assert_eq!(cart.created_at, now);
    }
}
