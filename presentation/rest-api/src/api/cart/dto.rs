use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::cart::model::Cart;

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct CartResponse {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Cart> for CartResponse {
    fn from(cart: Cart) -> Self {
        Self {
            id: cart.id.to_string(),
            created_at: cart.created_at,
            updated_at: cart.updated_at,
        }
    }
}
