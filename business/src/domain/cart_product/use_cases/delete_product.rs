use async_trait::async_trait;

use crate::domain::cart_product::errors::CartProductError;
use crate::domain::shared::value_objects::{CartId, ProductId};

pub struct DeleteProductFromCartParams {
    pub cart_id: CartId,
    pub product_id: ProductId,
}

#[async_trait]
pub trait DeleteProductFromCartUseCase: Send + Sync {
    async fn execute(&self, params: DeleteProductFromCartParams) -> Result<(), CartProductError>;
}
