use async_trait::async_trait;

use crate::domain::cart_product::errors::CartProductError;
use crate::domain::shared::value_objects::{CartId, ProductId};

pub struct GetCartsContainingProductParams {
    pub product_id: ProductId,
}

#[async_trait]
pub trait GetCartsContainingProductUseCase: Send + Sync {
    async fn execute(
        &self,
        params: GetCartsContainingProductParams,
    ) -> Result<Vec<CartId>, CartProductError>;
}
