use async_trait::async_trait;

use crate::domain::cart_product::errors::CartProductError;
use crate::domain::cart_product::model::CartProductView;
use crate::domain::shared::value_objects::CartId;

pub struct GetProductsInCartParams {
    pub cart_id: CartId,
}

#[async_trait]
pub trait GetProductsInCartUseCase: Send + Sync {
    async fn execute(
        &self,
        params: GetProductsInCartParams,
    ) -> Result<Vec<CartProductView>, CartProductError>;
}
