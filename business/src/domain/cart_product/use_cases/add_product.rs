use async_trait::async_trait;

use crate::domain::cart_product::errors::CartProductError;
use crate::domain::cart_product::model::CartProductView;
use crate::domain::shared::value_objects::{CartId, ProductId};

pub struct AddProductToCartParams {
    pub cart_id: CartId,
    pub product_id: ProductId,
    pub quantity: i32,
}

#[async_trait]
pub trait AddProductToCartUseCase: Send + Sync {
    async fn execute(
        &self,
        params: AddProductToCartParams,
    ) -> Result<CartProductView, CartProductError>;
}
