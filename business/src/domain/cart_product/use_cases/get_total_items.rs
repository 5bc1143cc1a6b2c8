use async_trait::async_trait;

use crate::domain::cart_product::errors::CartProductError;

#[async_trait]
pub trait GetTotalItemsInCartsUseCase: Send + Sync {
    async fn execute(&self) -> Result<i64, CartProductError>;
}
