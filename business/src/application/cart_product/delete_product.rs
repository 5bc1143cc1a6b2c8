use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::repository::CartRepository;
use crate::domain::cart_product::errors::CartProductError;
use crate::domain::cart_product::repository::CartProductRepository;
use crate::domain::cart_product::use_cases::delete_product::{
    DeleteProductFromCartParams, DeleteProductFromCartUseCase,
};
use crate::domain::logger::Logger;

pub struct DeleteProductFromCartUseCaseImpl {
    pub repository: Arc<dyn CartProductRepository>,
    pub cart_repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteProductFromCartUseCase for DeleteProductFromCartUseCaseImpl {
    async fn execute(&self, params: DeleteProductFromCartParams) -> Result<(), CartProductError> {
        self.logger.info(&format!(
            "Removing product {} from cart {}",
            params.product_id, params.cart_id
        ));

        if !self.cart_repository.exists(&params.cart_id).await? {
            return Err(CartProductError::CartNotFound(params.cart_id));
        }

        let removed = self
            .repository
            .delete(&params.cart_id, &params.product_id)
            .await?;
        if !removed {
            self.logger.warn(&format!(
                "Product {} is not in cart {}",
                params.product_id, params.cart_id
            ));
            return Err(CartProductError::ProductNotFound(params.product_id));
        }

        self.logger.info(&format!(
            "Product {} removed from cart {}",
            params.product_id, params.cart_id
        ));
        Ok(())
    }
}
