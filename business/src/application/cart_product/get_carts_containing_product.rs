use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart_product::errors::CartProductError;
use crate::domain::cart_product::repository::CartProductRepository;
use crate::domain::cart_product::use_cases::get_carts_containing_product::{
    GetCartsContainingProductParams, GetCartsContainingProductUseCase,
};
use crate::domain::logger::Logger;
use crate::domain::shared::value_objects::CartId;

pub struct GetCartsContainingProductUseCaseImpl {
    pub repository: Arc<dyn CartProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetCartsContainingProductUseCase for GetCartsContainingProductUseCaseImpl {
    async fn execute(
        &self,
        params: GetCartsContainingProductParams,
    ) -> Result<Vec<CartId>, CartProductError> {
        self.logger
            .info(&format!("Fetching carts containing product: {}", params.product_id));

        let carts = self
            .repository
            .find_carts_by_product_id(&params.product_id)
            .await?;
        Ok(carts)
    }
}
