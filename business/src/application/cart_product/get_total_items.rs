use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart_product::errors::CartProductError;
use crate::domain::cart_product::repository::CartProductRepository;
use crate::domain::cart_product::use_cases::get_total_items::GetTotalItemsInCartsUseCase;
use crate::domain::logger::Logger;

pub struct GetTotalItemsInCartsUseCaseImpl {
    pub repository: Arc<dyn CartProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetTotalItemsInCartsUseCase for GetTotalItemsInCartsUseCaseImpl {
    async fn execute(&self) -> Result<i64, CartProductError> {
        self.logger.info("Counting items in all carts");

        // SUM over zero rows is NULL.
        let total = self.repository.count_total_items().await?.unwrap_or(0);

        self.logger.info(&format!("Total items in carts: {}", total));
        Ok(total)
    }
}
