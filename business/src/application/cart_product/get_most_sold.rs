use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart_product::errors::CartProductError;
use crate::domain::cart_product::model::{ProductSales, take_top};
use crate::domain::cart_product::repository::CartProductRepository;
use crate::domain::cart_product::use_cases::get_most_sold::{
    GetMostSoldProductsParams, GetMostSoldProductsUseCase,
};
use crate::domain::logger::Logger;

pub struct GetMostSoldProductsUseCaseImpl {
    pub repository: Arc<dyn CartProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetMostSoldProductsUseCase for GetMostSoldProductsUseCaseImpl {
    async fn execute(
        &self,
        params: GetMostSoldProductsParams,
    ) -> Result<Vec<ProductSales>, CartProductError> {
        self.logger
            .info(&format!("Fetching top {} most sold products", params.top_n));

        if params.top_n <= 0 {
            return Ok(Vec::new());
        }

        let ranked = self.repository.find_most_sold_products(None).await?;
        Ok(take_top(ranked, params.top_n))
    }
}
