use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart_product::errors::CartProductError;
use crate::domain::cart_product::model::{ProductSales, take_top};
use crate::domain::cart_product::repository::CartProductRepository;
use crate::domain::cart_product::use_cases::get_most_sold_by_category::{
    GetMostSoldProductsByCategoryParams, GetMostSoldProductsByCategoryUseCase,
};
use crate::domain::logger::Logger;

pub struct GetMostSoldProductsByCategoryUseCaseImpl {
    pub repository: Arc<dyn CartProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetMostSoldProductsByCategoryUseCase for GetMostSoldProductsByCategoryUseCaseImpl {
    async fn execute(
        &self,
        params: GetMostSoldProductsByCategoryParams,
    ) -> Result<Vec<ProductSales>, CartProductError> {
        self.logger.info(&format!(
            "Fetching top {} most sold products in category {}",
            params.top_n,
            params.category.as_deref().unwrap_or("<any>")
        ));

        if params.top_n <= 0 {
            return Ok(Vec::new());
        }

        let ranked = self
            .repository
            .find_most_sold_products(params.category)
            .await?;
        Ok(take_top(ranked, params.top_n))
    }
}
