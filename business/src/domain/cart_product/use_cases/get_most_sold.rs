use async_trait::async_trait;

use crate::domain::cart_product::errors::CartProductError;
use crate::domain::cart_product::model::ProductSales;

pub struct GetMostSoldProductsParams {
    pub top_n: i64,
}

#[async_trait]
pub trait GetMostSoldProductsUseCase: Send + Sync {
    async fn execute(
        &self,
        params: GetMostSoldProductsParams,
    ) -> Result<Vec<ProductSales>, CartProductError>;
}
