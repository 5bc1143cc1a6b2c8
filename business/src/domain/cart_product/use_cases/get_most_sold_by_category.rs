use async_trait::async_trait;

use crate::domain::cart_product::errors::CartProductError;
use crate::domain::cart_product::model::ProductSales;

pub struct GetMostSoldProductsByCategoryParams {
    /// `None` ranks products of every category.
    pub category: Option<String>,
    pub top_n: i64,
}

#[async_trait]
pub trait GetMostSoldProductsByCategoryUseCase: Send + Sync {
    async fn execute(
        &self,
        params: GetMostSoldProductsByCategoryParams,
    ) -> Result<Vec<ProductSales>, CartProductError>;
}
