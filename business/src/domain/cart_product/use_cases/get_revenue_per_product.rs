use std::collections::BTreeMap;

use async_trait::async_trait;

use crate::domain::cart_product::errors::CartProductError;

#[async_trait]
pub trait GetRevenuePerProductUseCase: Send + Sync {
    /// Revenue keyed by product title.
    async fn execute(&self) -> Result<BTreeMap<String, f64>, CartProductError>;
}
