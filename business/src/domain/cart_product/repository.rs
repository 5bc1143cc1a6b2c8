use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::{CartId, ProductId};

use super::model::{CartProduct, CartProductView, ProductRevenue, ProductSales};

/// Port over the line-item relation keyed by `(cart_id, product_id)`.
#[async_trait]
pub trait CartProductRepository: Send + Sync {
    async fn find_by_cart_id(
        &self,
        cart_id: &CartId,
    ) -> Result<Vec<CartProductView>, RepositoryError>;

    /// Inserts the line item, or adds its quantity to the stored one when the
    /// pair already exists. Returns the line item as stored afterwards.
    async fn add_quantity(&self, item: &CartProduct) -> Result<CartProduct, RepositoryError>;

    /// Returns `false` when no line item matched the pair.
    async fn delete(
        &self,
        cart_id: &CartId,
        product_id: &ProductId,
    ) -> Result<bool, RepositoryError>;

    /// Total quantity per product, highest first, ties by product id.
    /// `None` disables the category filter.
    async fn find_most_sold_products(
        &self,
        category: Option<String>,
    ) -> Result<Vec<ProductSales>, RepositoryError>;

    async fn find_revenue_per_product(&self) -> Result<Vec<ProductRevenue>, RepositoryError>;

    /// `None` when there are no line items at all.
    async fn count_total_items(&self) -> Result<Option<i64>, RepositoryError>;

    async fn find_carts_by_product_id(
        &self,
        product_id: &ProductId,
    ) -> Result<Vec<CartId>, RepositoryError>;
}
