use std::collections::BTreeMap;

use super::errors::CartProductError;
use crate::domain::shared::value_objects::{CartId, ProductId};

/// A line item: how many units of a product sit in a cart.
#[derive(Debug, Clone, PartialEq)]
pub struct CartProduct {
    pub cart_id: CartId,
    pub product_id: ProductId,
    pub quantity: i32,
}

impl CartProduct {
    pub fn new(
        cart_id: CartId,
        product_id: ProductId,
        quantity: i32,
    ) -> Result<Self, CartProductError> {
        if quantity < 1 {
            return Err(CartProductError::InvalidQuantity);
        }

        Ok(Self {
            cart_id,
            product_id,
            quantity,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    /// A NULL quantity in storage reads as zero.
    pub fn from_repository(cart_id: CartId, product_id: ProductId, quantity: Option<i32>) -> Self {
        Self {
            cart_id,
            product_id,
            quantity: quantity.unwrap_or(0),
        }
    }
}

/// A line item joined with the product it references.
#[derive(Debug, Clone, PartialEq)]
pub struct CartProductView {
    pub product_id: ProductId,
    pub product_title: String,
    pub product_price: f64,
    pub quantity: i32,
}

/// Units of a product summed over every cart.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductSales {
    pub product_id: ProductId,
    pub title: String,
    pub total_sold: i64,
}

/// Revenue row, keyed by product title.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRevenue {
    pub title: String,
    pub revenue: f64,
}

/// Keeps the first `top_n` entries of an already ranked list.
/// Zero or negative `top_n` yields nothing.
pub fn take_top(sales: Vec<ProductSales>, top_n: i64) -> Vec<ProductSales> {
    let limit = usize::try_from(top_n).unwrap_or(0);
    sales.into_iter().take(limit).collect()
}

/// Folds revenue rows into a title-keyed map. Rows sharing a title are summed.
pub fn revenue_by_title(rows: Vec<ProductRevenue>) -> BTreeMap<String, f64> {
    rows.into_iter().fold(BTreeMap::new(), |mut acc, row| {
        *acc.entry(row.title).or_insert(0.0) += row.revenue;
        acc
    })
}
