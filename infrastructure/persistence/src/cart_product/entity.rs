use bigdecimal::BigDecimal;
use sqlx::FromRow;

use business::domain::cart_product::model::{
    CartProduct, CartProductView, ProductRevenue, ProductSales,
};
use business::domain::shared::value_objects::{CartId, ProductId};

use crate::db::numeric_to_f64;

/// A row of `cart_products`.
#[derive(Debug, FromRow)]
pub struct CartProductEntity {
    pub cart_id: String,
    pub product_id: String,
    pub quantity: Option<i32>,
}

impl CartProductEntity {
    pub fn into_domain(self) -> CartProduct {
        CartProduct::from_repository(
            CartId::new(self.cart_id),
            ProductId::new(self.product_id),
            self.quantity,
        )
    }
}

/// A line item joined with its product.
#[derive(Debug, FromRow)]
pub struct CartProductViewEntity {
    pub product_id: String,
    pub product_title: String,
    pub product_price: BigDecimal,
    pub quantity: Option<i32>,
}

impl CartProductViewEntity {
    pub fn into_domain(self) -> CartProductView {
        CartProductView {
            product_id: ProductId::new(self.product_id),
            product_title: self.product_title,
            product_price: numeric_to_f64(&self.product_price, "products.price"),
            quantity: self.quantity.unwrap_or(0),
        }
    }
}

#[derive(Debug, FromRow)]
pub struct ProductSalesEntity {
    pub product_id: String,
    pub title: String,
    pub total_sold: i64,
}

impl ProductSalesEntity {
    pub fn into_domain(self) -> ProductSales {
        ProductSales {
            product_id: ProductId::new(self.product_id),
            title: self.title,
            total_sold: self.total_sold,
        }
    }
}

#[derive(Debug, FromRow)]
pub struct ProductRevenueEntity {
    pub title: String,
    pub revenue: Option<BigDecimal>,
}

impl ProductRevenueEntity {
    pub fn into_domain(self) -> ProductRevenue {
        ProductRevenue {
            title: self.title,
            revenue: self
                .revenue
                .map(|r| numeric_to_f64(&r, "revenue"))
                .unwrap_or_default(),
        }
    }
}
