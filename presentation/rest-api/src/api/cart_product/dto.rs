use poem_openapi::Object;

use business::domain::cart_product::model::{CartProductView, ProductSales};

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct CartProductRequest {
    pub product_id: String,
    /// Units to add, at least 1
    pub quantity: i32,
}

/// A line item together with the product it points at.
#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct CartProductResponse {
    pub product_id: String,
    pub product_title: String,
    pub product_price: f64,
    pub quantity: i32,
}

impl From<CartProductView> for CartProductResponse {
    fn from(view: CartProductView) -> Self {
        Self {
            product_id: view.product_id.to_string(),
            product_title: view.product_title,
            product_price: view.product_price,
            quantity: view.quantity,
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ProductSalesResponse {
    pub product_id: String,
    pub title: String,
    /// Units summed over every cart
    pub total_sold: i64,
}

impl From<ProductSales> for ProductSalesResponse {
    fn from(sales: ProductSales) -> Self {
        Self {
            product_id: sales.product_id.to_string(),
            title: sales.title,
            total_sold: sales.total_sold,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct TotalItemsResponse {
    pub total: i64,
}
