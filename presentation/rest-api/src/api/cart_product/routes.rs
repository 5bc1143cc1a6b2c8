use std::collections::BTreeMap;
use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};

use business::domain::cart_product::use_cases::add_product::{
    AddProductToCartParams, AddProductToCartUseCase,
};
use business::domain::cart_product::use_cases::delete_product::{
    DeleteProductFromCartParams, DeleteProductFromCartUseCase,
};
use business::domain::cart_product::use_cases::get_carts_containing_product::{
    GetCartsContainingProductParams, GetCartsContainingProductUseCase,
};
use business::domain::cart_product::use_cases::get_most_sold::{
    GetMostSoldProductsParams, GetMostSoldProductsUseCase,
};
use business::domain::cart_product::use_cases::get_most_sold_by_category::{
    GetMostSoldProductsByCategoryParams, GetMostSoldProductsByCategoryUseCase,
};
use business::domain::cart_product::use_cases::get_products_in_cart::{
    GetProductsInCartParams, GetProductsInCartUseCase,
};
use business::domain::cart_product::use_cases::get_revenue_per_product::GetRevenuePerProductUseCase;
use business::domain::cart_product::use_cases::get_total_items::GetTotalItemsInCartsUseCase;
use business::domain::shared::value_objects::{CartId, ProductId};

use crate::api::cart_product::dto::{
    CartProductRequest, CartProductResponse, ProductSalesResponse, TotalItemsResponse,
};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

const DEFAULT_TOP_N: i64 = 5;

pub struct CartProductApi {
    add_product_use_case: Arc<dyn AddProductToCartUseCase>,
    delete_product_use_case: Arc<dyn DeleteProductFromCartUseCase>,
    get_products_in_cart_use_case: Arc<dyn GetProductsInCartUseCase>,
    get_most_sold_use_case: Arc<dyn GetMostSoldProductsUseCase>,
    get_most_sold_by_category_use_case: Arc<dyn GetMostSoldProductsByCategoryUseCase>,
    get_revenue_use_case: Arc<dyn GetRevenuePerProductUseCase>,
    get_total_items_use_case: Arc<dyn GetTotalItemsInCartsUseCase>,
    get_carts_containing_product_use_case: Arc<dyn GetCartsContainingProductUseCase>,
}

impl CartProductApi {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        add_product_use_case: Arc<dyn AddProductToCartUseCase>,
        delete_product_use_case: Arc<dyn DeleteProductFromCartUseCase>,
        get_products_in_cart_use_case: Arc<dyn GetProductsInCartUseCase>,
        get_most_sold_use_case: Arc<dyn GetMostSoldProductsUseCase>,
        get_most_sold_by_category_use_case: Arc<dyn GetMostSoldProductsByCategoryUseCase>,
        get_revenue_use_case: Arc<dyn GetRevenuePerProductUseCase>,
        get_total_items_use_case: Arc<dyn GetTotalItemsInCartsUseCase>,
        get_carts_containing_product_use_case: Arc<dyn GetCartsContainingProductUseCase>,
    ) -> Self {
        Self {
            add_product_use_case,
            delete_product_use_case,
            get_products_in_cart_use_case,
            get_most_sold_use_case,
            get_most_sold_by_category_use_case,
            get_revenue_use_case,
            get_total_items_use_case,
            get_carts_containing_product_use_case,
        }
    }
}

/// Cart line items and sales reporting
///
/// Endpoints for adding products to carts, removing them again, and the
/// aggregate queries computed over every cart.
#[OpenApi]
impl CartProductApi {
    /// Add a product to a cart
    ///
    /// Adding a product that is already in the cart increases its quantity.
    #[oai(
        path = "/carts/:cart_id/products",
        method = "post",
        tag = "ApiTags::CartProducts"
    )]
    async fn add_product_to_cart(
        &self,
        cart_id: Path<String>,
        body: Json<CartProductRequest>,
    ) -> AddProductToCartResponse {
        let params = AddProductToCartParams {
            cart_id: CartId::new(cart_id.0),
            product_id: ProductId::new(body.0.product_id),
            quantity: body.0.quantity,
        };

        match self.add_product_use_case.execute(params).await {
            Ok(view) => AddProductToCartResponse::Created(Json(view.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => AddProductToCartResponse::BadRequest(json),
                    404 => AddProductToCartResponse::NotFound(json),
                    _ => AddProductToCartResponse::InternalError(json),
                }
            }
        }
    }

    /// Remove a product from a cart
    #[oai(
        path = "/carts/:cart_id/products/:product_id",
        method = "delete",
        tag = "ApiTags::CartProducts"
    )]
    async fn delete_product_from_cart(
        &self,
        cart_id: Path<String>,
        product_id: Path<String>,
    ) -> DeleteProductFromCartResponse {
        let params = DeleteProductFromCartParams {
            cart_id: CartId::new(cart_id.0),
            product_id: ProductId::new(product_id.0),
        };

        match self.delete_product_use_case.execute(params).await {
            Ok(()) => DeleteProductFromCartResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => DeleteProductFromCartResponse::NotFound(json),
                    _ => DeleteProductFromCartResponse::InternalError(json),
                }
            }
        }
    }

    /// List the line items of a cart
    ///
    /// An unknown cart yields an empty list.
    #[oai(
        path = "/carts/:cart_id/products",
        method = "get",
        tag = "ApiTags::CartProducts"
    )]
    async fn get_products_in_cart(&self, cart_id: Path<String>) -> GetProductsInCartResponse {
        let params = GetProductsInCartParams {
            cart_id: CartId::new(cart_id.0),
        };

        match self.get_products_in_cart_use_case.execute(params).await {
            Ok(items) => GetProductsInCartResponse::Ok(Json(
                items.into_iter().map(|i| i.into()).collect(),
            )),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetProductsInCartResponse::InternalError(json)
            }
        }
    }

    /// Best-selling products
    ///
    /// Products ranked by units across all carts, highest first. `topN`
    /// defaults to 5; zero or less returns an empty list.
    #[oai(
        path = "/cart-products/most-sold",
        method = "get",
        tag = "ApiTags::CartProducts"
    )]
    async fn get_most_sold_products(
        &self,
        #[oai(name = "topN")] top_n: Query<Option<i64>>,
    ) -> GetMostSoldProductsResponse {
        let params = GetMostSoldProductsParams {
            top_n: top_n.0.unwrap_or(DEFAULT_TOP_N),
        };

        match self.get_most_sold_use_case.execute(params).await {
            Ok(sales) => GetMostSoldProductsResponse::Ok(Json(
                sales.into_iter().map(|s| s.into()).collect(),
            )),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetMostSoldProductsResponse::InternalError(json)
            }
        }
    }

    /// Best-selling products of one category
    ///
    /// Without `category` every category is considered.
    #[oai(
        path = "/cart-products/most-sold/category",
        method = "get",
        tag = "ApiTags::CartProducts"
    )]
    async fn get_most_sold_products_by_category(
        &self,
        category: Query<Option<String>>,
        #[oai(name = "topN")] top_n: Query<Option<i64>>,
    ) -> GetMostSoldProductsResponse {
        let params = GetMostSoldProductsByCategoryParams {
            category: category.0,
            top_n: top_n.0.unwrap_or(DEFAULT_TOP_N),
        };

        match self.get_most_sold_by_category_use_case.execute(params).await {
            Ok(sales) => GetMostSoldProductsResponse::Ok(Json(
                sales.into_iter().map(|s| s.into()).collect(),
            )),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetMostSoldProductsResponse::InternalError(json)
            }
        }
    }

    /// Revenue per product title
    ///
    /// Quantity times price summed over every cart, keyed by product title.
    #[oai(
        path = "/cart-products/revenue",
        method = "get",
        tag = "ApiTags::CartProducts"
    )]
    async fn get_revenue_per_product(&self) -> GetRevenuePerProductResponse {
        match self.get_revenue_use_case.execute().await {
            Ok(revenue) => GetRevenuePerProductResponse::Ok(Json(revenue)),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetRevenuePerProductResponse::InternalError(json)
            }
        }
    }

    /// Units across all carts
    #[oai(
        path = "/cart-products/total-items",
        method = "get",
        tag = "ApiTags::CartProducts"
    )]
    async fn get_total_items_in_carts(&self) -> GetTotalItemsResponse {
        match self.get_total_items_use_case.execute().await {
            Ok(total) => GetTotalItemsResponse::Ok(Json(TotalItemsResponse { total })),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetTotalItemsResponse::InternalError(json)
            }
        }
    }

    /// Carts holding a product
    #[oai(
        path = "/products/:product_id/carts",
        method = "get",
        tag = "ApiTags::CartProducts"
    )]
    async fn get_carts_containing_product(
        &self,
        product_id: Path<String>,
    ) -> GetCartsContainingProductResponse {
        let params = GetCartsContainingProductParams {
            product_id: ProductId::new(product_id.0),
        };

        match self.get_carts_containing_product_use_case.execute(params).await {
            Ok(carts) => GetCartsContainingProductResponse::Ok(Json(
                carts.into_iter().map(|c| c.to_string()).collect(),
            )),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetCartsContainingProductResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum AddProductToCartResponse {
    #[oai(status = 201)]
    Created(Json<CartProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteProductFromCartResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductsInCartResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<CartProductResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetMostSoldProductsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ProductSalesResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetRevenuePerProductResponse {
    #[oai(status = 200)]
    Ok(Json<BTreeMap<String, f64>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetTotalItemsResponse {
    #[oai(status = 200)]
    Ok(Json<TotalItemsResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetCartsContainingProductResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<String>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
