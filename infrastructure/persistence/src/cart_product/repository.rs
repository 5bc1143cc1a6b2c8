use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::cart_product::model::{
    CartProduct, CartProductView, ProductRevenue, ProductSales,
};
use business::domain::cart_product::repository::CartProductRepository;
use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::{CartId, ProductId};

use super::entity::{
    CartProductEntity, CartProductViewEntity, ProductRevenueEntity, ProductSalesEntity,
};
use crate::db::map_sqlx_error;

pub struct CartProductRepositoryPostgres {
    pool: PgPool,
}

impl CartProductRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CartProductRepository for CartProductRepositoryPostgres {
    async fn find_by_cart_id(
        &self,
        cart_id: &CartId,
    ) -> Result<Vec<CartProductView>, RepositoryError> {
        let entities = sqlx::query_as::<_, CartProductViewEntity>(
            r#"SELECT p.id AS product_id,
                   p.title AS product_title,
                   p.price AS product_price,
                   cp.quantity AS quantity
            FROM cart_products cp
            JOIN products p ON p.id = cp.product_id
            WHERE cp.cart_id = $1
            ORDER BY p.id"#,
        )
        .bind(cart_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn add_quantity(&self, item: &CartProduct) -> Result<CartProduct, RepositoryError> {
        let entity = sqlx::query_as::<_, CartProductEntity>(
            r#"INSERT INTO cart_products (cart_id, product_id, quantity)
            VALUES ($1, $2, $3)
            ON CONFLICT (cart_id, product_id) DO UPDATE SET
                quantity = COALESCE(cart_products.quantity, 0) + EXCLUDED.quantity
            RETURNING cart_id, product_id, quantity"#,
        )
        .bind(item.cart_id.as_str())
        .bind(item.product_id.as_str())
        .bind(item.quantity)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(entity.into_domain())
    }

    async fn delete(
        &self,
        cart_id: &CartId,
        product_id: &ProductId,
    ) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM cart_products WHERE cart_id = $1 AND product_id = $2")
            .bind(cart_id.as_str())
            .bind(product_id.as_str())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.rows_affected() > 0)
    }

    async fn find_most_sold_products(
        &self,
        category: Option<String>,
    ) -> Result<Vec<ProductSales>, RepositoryError> {
        let entities = sqlx::query_as::<_, ProductSalesEntity>(
            r#"SELECT p.id AS product_id,
                   p.title AS title,
                   COALESCE(SUM(cp.quantity), 0)::BIGINT AS total_sold
            FROM cart_products cp
            JOIN products p ON p.id = cp.product_id
            WHERE ($1::TEXT IS NULL OR p.category = $1)
            GROUP BY p.id, p.title
            ORDER BY total_sold DESC, p.id ASC"#,
        )
        .bind(category)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn find_revenue_per_product(&self) -> Result<Vec<ProductRevenue>, RepositoryError> {
        // Grouped by title: products sharing a title are reported together.
        let entities = sqlx::query_as::<_, ProductRevenueEntity>(
            r#"SELECT p.title AS title,
                   SUM(COALESCE(cp.quantity, 0) * p.price) AS revenue
            FROM cart_products cp
            JOIN products p ON p.id = cp.product_id
            GROUP BY p.title
            ORDER BY p.title"#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn count_total_items(&self) -> Result<Option<i64>, RepositoryError> {
        sqlx::query_scalar::<_, Option<i64>>("SELECT SUM(quantity)::BIGINT FROM cart_products")
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error)
    }

    async fn find_carts_by_product_id(
        &self,
        product_id: &ProductId,
    ) -> Result<Vec<CartId>, RepositoryError> {
        let cart_ids = sqlx::query_scalar::<_, String>(
            "SELECT DISTINCT cart_id FROM cart_products WHERE product_id = $1 ORDER BY cart_id",
        )
        .bind(product_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(cart_ids.into_iter().map(CartId::new).collect())
    }
}
