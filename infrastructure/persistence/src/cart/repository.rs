use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::cart::model::Cart;
use business::domain::cart::repository::CartRepository;
use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::CartId;

use super::entity::CartEntity;
use crate::db::map_sqlx_error;

pub struct CartRepositoryPostgres {
    pool: PgPool,
}

impl CartRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CartRepository for CartRepositoryPostgres {
    async fn get_by_id(&self, id: &CartId) -> Result<Cart, RepositoryError> {
        let entity = sqlx::query_as::<_, CartEntity>(
            "SELECT id, created_at, updated_at FROM carts WHERE id = $1",
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn exists(&self, id: &CartId) -> Result<bool, RepositoryError> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM carts WHERE id = $1)")
            .bind(id.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error)
    }

    async fn save(&self, cart: &Cart) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO carts (id, created_at, updated_at)
            VALUES ($1, $2, $3)
            ON CONFLICT (id) DO UPDATE SET
                updated_at = EXCLUDED.updated_at"#,
        )
        .bind(cart.id.as_str())
        .bind(cart.created_at)
        .bind(cart.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(())
    }

    async fn delete(&self, id: &CartId) -> Result<(), RepositoryError> {
        // cart_products rows are removed by ON DELETE CASCADE
        sqlx::query("DELETE FROM carts WHERE id = $1")
            .bind(id.as_str())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(())
    }
}
