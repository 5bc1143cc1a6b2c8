use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::CartId;

use super::model::Cart;

#[async_trait]
pub trait CartRepository: Send + Sync {
    async fn get_by_id(&self, id: &CartId) -> Result<Cart, RepositoryError>;
    async fn exists(&self, id: &CartId) -> Result<bool, RepositoryError>;
    async fn save(&self, cart: &Cart) -> Result<(), RepositoryError>;
    /// Removes the cart and, through the relation's cascade, all of its line items.
    async fn delete(&self, id: &CartId) -> Result<(), RepositoryError>;
}
