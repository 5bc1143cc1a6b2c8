use crate::domain::shared::value_objects::{CartId, ProductId};

/// Failures of the cart/product association operations. The not-found variants
/// carry the identifier that failed to resolve.
#[derive(Debug, thiserror::Error)]
pub enum CartProductError {
    #[error("cart.not_found")]
    CartNotFound(CartId),
    #[error("product.not_found")]
    ProductNotFound(ProductId),
    #[error("cart_product.invalid_quantity")]
    InvalidQuantity,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
