use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::delete::{DeleteCartParams, DeleteCartUseCase};
use crate::domain::logger::Logger;

pub struct DeleteCartUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteCartUseCase for DeleteCartUseCaseImpl {
    async fn execute(&self, params: DeleteCartParams) -> Result<(), CartError> {
        self.logger.info(&format!("Deleting cart: {}", params.id));

        if !self.repository.exists(&params.id).await? {
            return Err(CartError::NotFound);
        }

        // Line items go with the cart.
        self.repository.delete(&params.id).await?;

        self.logger.info(&format!("Cart deleted: {}", params.id));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::value_objects::CartId;
    use crate::test_support::{MockCartRepo, mock_logger};

    #[tokio::test]
    async fn should_delete_existing_cart() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo.expect_exists().returning(|_| Ok(true));
        mock_repo.expect_delete().times(1).returning(|_| Ok(()));

        let use_case = DeleteCartUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteCartParams {
                id: CartId::new("c1"),
            })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_return_not_found_without_deleting_when_cart_missing() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo.expect_exists().returning(|_| Ok(false));
        mock_repo.expect_delete().never();

        let use_case = DeleteCartUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteCartParams {
                id: CartId::new("missing"),
            })
            .await;

        assert!(matches!(result.unwrap_err(), CartError::NotFound));
    }
}
