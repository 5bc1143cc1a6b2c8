use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{NewProductProps, Product};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};

pub struct CreateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Creating product: {}", params.title));

        let product = Product::new(NewProductProps {
            title: params.title,
            price: params.price,
            category: params.category,
        })?;

        self.repository
            .save(&product)
            .await
            .map_err(|e| match e {
                RepositoryError::OutOfRange => ProductError::InvalidPrice,
                other => ProductError::Repository(other),
            })?;

        self.logger
            .info(&format!("Product created with id: {}", product.id));
        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{MockProductRepo, mock_logger};

    #[tokio::test]
    async fn should_create_product_when_valid() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_save().times(1).returning(|_| Ok(()));

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateProductParams {
                title: "Laptop".to_string(),
                price: 1500.0,
                category: Some("electronics".to_string()),
            })
            .await;

        let product = result.unwrap();
        assert_eq!(product.title, "Laptop");
        assert_eq!(product.price, 1500.0);
    }

    #[tokio::test]
    async fn should_reject_product_when_title_is_empty() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_save().never();

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateProductParams {
                title: "".to_string(),
                price: 10.0,
                category: None,
            })
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::TitleEmpty));
    }

    #[tokio::test]
    async fn should_reject_product_when_price_negative() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_save().never();

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateProductParams {
                title: "Mouse".to_string(),
                price: -1.0,
                category: None,
            })
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::InvalidPrice));
    }

    #[tokio::test]
    async fn should_report_invalid_price_when_storage_rejects_its_range() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_save()
            .returning(|_| Err(RepositoryError::OutOfRange));

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateProductParams {
                title: "Server rack".to_string(),
                price: 9_999_999_999.99,
                category: None,
            })
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::InvalidPrice));
    }
}
