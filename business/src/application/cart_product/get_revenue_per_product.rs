use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart_product::errors::CartProductError;
use crate::domain::cart_product::model::revenue_by_title;
use crate::domain::cart_product::repository::CartProductRepository;
use crate::domain::cart_product::use_cases::get_revenue_per_product::GetRevenuePerProductUseCase;
use crate::domain::logger::Logger;

pub struct GetRevenuePerProductUseCaseImpl {
    pub repository: Arc<dyn CartProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetRevenuePerProductUseCase for GetRevenuePerProductUseCaseImpl {
    async fn execute(&self) -> Result<BTreeMap<String, f64>, CartProductError> {
        self.logger.info("Computing revenue per product");

        let rows = self.repository.find_revenue_per_product().await?;
        let revenue = revenue_by_title(rows);

        self.logger
            .debug(&format!("Revenue computed for {} titles", revenue.len()));
        Ok(revenue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart_product::model::{CartProduct, ProductRevenue};
    use crate::domain::shared::value_objects::{CartId, ProductId};
    use crate::test_support::{InMemoryCartProductRepo, MockCartProductRepo, laptop, mock_logger};

    #[tokio::test]
    async fn should_return_revenue_map() {
        let mut mock_repo = MockCartProductRepo::new();
        mock_repo.expect_find_revenue_per_product().returning(|| {
            Ok(vec![ProductRevenue {
                title: "Laptop".to_string(),
                revenue: 3000.0,
            }])
        });

        let use_case = GetRevenuePerProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let revenue = use_case.execute().await.unwrap();

        assert_eq!(revenue.len(), 1);
        assert_eq!(revenue.get("Laptop"), Some(&3000.0));
    }

    #[tokio::test]
    async fn should_multiply_quantity_by_price() {
        let repository = Arc::new(InMemoryCartProductRepo::new(vec![laptop()]));
        let item = CartProduct::new(CartId::new("c1"), ProductId::new("p1"), 2).unwrap();
        repository.add_quantity(&item).await.unwrap();

        let use_case = GetRevenuePerProductUseCaseImpl {
            repository,
            logger: mock_logger(),
        };

        let revenue = use_case.execute().await.unwrap();

        assert_eq!(revenue.get("Laptop"), Some(&3000.0));
    }

    #[tokio::test]
    async fn should_return_empty_map_when_nothing_in_carts() {
        let mut mock_repo = MockCartProductRepo::new();
        mock_repo
            .expect_find_revenue_per_product()
            .returning(|| Ok(vec![]));

        let use_case = GetRevenuePerProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let revenue = use_case.execute().await.unwrap();

        assert!(revenue.is_empty());
    }
}
