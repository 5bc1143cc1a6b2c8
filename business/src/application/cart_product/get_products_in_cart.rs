use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart_product::errors::CartProductError;
use crate::domain::cart_product::model::CartProductView;
use crate::domain::cart_product::repository::CartProductRepository;
use crate::domain::cart_product::use_cases::get_products_in_cart::{
    GetProductsInCartParams, GetProductsInCartUseCase,
};
use crate::domain::logger::Logger;

pub struct GetProductsInCartUseCaseImpl {
    pub repository: Arc<dyn CartProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductsInCartUseCase for GetProductsInCartUseCaseImpl {
    async fn execute(
        &self,
        params: GetProductsInCartParams,
    ) -> Result<Vec<CartProductView>, CartProductError> {
        self.logger
            .info(&format!("Fetching products in cart: {}", params.cart_id));

        let items = self.repository.find_by_cart_id(&params.cart_id).await?;

        self.logger.info(&format!(
            "Found {} line items in cart {}",
            items.len(),
            params.cart_id
        ));
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::value_objects::{CartId, ProductId};
    use crate::test_support::{MockCartProductRepo, mock_logger};
    use mockall::predicate::eq;

    #[tokio::test]
    async fn should_return_line_items_of_cart() {
        let mut mock_repo = MockCartProductRepo::new();
        mock_repo
            .expect_find_by_cart_id()
            .with(eq(CartId::new("c1")))
            .returning(|_| {
                Ok(vec![CartProductView {
                    product_id: ProductId::new("p1"),
                    product_title: "Laptop".to_string(),
                    product_price: 1500.0,
                    quantity: 2,
                }])
            });

        let use_case = GetProductsInCartUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let items = use_case
            .execute(GetProductsInCartParams {
                cart_id: CartId::new("c1"),
            })
            .await
            .unwrap();

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].product_id, ProductId::new("p1"));
        assert_eq!(items[0].quantity, 2);
    }

    #[tokio::test]
    async fn should_return_empty_list_for_empty_cart() {
        let mut mock_repo = MockCartProductRepo::new();
        mock_repo.expect_find_by_cart_id().returning(|_| Ok(vec![]));

        let use_case = GetProductsInCartUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let items = use_case
            .execute(GetProductsInCartParams {
                cart_id: CartId::new("empty"),
            })
            .await
            .unwrap();

        assert!(items.is_empty());
    }
}
