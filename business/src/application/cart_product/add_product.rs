use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::repository::CartRepository;
use crate::domain::cart_product::errors::CartProductError;
use crate::domain::cart_product::model::{CartProduct, CartProductView};
use crate::domain::cart_product::repository::CartProductRepository;
use crate::domain::cart_product::use_cases::add_product::{
    AddProductToCartParams, AddProductToCartUseCase,
};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::repository::ProductRepository;

pub struct AddProductToCartUseCaseImpl {
    pub repository: Arc<dyn CartProductRepository>,
    pub cart_repository: Arc<dyn CartRepository>,
    pub product_repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddProductToCartUseCase for AddProductToCartUseCaseImpl {
    async fn execute(
        &self,
        params: AddProductToCartParams,
    ) -> Result<CartProductView, CartProductError> {
        self.logger.info(&format!(
            "Adding {} x product {} to cart {}",
            params.quantity, params.product_id, params.cart_id
        ));

        let item = CartProduct::new(params.cart_id, params.product_id, params.quantity)?;

        if !self.cart_repository.exists(&item.cart_id).await? {
            self.logger
                .warn(&format!("Cart not found: {}", item.cart_id));
            return Err(CartProductError::CartNotFound(item.cart_id));
        }

        let product = match self.product_repository.get_by_id(&item.product_id).await {
            Ok(product) => product,
            Err(RepositoryError::NotFound) => {
                self.logger
                    .warn(&format!("Product not found: {}", item.product_id));
                return Err(CartProductError::ProductNotFound(item.product_id));
            }
            Err(other) => return Err(other.into()),
        };

        // Single upsert: an existing line item gets the quantity added to it.
        let stored = match self.repository.add_quantity(&item).await {
            Ok(stored) => stored,
            // A foreign key broke after the lookups: the cart or the product was
            // deleted in between.
            Err(RepositoryError::NotFound) => {
                return Err(if self.cart_repository.exists(&item.cart_id).await? {
                    self.logger
                        .warn(&format!("Product {} removed while adding", item.product_id));
                    CartProductError::ProductNotFound(item.product_id)
                } else {
                    self.logger
                        .warn(&format!("Cart {} removed while adding", item.cart_id));
                    CartProductError::CartNotFound(item.cart_id)
                });
            }
            Err(RepositoryError::OutOfRange) => {
                self.logger.warn(&format!(
                    "Quantity of product {} in cart {} would overflow",
                    item.product_id, item.cart_id
                ));
                return Err(CartProductError::InvalidQuantity);
            }
            Err(other) => return Err(other.into()),
        };

        self.logger.info(&format!(
            "Cart {} now holds {} x product {}",
            stored.cart_id, stored.quantity, stored.product_id
        ));

        Ok(CartProductView {
            product_id: product.id,
            product_title: product.title,
            product_price: product.price,
            quantity: stored.quantity,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::value_objects::{CartId, ProductId};
    use crate::test_support::{
        InMemoryCartProductRepo, MockCartProductRepo, MockCartRepo, MockProductRepo, laptop,
        mock_logger,
    };
    use proptest::prelude::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn existing_cart() -> MockCartRepo {
        let mut cart_repo = MockCartRepo::new();
        cart_repo.expect_exists().returning(|_| Ok(true));
        cart_repo
    }

    fn catalogue_with_laptop() -> MockProductRepo {
        let mut product_repo = MockProductRepo::new();
        product_repo.expect_get_by_id().returning(|_| Ok(laptop()));
        product_repo
    }

    fn params(quantity: i32) -> AddProductToCartParams {
        AddProductToCartParams {
            cart_id: CartId::new("c1"),
            product_id: ProductId::new("p1"),
            quantity,
        }
    }

    fn use_case_over(repository: Arc<dyn CartProductRepository>) -> AddProductToCartUseCaseImpl {
        AddProductToCartUseCaseImpl {
            repository,
            cart_repository: Arc::new(existing_cart()),
            product_repository: Arc::new(catalogue_with_laptop()),
            logger: mock_logger(),
        }
    }

    #[tokio::test]
    async fn should_add_new_product_to_cart() {
        let mut mock_repo = MockCartProductRepo::new();
        mock_repo
            .expect_add_quantity()
            .times(1)
            .returning(|item| Ok(item.clone()));

        let use_case = use_case_over(Arc::new(mock_repo));

        let response = use_case.execute(params(2)).await.unwrap();

        assert_eq!(
            response,
            CartProductView {
                product_id: ProductId::new("p1"),
                product_title: "Laptop".to_string(),
                product_price: 1500.0,
                quantity: 2,
            }
        );
    }

    #[tokio::test]
    async fn should_increase_quantity_when_product_already_in_cart() {
        let repository = Arc::new(InMemoryCartProductRepo::new(vec![laptop()]));
        let use_case = use_case_over(repository.clone());

        let first = use_case.execute(params(2)).await.unwrap();
        let second = use_case.execute(params(3)).await.unwrap();

        assert_eq!(first.quantity, 2);
        assert_eq!(second.quantity, 5);
        assert_eq!(repository.line_count(), 1);
    }

    #[tokio::test]
    async fn should_return_cart_not_found_when_cart_missing() {
        let mut cart_repo = MockCartRepo::new();
        cart_repo.expect_exists().returning(|_| Ok(false));
        let mut mock_repo = MockCartProductRepo::new();
        mock_repo.expect_add_quantity().never();

        let use_case = AddProductToCartUseCaseImpl {
            repository: Arc::new(mock_repo),
            cart_repository: Arc::new(cart_repo),
            product_repository: Arc::new(catalogue_with_laptop()),
            logger: mock_logger(),
        };

        let result = use_case.execute(params(1)).await;

        assert!(matches!(
            result.unwrap_err(),
            CartProductError::CartNotFound(id) if id == CartId::new("c1")
        ));
    }

    #[tokio::test]
    async fn should_return_product_not_found_when_product_missing() {
        let mut product_repo = MockProductRepo::new();
        product_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));
        let mut mock_repo = MockCartProductRepo::new();
        mock_repo.expect_add_quantity().never();

        let use_case = AddProductToCartUseCaseImpl {
            repository: Arc::new(mock_repo),
            cart_repository: Arc::new(existing_cart()),
            product_repository: Arc::new(product_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params(1)).await;

        assert!(matches!(
            result.unwrap_err(),
            CartProductError::ProductNotFound(id) if id == ProductId::new("p1")
        ));
    }

    #[tokio::test]
    async fn should_reject_non_positive_quantity_before_touching_storage() {
        let mut cart_repo = MockCartRepo::new();
        cart_repo.expect_exists().never();
        let mut mock_repo = MockCartProductRepo::new();
        mock_repo.expect_add_quantity().never();

        let use_case = AddProductToCartUseCaseImpl {
            repository: Arc::new(mock_repo),
            cart_repository: Arc::new(cart_repo),
            product_repository: Arc::new(MockProductRepo::new()),
            logger: mock_logger(),
        };

        let result = use_case.execute(params(0)).await;

        assert!(matches!(result.unwrap_err(), CartProductError::InvalidQuantity));
    }

    #[tokio::test]
    async fn should_propagate_storage_failure() {
        let mut mock_repo = MockCartProductRepo::new();
        mock_repo
            .expect_add_quantity()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let use_case = use_case_over(Arc::new(mock_repo));

        let result = use_case.execute(params(1)).await;

        assert!(matches!(
            result.unwrap_err(),
            CartProductError::Repository(RepositoryError::DatabaseError)
        ));
    }

    #[tokio::test]
    async fn should_return_product_not_found_when_product_vanishes_before_upsert() {
        let mut mock_repo = MockCartProductRepo::new();
        mock_repo
            .expect_add_quantity()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = use_case_over(Arc::new(mock_repo));

        let result = use_case.execute(params(1)).await;

        assert!(matches!(
            result.unwrap_err(),
            CartProductError::ProductNotFound(id) if id == ProductId::new("p1")
        ));
    }

    #[tokio::test]
    async fn should_return_cart_not_found_when_cart_vanishes_before_upsert() {
        let calls = AtomicUsize::new(0);
        let mut cart_repo = MockCartRepo::new();
        cart_repo
            .expect_exists()
            .times(2)
            .returning(move |_| Ok(calls.fetch_add(1, Ordering::SeqCst) == 0));
        let mut mock_repo = MockCartProductRepo::new();
        mock_repo
            .expect_add_quantity()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = AddProductToCartUseCaseImpl {
            repository: Arc::new(mock_repo),
            cart_repository: Arc::new(cart_repo),
            product_repository: Arc::new(catalogue_with_laptop()),
            logger: mock_logger(),
        };

        let result = use_case.execute(params(1)).await;

        assert!(matches!(
            result.unwrap_err(),
            CartProductError::CartNotFound(id) if id == CartId::new("c1")
        ));
    }

    #[tokio::test]
    async fn should_reject_quantity_that_overflows_stored_total() {
        let mut mock_repo = MockCartProductRepo::new();
        mock_repo
            .expect_add_quantity()
            .returning(|_| Err(RepositoryError::OutOfRange));

        let use_case = use_case_over(Arc::new(mock_repo));

        let result = use_case.execute(params(i32::MAX)).await;

        assert!(matches!(result.unwrap_err(), CartProductError::InvalidQuantity));
    }

    proptest! {
        #[test]
        fn repeated_adds_accumulate_into_one_line_item(q1 in 1i32..10_000, q2 in 1i32..10_000) {
            let runtime = tokio::runtime::Runtime::new().unwrap();
            let repository = Arc::new(InMemoryCartProductRepo::new(vec![laptop()]));
            let use_case = use_case_over(repository.clone());

            let response = runtime.block_on(async {
                use_case.execute(params(q1)).await.unwrap();
                use_case.execute(params(q2)).await.unwrap()
            });

            prop_assert_eq!(response.quantity, q1 + q2);
            prop_assert_eq!(repository.line_count(), 1);
            prop_assert_eq!(repository.quantity_of("c1", "p1"), Some(q1 + q2));
        }
    }
}
