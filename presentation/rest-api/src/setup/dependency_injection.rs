use std::sync::Arc;

use logger::TracingLogger;
use persistence::cart::repository::CartRepositoryPostgres;
use persistence::cart_product::repository::CartProductRepositoryPostgres;
use persistence::product::repository::ProductRepositoryPostgres;

use business::application::cart::create::CreateCartUseCaseImpl;
use business::application::cart::delete::DeleteCartUseCaseImpl;
use business::application::cart::get_by_id::GetCartByIdUseCaseImpl;
use business::application::cart_product::add_product::AddProductToCartUseCaseImpl;
use business::application::cart_product::delete_product::DeleteProductFromCartUseCaseImpl;
use business::application::cart_product::get_carts_containing_product::GetCartsContainingProductUseCaseImpl;
use business::application::cart_product::get_most_sold::GetMostSoldProductsUseCaseImpl;
use business::application::cart_product::get_most_sold_by_category::GetMostSoldProductsByCategoryUseCaseImpl;
use business::application::cart_product::get_products_in_cart::GetProductsInCartUseCaseImpl;
use business::application::cart_product::get_revenue_per_product::GetRevenuePerProductUseCaseImpl;
use business::application::cart_product::get_total_items::GetTotalItemsInCartsUseCaseImpl;
use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::delete::DeleteProductUseCaseImpl;
use business::application::product::get_all::GetAllProductsUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::application::product::update::UpdateProductUseCaseImpl;

use crate::api::cart::routes::CartApi;
use crate::api::cart_product::routes::CartProductApi;
use crate::api::health::routes::HealthApi;
use crate::api::product::routes::ProductApi;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub cart_api: CartApi,
    pub product_api: ProductApi,
    pub cart_product_api: CartProductApi,
}

impl DependencyContainer {
    pub fn new(pool: sqlx::PgPool) -> Self {
        let logger = Arc::new(TracingLogger);

        // Infrastructure adapters
        let cart_repository = Arc::new(CartRepositoryPostgres::new(pool.clone()));
        let product_repository = Arc::new(ProductRepositoryPostgres::new(pool.clone()));
        let cart_product_repository = Arc::new(CartProductRepositoryPostgres::new(pool));

        // Cart use cases
        let cart_api = CartApi::new(
            Arc::new(CreateCartUseCaseImpl {
                repository: cart_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(GetCartByIdUseCaseImpl {
                repository: cart_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(DeleteCartUseCaseImpl {
                repository: cart_repository.clone(),
                logger: logger.clone(),
            }),
        );

        // Product use cases
        let product_api = ProductApi::new(
            Arc::new(CreateProductUseCaseImpl {
                repository: product_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(GetAllProductsUseCaseImpl {
                repository: product_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(GetProductByIdUseCaseImpl {
                repository: product_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(UpdateProductUseCaseImpl {
                repository: product_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(DeleteProductUseCaseImpl {
                repository: product_repository.clone(),
                logger: logger.clone(),
            }),
        );

        // Cart line item use cases
        let cart_product_api = CartProductApi::new(
            Arc::new(AddProductToCartUseCaseImpl {
                repository: cart_product_repository.clone(),
                cart_repository: cart_repository.clone(),
                product_repository,
                logger: logger.clone(),
            }),
            Arc::new(DeleteProductFromCartUseCaseImpl {
                repository: cart_product_repository.clone(),
                cart_repository,
                logger: logger.clone(),
            }),
            Arc::new(GetProductsInCartUseCaseImpl {
                repository: cart_product_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(GetMostSoldProductsUseCaseImpl {
                repository: cart_product_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(GetMostSoldProductsByCategoryUseCaseImpl {
                repository: cart_product_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(GetRevenuePerProductUseCaseImpl {
                repository: cart_product_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(GetTotalItemsInCartsUseCaseImpl {
                repository: cart_product_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(GetCartsContainingProductUseCaseImpl {
                repository: cart_product_repository,
                logger,
            }),
        );

        Self {
            health_api: HealthApi,
            cart_api,
            product_api,
            cart_product_api,
        }
    }
}
