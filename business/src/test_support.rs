//! Mock ports shared by the use case tests.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use mockall::mock;

use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart_product::model::{
    CartProduct, CartProductView, ProductRevenue, ProductSales,
};
use crate::domain::cart_product::repository::CartProductRepository;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::shared::value_objects::{CartId, ProductId};

mock! {
    pub CartRepo {}

    #[async_trait]
    impl CartRepository for CartRepo {
        async fn get_by_id(&self, id: &CartId) -> Result<Cart, RepositoryError>;
        async fn exists(&self, id: &CartId) -> Result<bool, RepositoryError>;
        async fn save(&self, cart: &Cart) -> Result<(), RepositoryError>;
        async fn delete(&self, id: &CartId) -> Result<(), RepositoryError>;
    }
}

mock! {
    pub ProductRepo {}

    #[async_trait]
    impl ProductRepository for ProductRepo {
        async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
        async fn get_by_id(&self, id: &ProductId) -> Result<Product, RepositoryError>;
        async fn save(&self, product: &Product) -> Result<(), RepositoryError>;
        async fn delete(&self, id: &ProductId) -> Result<(), RepositoryError>;
    }
}

mock! {
    pub CartProductRepo {}

    #[async_trait]
    impl CartProductRepository for CartProductRepo {
        async fn find_by_cart_id(&self, cart_id: &CartId) -> Result<Vec<CartProductView>, RepositoryError>;
        async fn add_quantity(&self, item: &CartProduct) -> Result<CartProduct, RepositoryError>;
        async fn delete(&self, cart_id: &CartId, product_id: &ProductId) -> Result<bool, RepositoryError>;
        async fn find_most_sold_products(&self, category: Option<String>) -> Result<Vec<ProductSales>, RepositoryError>;
        async fn find_revenue_per_product(&self) -> Result<Vec<ProductRevenue>, RepositoryError>;
        async fn count_total_items(&self) -> Result<Option<i64>, RepositoryError>;
        async fn find_carts_by_product_id(&self, product_id: &ProductId) -> Result<Vec<CartId>, RepositoryError>;
    }
}

mock! {
    pub Log {}

    impl Logger for Log {
        fn info(&self, message: &str);
        fn warn(&self, message: &str);
        fn error(&self, message: &str);
        fn debug(&self, message: &str);
    }
}

pub fn mock_logger() -> Arc<dyn Logger> {
    let mut logger = MockLog::new();
    logger.expect_info().returning(|_| ());
    logger.expect_warn().returning(|_| ());
    logger.expect_error().returning(|_| ());
    logger.expect_debug().returning(|_| ());
    Arc::new(logger)
}

pub fn laptop() -> Product {
    let now = Utc::now();
    Product::from_repository(
        ProductId::new("p1"),
        "Laptop".to_string(),
        1500.0,
        Some("electronics".to_string()),
        now,
        now,
    )
}

/// In-memory line-item relation keyed by `(cart_id, product_id)`, joined
/// against a fixed product catalogue.
pub struct InMemoryCartProductRepo {
    catalogue: Vec<Product>,
    items: std::sync::Mutex<std::collections::BTreeMap<(CartId, ProductId), i32>>,
}

impl InMemoryCartProductRepo {
    pub fn new(catalogue: Vec<Product>) -> Self {
        Self {
            catalogue,
            items: std::sync::Mutex::new(std::collections::BTreeMap::new()),
        }
    }

    pub fn quantity_of(&self, cart_id: &str, product_id: &str) -> Option<i32> {
        let items = self.items.lock().unwrap();
        items
            .get(&(CartId::new(cart_id), ProductId::new(product_id)))
            .copied()
    }

    pub fn line_count(&self) -> usize {
        self.items.lock().unwrap().len()
    }

    fn product(&self, id: &ProductId) -> Option<&Product> {
        self.catalogue.iter().find(|p| &p.id == id)
    }
}

#[async_trait]
impl CartProductRepository for InMemoryCartProductRepo {
    async fn find_by_cart_id(
        &self,
        cart_id: &CartId,
    ) -> Result<Vec<CartProductView>, RepositoryError> {
        let items = self.items.lock().unwrap();
        Ok(items
            .iter()
            .filter(|((c, _), _)| c == cart_id)
            .filter_map(|((_, p), quantity)| {
                self.product(p).map(|product| CartProductView {
                    product_id: product.id.clone(),
                    product_title: product.title.clone(),
                    product_price: product.price,
                    quantity: *quantity,
                })
            })
            .collect())
    }

    async fn add_quantity(&self, item: &CartProduct) -> Result<CartProduct, RepositoryError> {
        if self.product(&item.product_id).is_none() {
            return Err(RepositoryError::NotFound);
        }
        let mut items = self.items.lock().unwrap();
        let quantity = items
            .entry((item.cart_id.clone(), item.product_id.clone()))
            .or_insert(0);
        *quantity += item.quantity;
        Ok(CartProduct::from_repository(
            item.cart_id.clone(),
            item.product_id.clone(),
            Some(*quantity),
        ))
    }

    async fn delete(
        &self,
        cart_id: &CartId,
        product_id: &ProductId,
    ) -> Result<bool, RepositoryError> {
        let mut items = self.items.lock().unwrap();
        Ok(items
            .remove(&(cart_id.clone(), product_id.clone()))
            .is_some())
    }

    async fn find_most_sold_products(
        &self,
        category: Option<String>,
    ) -> Result<Vec<ProductSales>, RepositoryError> {
        let items = self.items.lock().unwrap();
        let mut totals: std::collections::BTreeMap<ProductId, i64> =
            std::collections::BTreeMap::new();
        for ((_, product_id), quantity) in items.iter() {
            *totals.entry(product_id.clone()).or_insert(0) += i64::from(*quantity);
        }
        let mut sales: Vec<ProductSales> = totals
            .into_iter()
            .filter_map(|(product_id, total_sold)| {
                let product = self.product(&product_id)?;
                if category.is_some() && product.category != category {
                    return None;
                }
                Some(ProductSales {
                    product_id,
                    title: product.title.clone(),
                    total_sold,
                })
            })
            .collect();
        sales.sort_by(|a, b| {
            b.total_sold
                .cmp(&a.total_sold)
                .then_with(|| a.product_id.cmp(&b.product_id))
        });
        Ok(sales)
    }

    async fn find_revenue_per_product(&self) -> Result<Vec<ProductRevenue>, RepositoryError> {
        let items = self.items.lock().unwrap();
        Ok(items
            .iter()
            .filter_map(|((_, product_id), quantity)| {
                self.product(product_id).map(|product| ProductRevenue {
                    title: product.title.clone(),
                    revenue: f64::from(*quantity) * product.price,
                })
            })
            .collect())
    }

    async fn count_total_items(&self) -> Result<Option<i64>, RepositoryError> {
        let items = self.items.lock().unwrap();
        if items.is_empty() {
            return Ok(None);
        }
        Ok(Some(items.values().map(|q| i64::from(*q)).sum()))
    }

    async fn find_carts_by_product_id(
        &self,
        product_id: &ProductId,
    ) -> Result<Vec<CartId>, RepositoryError> {
        let items = self.items.lock().unwrap();
        let mut carts: Vec<CartId> = items
            .keys()
            .filter(|(_, p)| p == product_id)
            .map(|(c, _)| c.clone())
            .collect();
        carts.dedup();
        Ok(carts)
    }
}
