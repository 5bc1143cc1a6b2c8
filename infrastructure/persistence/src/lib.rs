pub mod db;
pub mod cart {
    pub mod entity;
    pub mod repository;
}
pub mod cart_product {
    pub mod entity;
    pub mod repository;
}
pub mod product {
    pub mod entity;
    pub mod repository;
}
