pub mod db;
pub mod product {
    pub mod entity;
    pub mod repository;
}
pub mod shopping_cart {
    pub mod repository;
}
