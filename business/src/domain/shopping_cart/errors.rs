#[derive(Debug, thiserror::Error)]
pub enum ShoppingCartError {
    #[error("shopping_cart.not_found")]
    NotFound,
    #[error("shopping_cart.product_not_found")]
    ProductNotFound,
    #[error("shopping_cart.product_already_in_cart")]
    ProductAlreadyInCart,
    #[error("shopping_cart.product_not_in_cart")]
    ProductNotInCart,
    #[error(transparent)]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
