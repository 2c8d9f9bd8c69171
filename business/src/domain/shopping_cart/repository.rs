use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::errors::ShoppingCartError;
use super::model::ShoppingCart;

#[async_trait]
pub trait ShoppingCartRepository: Send + Sync {
    async fn create(&self) -> Result<ShoppingCart, RepositoryError>;
    async fn get_by_id(&self, id: i32) -> Result<Option<ShoppingCart>, RepositoryError>;
    /// Adds the product while holding the cart exclusively, so concurrent
    /// changes to the same cart are applied one after the other. Returns the
    /// cart as stored after the change.
    ///
    /// Rejections use the cart's own errors: `NotFound`, `ProductNotFound`
    /// or `ProductAlreadyInCart`.
    async fn add_product(
        &self,
        cart_id: i32,
        product_id: i32,
    ) -> Result<ShoppingCart, ShoppingCartError>;
    /// Removes the product under the same exclusive hold as `add_product`.
    /// Rejects with `NotFound` or `ProductNotInCart`.
    async fn remove_product(
        &self,
        cart_id: i32,
        product_id: i32,
    ) -> Result<ShoppingCart, ShoppingCartError>;
}
