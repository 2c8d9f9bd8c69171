use async_trait::async_trait;

use crate::domain::shopping_cart::errors::ShoppingCartError;
use crate::domain::shopping_cart::model::ShoppingCart;

#[async_trait]
pub trait CreateShoppingCartUseCase: Send + Sync {
    async fn execute(&self) -> Result<ShoppingCart, ShoppingCartError>;
}
