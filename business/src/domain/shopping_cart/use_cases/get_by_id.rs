use async_trait::async_trait;

use crate::domain::shopping_cart::errors::ShoppingCartError;
use crate::domain::shopping_cart::model::ShoppingCart;

pub struct GetShoppingCartParams {
    pub id: i32,
}

#[async_trait]
pub trait GetShoppingCartUseCase: Send + Sync {
    async fn execute(
        &self,
        params: GetShoppingCartParams,
    ) -> Result<Option<ShoppingCart>, ShoppingCartError>;
}
