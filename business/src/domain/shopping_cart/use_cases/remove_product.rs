use async_trait::async_trait;

use crate::domain::shopping_cart::errors::ShoppingCartError;
use crate::domain::shopping_cart::model::ShoppingCart;

pub struct RemoveProductFromCartParams {
    pub cart_id: i32,
    pub product_id: i32,
}

#[async_trait]
pub trait RemoveProductFromCartUseCase: Send + Sync {
    async fn execute(
        &self,
        params: RemoveProductFromCartParams,
    ) -> Result<ShoppingCart, ShoppingCartError>;
}
