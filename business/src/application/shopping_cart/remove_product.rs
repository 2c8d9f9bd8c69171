use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::shopping_cart::errors::ShoppingCartError;
use crate::domain::shopping_cart::model::ShoppingCart;
use crate::domain::shopping_cart::repository::ShoppingCartRepository;
use crate::domain::shopping_cart::use_cases::remove_product::{
    RemoveProductFromCartParams, RemoveProductFromCartUseCase,
};

pub struct RemoveProductFromCartUseCaseImpl {
    pub repository: Arc<dyn ShoppingCartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RemoveProductFromCartUseCase for RemoveProductFromCartUseCaseImpl {
    async fn execute(
        &self,
        params: RemoveProductFromCartParams,
    ) -> Result<ShoppingCart, ShoppingCartError> {
        self.logger.info(&format!(
            "Removing product {} from shopping cart {}",
            params.product_id, params.cart_id
        ));

        let cart = self
            .repository
            .remove_product(params.cart_id, params.product_id)
            .await
            .inspect_err(|err| {
                self.logger.warn(&format!(
                    "Product {} not removed from shopping cart {}: {}",
                    params.product_id, params.cart_id, err
                ))
            })?;

        self.logger.info(&format!(
            "Shopping cart {} total is now {}",
            cart.id(),
            cart.total_cost()
        ));
        Ok(cart)
    }
}
