use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::shopping_cart::errors::ShoppingCartError;
use crate::domain::shopping_cart::model::ShoppingCart;
use crate::domain::shopping_cart::repository::ShoppingCartRepository;
use crate::domain::shopping_cart::use_cases::add_product::{
    AddProductToCartParams, AddProductToCartUseCase,
};

pub struct AddProductToCartUseCaseImpl {
    pub repository: Arc<dyn ShoppingCartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddProductToCartUseCase for AddProductToCartUseCaseImpl {
    async fn execute(
        &self,
        params: AddProductToCartParams,
    ) -> Result<ShoppingCart, ShoppingCartError> {
        self.logger.info(&format!(
            "Adding product {} to shopping cart {}",
            params.product_id, params.cart_id
        ));

        let cart = self
            .repository
            .add_product(params.cart_id, params.product_id)
            .await
            .inspect_err(|err| {
                self.logger.warn(&format!(
                    "Product {} not added to shopping cart {}: {}",
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
