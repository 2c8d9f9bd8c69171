use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::shopping_cart::errors::ShoppingCartError;
use crate::domain::shopping_cart::model::ShoppingCart;
use crate::domain::shopping_cart::repository::ShoppingCartRepository;
use crate::domain::shopping_cart::use_cases::create::CreateShoppingCartUseCase;

pub struct CreateShoppingCartUseCaseImpl {
    pub repository: Arc<dyn ShoppingCartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateShoppingCartUseCase for CreateShoppingCartUseCaseImpl {
    async fn execute(&self) -> Result<ShoppingCart, ShoppingCartError> {
        self.logger.info("Creating shopping cart");
        let cart = self.repository.create().await?;
        self.logger.info(&format!("Shopping cart created with id: {}", cart.id()));
        Ok(cart)
    }
}
