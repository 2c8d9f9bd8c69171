use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::shopping_cart::errors::ShoppingCartError;
use crate::domain::shopping_cart::model::ShoppingCart;
use crate::domain::shopping_cart::repository::ShoppingCartRepository;
use crate::domain::shopping_cart::use_cases::get_by_id::{
    GetShoppingCartParams, GetShoppingCartUseCase,
};

pub struct GetShoppingCartUseCaseImpl {
    pub repository: Arc<dyn ShoppingCartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetShoppingCartUseCase for GetShoppingCartUseCaseImpl {
    async fn execute(
        &self,
        params: GetShoppingCartParams,
    ) -> Result<Option<ShoppingCart>, ShoppingCartError> {
        self.logger.info(&format!("Fetching shopping cart: {}", params.id));
        Ok(self.repository.get_by_id(params.id).await?)
    }
}
