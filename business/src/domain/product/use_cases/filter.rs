use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;

pub struct FilterProductsParams {
    pub name: String,
}

#[async_trait]
pub trait FilterProductsUseCase: Send + Sync {
    async fn execute(&self, params: FilterProductsParams) -> Result<Vec<Product>, ProductError>;
}
