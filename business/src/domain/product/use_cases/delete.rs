use async_trait::async_trait;

use crate::domain::product::errors::ProductError;

pub struct DeleteProductParams {
    pub id: i32,
}

#[async_trait]
pub trait DeleteProductUseCase: Send + Sync {
    /// Returns false when there was no product to delete.
    async fn execute(&self, params: DeleteProductParams) -> Result<bool, ProductError>;
}
