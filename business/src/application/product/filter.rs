use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::filter::{FilterProductsParams, FilterProductsUseCase};

pub struct FilterProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl FilterProductsUseCase for FilterProductsUseCaseImpl {
    async fn execute(&self, params: FilterProductsParams) -> Result<Vec<Product>, ProductError> {
        self.logger.info(&format!("Filtering products by name: {}", params.name));

        let products = self.repository.find_by_name(params.name.trim()).await?;

        self.logger.info(&format!(
            "Found {} products matching: {}",
            products.len(),
            params.name
        ));
        Ok(products)
    }
}
