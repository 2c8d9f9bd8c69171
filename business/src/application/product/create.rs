use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{NewProductProps, Product};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};

pub struct CreateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError> {
        self.logger.info(&format!("Creating product: {}", params.name));

        let props = NewProductProps {
            name: params.name,
            price: params.price,
            description: params.description,
            quantity: params.quantity,
            image_url: params.image_url,
        };
        if let Err(err) = props.validate() {
            self.logger.warn(&format!("Rejected product creation: {}", err));
            return Err(err);
        }

        let product = self.repository.insert(&props).await?;

        self.logger.info(&format!("Product created with id: {}", product.id));
        Ok(product)
    }
}
