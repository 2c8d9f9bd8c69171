use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{NewProductProps, Product};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError> {
        self.logger.info(&format!("Updating product: {}", params.id));

        let props = NewProductProps {
            name: params.name,
            price: params.price,
            description: params.description,
            quantity: params.quantity,
            image_url: params.image_url,
        };
        if let Err(err) = props.validate() {
            self.logger
                .warn(&format!("Product {} update rejected: {}", params.id, err));
            return Err(err);
        }

        let mut product = self
            .repository
            .get_by_id(params.id)
            .await?
            .ok_or(ProductError::NotFound)?;
        product.replace_details(props)?;

        // The row can disappear between the read and the write.
        let stored = self
            .repository
            .update(&product)
            .await?
            .ok_or(ProductError::NotFound)?;

        self.logger.info(&format!("Product updated: {}", stored.id));
        Ok(stored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use bigdecimal::BigDecimal;
    use mockall::mock;
    use std::str::FromStr;

    mock! {
        pub ProductRepo {}

        #[async_trait]
        impl ProductRepository for ProductRepo {
            async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
            async fn get_by_id(&self, id: i32) -> Result<Option<Product>, RepositoryError>;
            async fn find_by_name(&self, term: &str) -> Result<Vec<Product>, RepositoryError>;
            async fn insert(&self, props: &NewProductProps) -> Result<Product, RepositoryError>;
            async fn update(&self, product: &Product) -> Result<Option<Product>, RepositoryError>;
            async fn delete(&self, id: i32) -> Result<bool, RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn existing(id: i32) -> Product {
        Product::from_repository(
            id,
            NewProductProps {
                name: "pro".to_string(),
                price: BigDecimal::from(500),
                description: "pro".to_string(),
                quantity: 100,
                image_url: "Test".to_string(),
            },
        )
    }

    fn params(name: &str) -> UpdateProductParams {
        UpdateProductParams {
            id: 1,
            name: name.to_string(),
            price: BigDecimal::from(500),
            description: "pro".to_string(),
            quantity: 100,
            image_url: "Test".to_string(),
        }
    }

    #[tokio::test]
    async fn should_replace_fields_of_existing_product() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|id| Ok(Some(existing(id))));
        mock_repo
            .expect_update()
            .withf(|product| product.id == 1 && product.name == "pro updated")
            .times(1)
            .returning(|product| Ok(Some(product.clone())));

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let product = use_case.execute(params("pro updated")).await.unwrap();

        assert_eq!(product.id, 1);
        assert_eq!(product.name, "pro updated");
    }

    #[tokio::test]
    async fn should_return_not_found_when_product_missing() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_get_by_id().returning(|_| Ok(None));
        mock_repo.expect_update().never();

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("pro updated")).await;

        assert!(matches!(result.unwrap_err(), ProductError::NotFound));
    }

    #[tokio::test]
    async fn should_return_not_found_when_row_vanishes_before_write() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|id| Ok(Some(existing(id))));
        mock_repo.expect_update().returning(|_| Ok(None));

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("pro updated")).await;

        assert!(matches!(result.unwrap_err(), ProductError::NotFound));
    }

    #[tokio::test]
    async fn should_reject_invalid_input_before_touching_repository() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_get_by_id().never();
        mock_repo.expect_update().never();

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("  ")).await;

        assert!(matches!(result.unwrap_err(), ProductError::NameEmpty));
    }

    #[tokio::test]
    async fn should_report_validation_error_over_missing_product() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_get_by_id().returning(|_| Ok(None));
        mock_repo.expect_update().never();

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let mut invalid = params("pro updated");
        invalid.price = BigDecimal::from_str("19.999").unwrap();
        let result = use_case.execute(invalid).await;

        assert!(matches!(result.unwrap_err(), ProductError::InvalidPrice));
    }

    #[tokio::test]
    async fn should_return_row_as_stored() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|id| Ok(Some(existing(id))));
        mock_repo.expect_update().returning(|product| {
            let mut stored = product.clone();
            stored.price = BigDecimal::from_str("19.90").unwrap();
            Ok(Some(stored))
        });

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let mut input = params("pro updated");
        input.price = BigDecimal::from_str("19.9").unwrap();
        let product = use_case.execute(input).await.unwrap();

        assert_eq!(product.price, BigDecimal::from_str("19.90").unwrap());
    }
}
