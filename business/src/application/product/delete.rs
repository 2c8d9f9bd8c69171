use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};

pub struct DeleteProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteProductUseCase for DeleteProductUseCaseImpl {
    async fn execute(&self, params: DeleteProductParams) -> Result<bool, ProductError> {
        self.logger.info(&format!("Deleting product: {}", params.id));

        let deleted = self.repository.delete(params.id).await?;

        if deleted {
            self.logger.info(&format!("Product deleted: {}", params.id));
        } else {
            self.logger.warn(&format!("Nothing to delete for product: {}", params.id));
        }
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::product::model::{NewProductProps, Product};
    use mockall::mock;

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

    #[tokio::test]
    async fn should_delete_product_when_exists() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_delete()
            .withf(|id| *id == 2)
            .times(1)
            .returning(|_| Ok(true));

        let use_case = DeleteProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(DeleteProductParams { id: 2 }).await;

        assert!(result.unwrap());
    }

    #[tokio::test]
    async fn should_report_false_when_deleting_nonexistent_product() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_delete().returning(|_| Ok(false));

        let use_case = DeleteProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(DeleteProductParams { id: 3 }).await;

        assert!(!result.unwrap());
    }

    #[tokio::test]
    async fn should_propagate_repository_error() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_delete()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let use_case = DeleteProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(DeleteProductParams { id: 2 }).await;

        assert!(matches!(result.unwrap_err(), ProductError::Repository(_)));
    }
}
