use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::{NewProductProps, Product};

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn get_by_id(&self, id: i32) -> Result<Option<Product>, RepositoryError>;
    /// Case-insensitive substring match against the product name.
    async fn find_by_name(&self, term: &str) -> Result<Vec<Product>, RepositoryError>;
    async fn insert(&self, props: &NewProductProps) -> Result<Product, RepositoryError>;
    /// Returns the row as stored, or `None` when no product has the given id.
    async fn update(&self, product: &Product) -> Result<Option<Product>, RepositoryError>;
    /// Returns false when no product has the given id.
    async fn delete(&self, id: i32) -> Result<bool, RepositoryError>;
}
