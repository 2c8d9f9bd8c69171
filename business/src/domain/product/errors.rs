#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.name_empty")]
    NameEmpty,
    #[error("product.name_too_long")]
    NameTooLong,
    #[error("product.description_empty")]
    DescriptionEmpty,
    #[error("product.description_too_long")]
    DescriptionTooLong,
    #[error("product.image_url_empty")]
    ImageUrlEmpty,
    #[error("product.image_url_too_long")]
    ImageUrlTooLong,
    #[error("product.negative_price")]
    NegativePrice,
    #[error("product.invalid_price")]
    InvalidPrice,
    #[error("product.negative_quantity")]
    NegativeQuantity,
    #[error("product.not_found")]
    NotFound,
    #[error(transparent)]
    Repository(#[from] crate::domain::errors::RepositoryError),
}

impl ProductError {
    /// True for errors raised by field validation, before any repository call.
    pub fn is_validation(&self) -> bool {
        !matches!(self, ProductError::NotFound | ProductError::Repository(_))
    }
}
