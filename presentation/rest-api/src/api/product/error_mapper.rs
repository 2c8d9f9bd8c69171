use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::product::errors::ProductError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let message = self.to_string();
        let (status, name) = match &self {
            err if err.is_validation() => (StatusCode::BAD_REQUEST, "ValidationError"),
            ProductError::NotFound => (StatusCode::NOT_FOUND, "NotFound"),
            _ => (StatusCode::BAD_REQUEST, "InfrastructureError"),
        };

        (status, Json(ErrorResponse::new(name, &message)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::errors::RepositoryError;

    #[test]
    fn should_map_validation_error_to_bad_request() {
        let (status, json) = ProductError::NameTooLong.into_error_response();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json.0.name, "ValidationError");
        assert_eq!(json.0.message, "product.name_too_long");
    }

    #[test]
    fn should_map_every_field_error_to_validation_error() {
        let errors = [
            ProductError::NameEmpty,
            ProductError::DescriptionTooLong,
            ProductError::ImageUrlEmpty,
            ProductError::NegativePrice,
            ProductError::InvalidPrice,
            ProductError::NegativeQuantity,
        ];

        for error in errors {
            let (status, json) = error.into_error_response();
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(json.0.name, "ValidationError");
        }
    }

    #[test]
    fn should_map_not_found_to_404() {
        let (status, json) = ProductError::NotFound.into_error_response();

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json.0.message, "product.not_found");
    }

    #[test]
    fn should_surface_repository_error_code_as_message() {
        let (status, json) =
            ProductError::Repository(RepositoryError::DatabaseError).into_error_response();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json.0.name, "InfrastructureError");
        assert_eq!(json.0.message, "repository.database_error");
    }
}
