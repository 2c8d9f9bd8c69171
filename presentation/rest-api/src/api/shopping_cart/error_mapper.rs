use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::shopping_cart::errors::ShoppingCartError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ShoppingCartError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let message = self.to_string();
        let (status, name) = match &self {
            ShoppingCartError::NotFound
            | ShoppingCartError::ProductNotFound
            | ShoppingCartError::ProductNotInCart => (StatusCode::NOT_FOUND, "NotFound"),
            ShoppingCartError::ProductAlreadyInCart => (StatusCode::CONFLICT, "Conflict"),
            ShoppingCartError::Repository(_) => (StatusCode::BAD_REQUEST, "InfrastructureError"),
        };

        (status, Json(ErrorResponse::new(name, &message)))
    }
}
