use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::cart_product::errors::CartProductError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for CartProductError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            CartProductError::CartNotFound(_) => {
                (StatusCode::NOT_FOUND, "NotFound", "cart.not_found")
            }
            CartProductError::ProductNotFound(_) => {
                (StatusCode::NOT_FOUND, "NotFound", "product.not_found")
            }
            CartProductError::InvalidQuantity => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "cart_product.invalid_quantity",
            ),
            CartProductError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        };

        (status, Json(ErrorResponse::new(name, message)))
    }
}
