pub mod auth;
pub mod cards;
pub mod error;
pub mod health;
pub mod users;
pub mod validation;

use error::ApiError;

/// Fallback for any route the router does not know.
pub async fn not_found() -> ApiError {
    ApiError::NotFound("Ресурс не найден".into())
}
