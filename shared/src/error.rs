use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    UnprocessableEntity(String),
    #[error("{0}")]
    EntityNotFound(String),
    #[error("validation failed: {0}")]
    ValidationError(#[from] garde::Report),
    #[error("transaction failed")]
    TransactionError(#[source] sqlx::Error),
    #[error("database operation failed")]
    SpecificOperationError(#[source] sqlx::Error),
    #[error("no rows affected: {0}")]
    NoRowsAffectedError(String),
    #[error("failed to run migrations")]
    MigrationError(#[from] sqlx::migrate::MigrateError),
    #[error("failed to process password hash")]
    PasswordHashError(#[from] argon2::password_hash::Error),
    #[error("{0}")]
    ConvertToUuidError(#[from] uuid::Error),
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("unauthenticated")]
    UnauthenticatedError,
    #[error("administrator privileges required")]
    ForbiddenOperation,
    #[error("{0}")]
    ConversionEntityError(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status_code = match &self {
            AppError::UnprocessableEntity(_) | AppError::NoRowsAffectedError(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            AppError::EntityNotFound(_) => StatusCode::NOT_FOUND,
            AppError::ValidationError(_) | AppError::ConvertToUuidError(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::InvalidCredentials | AppError::UnauthenticatedError => {
                StatusCode::UNAUTHORIZED
            }
            AppError::ForbiddenOperation => StatusCode::FORBIDDEN,
            e @ (AppError::TransactionError(_)
            | AppError::SpecificOperationError(_)
            | AppError::MigrationError(_)
            | AppError::PasswordHashError(_)
            | AppError::ConversionEntityError(_)) => {
                tracing::error!(
                    error.cause_chain = ?e,
                    error.message = %e,
                    "unexpected error happened"
                );
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        (status_code, self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_errors_onto_status_codes() {
        let cases = [
            (
                AppError::UnprocessableEntity("username already exists".into()),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (
                AppError::EntityNotFound("no such user".into()),
                StatusCode::NOT_FOUND,
            ),
            (AppError::InvalidCredentials, StatusCode::UNAUTHORIZED),
            (AppError::UnauthenticatedError, StatusCode::UNAUTHORIZED),
            (AppError::ForbiddenOperation, StatusCode::FORBIDDEN),
            (
                AppError::ConversionEntityError("bad row".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (error, expected) in cases {
            assert_eq!(error.into_response().status(), expected);
        }
    }
}
