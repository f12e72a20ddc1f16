//! Error type of the HTTP layer and envelope helpers for handlers

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use contracts::shared::envelope::ApiEnvelope;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    EntityNotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("Credenciales incorrectas")]
    Unauthenticated,
    #[error("Error al acceder a la base de datos")]
    Database(#[from] sea_orm::DbErr),
    #[error("Error interno del servidor")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        AppError::EntityNotFound(msg.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::EntityNotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Unauthenticated => StatusCode::UNAUTHORIZED,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match &self {
            AppError::Database(e) => {
                tracing::error!(error.message = %e, "Database error");
            }
            AppError::Internal(e) => {
                tracing::error!(error.cause_chain = ?e, error.message = %e, "Unexpected error happened");
            }
            other => {
                tracing::warn!("{} {}", status.as_u16(), other);
            }
        }
        (status, Json(ApiEnvelope::<()>::error(self.to_string()))).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

/// Handler return type: envelope on success, error envelope otherwise
pub type ApiResult<T> = Result<Json<ApiEnvelope<T>>, AppError>;

pub fn ok<T>(data: T) -> ApiResult<T> {
    Ok(Json(ApiEnvelope::success(data)))
}

pub fn ok_with_message<T>(data: T, message: impl Into<String>) -> ApiResult<T> {
    Ok(Json(ApiEnvelope::success_with_message(data, message)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::validation("x").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AppError::not_found("x").status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::Conflict("x".into()).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::from(anyhow::anyhow!("boom")).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_internal_details_are_not_leaked() {
        let err = AppError::from(anyhow::anyhow!("near \"SELEC\": syntax error"));
        assert_eq!(err.to_string(), "Error interno del servidor");
        assert_eq!(
            AppError::validation("Cantidad 0").to_string(),
            "Cantidad 0"
        );
    }
}
