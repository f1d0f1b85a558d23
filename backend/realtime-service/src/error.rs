//! Error types for the realtime service

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("failed to start server: {0}")]
    StartServer(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("email error: {0}")]
    Email(String),

    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl AppError {
    /// Stable description safe to return to clients. Driver and transport
    /// details stay in the logs.
    pub fn public_message(&self) -> &'static str {
        match self {
            AppError::Database(_) => "database failure",
            AppError::Email(_) => "email transport failure",
            AppError::Serialize(_) => "serialization failure",
            AppError::Config(_) | AppError::StartServer(_) => "internal error",
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        tracing::error!(error = %self, "request failed");
        HttpResponse::InternalServerError().json(json!({ "error": "Internal server error" }))
    }
}
