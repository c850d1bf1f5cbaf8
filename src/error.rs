use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] sea_orm::DbErr),

    #[error("Please fill all fields: {0} is required")]
    MissingField(String),

    #[error("Invalid package: {0}")]
    InvalidPackage(String),

    #[error("Please select payment type (advance or full)")]
    MissingPaymentType,

    #[error("Enter a valid payment amount")]
    InvalidAmount,

    #[error("Full payment must be ₹{expected}")]
    AmountMismatch { expected: i64 },

    #[error("Advance cannot be equal or greater than full price")]
    AdvanceTooHigh,

    #[error("Booking {booking_id} was saved but its initial payment was not")]
    InitialPaymentFailed { booking_id: i64 },

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Auth error: {0}")]
    AuthError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Forbidden")]
    Forbidden,

    #[error("External API error: {0}")]
    ExternalApiError(String),

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("Internal server error: {0}")]
    InternalError(String),

    #[error("JWT error: {0}")]
    JwtError(#[from] jsonwebtoken::errors::Error),

    #[error("HTTP request error: {0}")]
    ReqwestError(#[from] reqwest::Error),

    #[error("JSON serialization/deserialization error: {0}")]
    SerdeJsonError(#[from] serde_json::Error),
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let message = self.to_string();
        let (status_code, error_code) = match self {
            AppError::MissingField(field) => {
                log::warn!("Missing field: {field}");
                (actix_web::http::StatusCode::BAD_REQUEST, "MISSING_FIELD")
            }
            AppError::InvalidPackage(name) => {
                log::warn!("Invalid package: {name}");
                (actix_web::http::StatusCode::BAD_REQUEST, "INVALID_PACKAGE")
            }
            AppError::MissingPaymentType => (
                actix_web::http::StatusCode::BAD_REQUEST,
                "MISSING_PAYMENT_TYPE",
            ),
            AppError::InvalidAmount => {
                (actix_web::http::StatusCode::BAD_REQUEST, "INVALID_AMOUNT")
            }
            AppError::AmountMismatch { .. } => {
                (actix_web::http::StatusCode::BAD_REQUEST, "AMOUNT_MISMATCH")
            }
            AppError::AdvanceTooHigh => {
                (actix_web::http::StatusCode::BAD_REQUEST, "ADVANCE_TOO_HIGH")
            }
            AppError::InitialPaymentFailed { booking_id } => {
                // 预订已落库但首笔支付没有，需要人工对账
                log::error!("Initial payment insert failed for booking {booking_id}");
                (
                    actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
                    "INITIAL_PAYMENT_FAILED",
                )
            }
            AppError::ValidationError(msg) => {
                log::warn!("Validation error: {msg}");
                (
                    actix_web::http::StatusCode::BAD_REQUEST,
                    "VALIDATION_ERROR",
                )
            }
            AppError::AuthError(msg) => {
                log::warn!("Authentication error: {msg}");
                (actix_web::http::StatusCode::UNAUTHORIZED, "AUTH_ERROR")
            }
            AppError::NotFound(_) => (actix_web::http::StatusCode::NOT_FOUND, "NOT_FOUND"),
            AppError::Forbidden => {
                log::warn!("Forbidden access");
                (actix_web::http::StatusCode::FORBIDDEN, "FORBIDDEN")
            }
            AppError::ExternalApiError(msg) => {
                log::error!("External API error: {msg}");
                (
                    actix_web::http::StatusCode::BAD_GATEWAY,
                    "EXTERNAL_API_ERROR",
                )
            }
            AppError::DatabaseError(err) => {
                log::error!("Database error: {err}");
                (
                    actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
                    "DATABASE_ERROR",
                )
            }
            _ => {
                log::error!("Internal error: {self}");
                (
                    actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                )
            }
        };

        // 数据库内部细节不回传给客户端
        let message = match self {
            AppError::DatabaseError(_) => "Database error".to_string(),
            AppError::InternalError(_) => "Internal server error".to_string(),
            _ => message,
        };

        HttpResponse::build(status_code).json(json!({
            "success": false,
            "error": {
                "code": error_code,
                "message": message
            }
        }))
    }
}
