use actix_web::{HttpResponse, ResponseError};
use chrono::{DateTime, Utc};
use serde_json::json;
use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] sea_orm::DbErr),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Account locked until {locked_until}")]
    AccountLocked { locked_until: DateTime<Utc> },

    #[error("Invalid or expired session")]
    InvalidSession,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Insufficient points: {required} required, {available} available")]
    InsufficientPoints { required: i64, available: i64 },

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let (status_code, error_code, message, details) = match self {
            AppError::ValidationError(msg) => {
                log::warn!("Validation error: {msg}");
                (
                    actix_web::http::StatusCode::BAD_REQUEST,
                    "VALIDATION_ERROR",
                    msg.clone(),
                    None,
                )
            }
            AppError::Conflict(msg) => {
                log::warn!("Conflict: {msg}");
                (
                    actix_web::http::StatusCode::CONFLICT,
                    "CONFLICT",
                    msg.clone(),
                    None,
                )
            }
            AppError::InvalidCredentials => (
                actix_web::http::StatusCode::UNAUTHORIZED,
                "INVALID_CREDENTIALS",
                "Invalid credentials".to_string(),
                None,
            ),
            AppError::AccountLocked { locked_until } => {
                log::warn!("Login attempt on locked account (until {locked_until})");
                (
                    actix_web::http::StatusCode::LOCKED,
                    "ACCOUNT_LOCKED",
                    "Account locked due to too many failed attempts".to_string(),
                    Some(json!({ "locked_until": locked_until })),
                )
            }
            AppError::InvalidSession => (
                actix_web::http::StatusCode::UNAUTHORIZED,
                "INVALID_SESSION",
                "Invalid or expired session".to_string(),
                None,
            ),
            AppError::NotFound(msg) => (
                actix_web::http::StatusCode::NOT_FOUND,
                "NOT_FOUND",
                msg.clone(),
                None,
            ),
            AppError::InsufficientPoints {
                required,
                available,
            } => (
                actix_web::http::StatusCode::BAD_REQUEST,
                "INSUFFICIENT_POINTS",
                "Insufficient points".to_string(),
                Some(json!({
                    "points_required": required,
                    "points_available": available
                })),
            ),
            AppError::DatabaseError(err) => {
                log::error!("Database error: {err}");
                (
                    actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
                    "DATABASE_ERROR",
                    "Database error".to_string(),
                    None,
                )
            }
            _ => {
                log::error!("Internal error: {self}");
                (
                    actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "Internal server error".to_string(),
                    None,
                )
            }
        };

        let mut error_body = json!({
            "code": error_code,
            "message": message
        });
        if let (Some(obj), Some(extra)) = (error_body.as_object_mut(), details) {
            if let Some(extra_obj) = extra.as_object() {
                for (k, v) in extra_obj {
                    obj.insert(k.clone(), v.clone());
                }
            }
        }

        HttpResponse::build(status_code).json(json!({
            "success": false,
            "error": error_body
        }))
    }
}
