use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use anyhow::Error as ANYHOW_ERROR;
use bigdecimal::ParseBigDecimalError as BIG_DECIMAL_ERROR;
use chrono::ParseError as CHRONO_PARSE_ERROR;
use refinery::Error as MIGRATION_ERROR;
use serde_json::Error as JSON_ERROR;
use sqlx::error::Error as SQL_ERROR;
use std::{
    env::VarError, io::Error as IO_ERROR, num::ParseFloatError,
    num::ParseIntError,
};
use thiserror::Error;
use tokio::task::JoinError;
use tracing::subscriber::SetGlobalDefaultError as TRACING_GLOBAL_DEFAULT_ERROR;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Io(#[from] IO_ERROR),

    #[error("{0}")]
    INT(#[from] ParseIntError),

    #[error("{0}")]
    FLOAT(#[from] ParseFloatError),

    #[error("{0}")]
    SQL(#[from] SQL_ERROR),

    #[error("{0}")]
    VAR(#[from] VarError),

    #[error("{0}")]
    TokioJoinError(#[from] JoinError),

    #[error("{0}")]
    BigDecimalError(#[from] BIG_DECIMAL_ERROR),

    #[error("Decode datetime: {0}")]
    DecodeDateTimeError(#[from] CHRONO_PARSE_ERROR),

    #[error("{0}")]
    JsonError(#[from] JSON_ERROR),

    #[error("Migration error: {0}")]
    MigrationError(#[from] MIGRATION_ERROR),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Server end with error: {0}")]
    ServerError(String),

    #[error("Invalid option: {option}")]
    InvalidOption { option: String },

    #[error("Not authenticated")]
    Unauthorized(),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Tracing error: {0}")]
    SetGlobalDefaultError(#[from] TRACING_GLOBAL_DEFAULT_ERROR),

    #[error("{0}")]
    AnyHowError(#[from] ANYHOW_ERROR),
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self {
            // 400 Bad Request - client sent invalid input
            Error::INT(_)
            | Error::FLOAT(_)
            | Error::BigDecimalError(_)
            | Error::DecodeDateTimeError(_)
            | Error::InvalidOption { .. } => StatusCode::BAD_REQUEST,

            // 401 Unauthorized - missing or invalid admin session
            Error::Unauthorized() => StatusCode::UNAUTHORIZED,

            // 404 Not Found - requested record does not exist
            Error::NotFound(_) | Error::SQL(SQL_ERROR::RowNotFound) => {
                StatusCode::NOT_FOUND
            },

            // 500 Internal Server Error - everything else
            Error::Io(_)
            | Error::SQL(_)
            | Error::VAR(_)
            | Error::TokioJoinError(_)
            | Error::JsonError(_)
            | Error::MigrationError(_)
            | Error::ConfigurationError(_)
            | Error::ServerError(_)
            | Error::SetGlobalDefaultError(_)
            | Error::AnyHowError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let body = serde_json::json!({
            "error": status.canonical_reason().unwrap_or("Unknown"),
            "message": self.to_string(),
            "status": status.as_u16(),
        });
        HttpResponse::build(status).json(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            Error::Unauthorized().status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            Error::SQL(SQL_ERROR::RowNotFound).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            Error::SQL(SQL_ERROR::PoolTimedOut).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            Error::InvalidOption {
                option: "price".to_string()
            }
            .status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            Error::ConfigurationError("missing".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_response_body() {
        let response = Error::NotFound("wallet".to_string()).error_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
