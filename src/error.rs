use axum::{
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::json;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("This e-mail is already registered.")]
    EmailAlreadyExists,

    #[error("Invalid e-mail or password.")]
    InvalidCredentials,

    #[error("Invalid account. Please contact support or create a new account.")]
    InvalidAccount,

    #[error("Connect your Google account in Settings before scheduling interviews.")]
    CalendarNotConnected,

    #[error("Table store returned {status}: {message}")]
    TableStore { status: u16, message: String },

    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Session store error: {0}")]
    Session(String),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),

    #[error("HTTP error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Password hashing error: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError),

    #[error("Token error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Multipart error: {0}")]
    Multipart(#[from] axum::extract::multipart::MultipartError),

    #[error("Excel export error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
}

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        let (status, error_message) = match self {
            Error::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Error::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            Error::EmailAlreadyExists => (StatusCode::CONFLICT, self.to_string()),
            Error::InvalidCredentials | Error::InvalidAccount => {
                (StatusCode::UNAUTHORIZED, self.to_string())
            }
            Error::CalendarNotConnected => (StatusCode::PRECONDITION_FAILED, self.to_string()),
            Error::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            Error::Json(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            Error::Multipart(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            Error::Upstream(msg) => (StatusCode::BAD_GATEWAY, msg),
            ref err @ (Error::TableStore { .. } | Error::Reqwest(_)) => {
                tracing::error!(error = %err, "external service call failed");
                (
                    StatusCode::BAD_GATEWAY,
                    "External service error. Please try again.".to_string(),
                )
            }
            Error::Xlsx(err) => (StatusCode::INTERNAL_SERVER_ERROR, format!("Export error: {}", err)),
            ref err => {
                tracing::error!(error = %err, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An unexpected error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}
