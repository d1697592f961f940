use axum::{
    http::{header::WWW_AUTHENTICATE, HeaderValue, StatusCode},
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

    #[error("Missing credentials")]
    MissingCredentials,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Authentication failed")]
    AuthenticationFailed,

    #[error("Inactive account")]
    InactiveAccount,

    #[error("Database error: {0}")]
    Database(sqlx::Error),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Authentication rejections answered with a bearer challenge.
    fn is_bearer_challenge(&self) -> bool {
        matches!(
            self,
            Error::MissingCredentials | Error::InvalidCredentials | Error::AuthenticationFailed
        )
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        let bearer_challenge = self.is_bearer_challenge();
        let (status, error_message) = match self {
            Error::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Error::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            Error::MissingCredentials => {
                (StatusCode::UNAUTHORIZED, "missing_credentials".to_string())
            }
            Error::InvalidCredentials => {
                (StatusCode::UNAUTHORIZED, "invalid_credentials".to_string())
            }
            // Wrong password and unknown mobile number share one message so the
            // response never reveals whether a number is registered.
            Error::AuthenticationFailed => {
                (StatusCode::UNAUTHORIZED, "authentication_failed".to_string())
            }
            Error::InactiveAccount => (StatusCode::BAD_REQUEST, "inactive_account".to_string()),
            Error::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            Error::Database(err) => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
            Error::Json(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            Error::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "An unexpected error occurred".to_string(),
            ),
        };

        let body = Json(json!({ "error": error_message }));
        let mut response = (status, body).into_response();
        if bearer_challenge {
            response
                .headers_mut()
                .insert(WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
        }
        response
    }
}

impl From<sqlx::Error> for Error {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => Error::NotFound("Resource not found".to_string()),
            other => Error::Database(other),
        }
    }
}
