use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Every failure the stub API can report.
#[derive(Debug, Error)]
pub enum AppError {
    // ── Users ────────────────────────────────────────────────────────────────
    #[error("Email already registered")]
    EmailTaken,

    #[error("Invalid credentials")]
    InvalidCredentials,

    // ── Lookups ──────────────────────────────────────────────────────────────
    #[error("{entity} '{id}' not found")]
    NotFound { entity: &'static str, id: String },

    #[error("{entity} '{id}' does not exist")]
    UnknownReference { entity: &'static str, id: String },

    // ── Validation ───────────────────────────────────────────────────────────
    #[error("Field '{field_name}' cannot be empty")]
    EmptyField { field_name: &'static str },

    #[error("Rating must be between 1 and 5 (got {value})")]
    RatingOutOfRange { value: i64 },

    #[error("Field '{field_name}' must be a finite number")]
    InvalidNumber { field_name: &'static str },
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            _ => StatusCode::BAD_REQUEST,
        }
    }

    /// Signup failures report under `message`; everything else under `error`.
    fn body_key(&self) -> &'static str {
        match self {
            AppError::EmailTaken => "message",
            _ => "error",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let key = self.body_key();
        let body = json!({ key: self.to_string() });
        (self.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes() {
        assert_eq!(AppError::EmailTaken.status(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::InvalidCredentials.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            AppError::NotFound { entity: "Place", id: "x".into() }.status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::RatingOutOfRange { value: 9 }.status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn body_keys() {
        assert_eq!(AppError::EmailTaken.body_key(), "message");
        assert_eq!(AppError::InvalidCredentials.body_key(), "error");
    }
}
