use thiserror::Error;

/// Failure of a single API call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never reached the server or never came back.
    #[error("{0}")]
    Network(String),

    /// Non-2xx status. `message` is the server's `message`/`error` field when
    /// the body carried one.
    #[error("Server error {status}")]
    Status { status: u16, message: Option<String> },

    /// 2xx response whose body is not the expected shape.
    #[error("Unexpected response: {0}")]
    Decode(String),

    #[error("Could not encode request: {0}")]
    Encode(String),
}

impl ApiError {
    /// Builds a `Status` error, pulling a human-readable message out of the
    /// body when one is present.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| {
                ["message", "error"]
                    .iter()
                    .find_map(|key| v.get(*key).and_then(|m| m.as_str()).map(str::to_string))
            })
            .filter(|m| !m.trim().is_empty());
        ApiError::Status { status, message }
    }

    /// The message the server sent back, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

/// Client-side input rejection, raised before any request is issued.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{field} is required")]
    Required { field: &'static str },

    #[error("{field} must be a number")]
    NotANumber { field: &'static str },

    #[error("Rating must be a whole number")]
    RatingNotInteger,

    #[error("Rating must be between {min} and {max} (got {value})")]
    RatingOutOfRange { value: i64, min: u8, max: u8 },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("You must be logged in to do that.")]
    NotAuthenticated,

    #[error(transparent)]
    Api(#[from] ApiError),
}

impl FormError {
    /// Text for the error toast. Server-side failures use the server's
    /// message when it sent one and `fallback` otherwise.
    pub fn notice_text(&self, fallback: &str) -> String {
        match self {
            FormError::Api(err) => err.server_message().unwrap_or(fallback).to_string(),
            other => other.to_string(),
        }
    }
}
