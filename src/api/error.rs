use reqwest::StatusCode;
use serde_json::Value;

/// What can go wrong talking to the backend. The calculator side of the
/// crate never produces these; they exist so views can tell "the network
/// is down" from "the backend rejected the request".
#[derive(Debug)]
pub enum ApiError {
    /// Could not reach the server at all.
    Network(String),
    Timeout,
    /// The server answered with a non-success status.
    Status { status: u16, message: String },
    /// The body did not match the expected shape.
    Decode(String),
}

impl ApiError {
    pub(crate) fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout
        } else {
            ApiError::Network(err.to_string())
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Presentable text for the failure, one message per failure class.
    /// Backend-provided messages win for validation-type rejections so the
    /// customer sees what the backend actually objected to (including the
    /// submission-time conflict when somebody else booked the same dates).
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network(_) => {
                "Cannot connect to the server. Please check your internet connection and try again."
                    .to_string()
            }
            ApiError::Timeout => "Request timed out. Please try again.".to_string(),
            ApiError::Decode(_) => {
                "Received an unexpected response from the server. Please try again later."
                    .to_string()
            }
            ApiError::Status { status, message } => match status {
                401 => "Authentication failed. Please sign in again.".to_string(),
                403 => "You don't have permission to perform this action.".to_string(),
                404 => "The requested resource was not found. Please contact support.".to_string(),
                400 | 422 => {
                    if message.is_empty() {
                        "Invalid booking data. Please check your inputs and try again.".to_string()
                    } else {
                        message.clone()
                    }
                }
                500 => "Server error. Please try again later or contact support.".to_string(),
                502 | 503 => {
                    "The service is temporarily unavailable. Please try again later.".to_string()
                }
                _ => {
                    if !message.is_empty() && message.len() < 200 {
                        message.clone()
                    } else {
                        "An unexpected error occurred. Please try again.".to_string()
                    }
                }
            },
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Network(err) => write!(f, "Network error: {}", err),
            ApiError::Timeout => write!(f, "Request timed out"),
            ApiError::Status { status, message } => {
                write!(f, "API request failed ({}): {}", status, message)
            }
            ApiError::Decode(err) => write!(f, "Failed to decode response: {}", err),
        }
    }
}

impl std::error::Error for ApiError {}

/// Digs the human-readable message out of an error body. Backends in the
/// wild use `message`, `detail`, `error` or `msg`, and `detail` is
/// sometimes an array of strings.
pub(crate) fn error_message_from_body(body: &str, status: StatusCode) -> String {
    if let Ok(value) = serde_json::from_str::<Value>(body) {
        for key in ["message", "detail", "error", "msg"] {
            match value.get(key) {
                Some(Value::String(text)) if !text.is_empty() => return text.clone(),
                Some(Value::Array(items)) => {
                    let parts: Vec<&str> = items.iter().filter_map(|item| item.as_str()).collect();
                    if !parts.is_empty() {
                        return parts.join(", ");
                    }
                }
                _ => {}
            }
        }
    }

    format!(
        "API request failed: {}",
        status.canonical_reason().unwrap_or("unknown error")
    )
}
