//! Frontend Errors
//!
//! Error kinds surfaced to the user as blocking notifications.

/// Common result type for client operations
pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    /// Rejected before any request was sent
    Validation(String),
    /// Server reported a uniqueness violation
    Conflict(String),
    /// Unlock refused
    Unauthorized,
    /// Non-success status other than the cases above
    Http { status: u16, message: String },
    /// Request could not be sent or the body could not be read
    Network(String),
    /// Response body was not the expected JSON
    Decode(String),
}

impl AppError {
    /// Text shown in the alert dialog
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(msg) => msg.clone(),
            AppError::Conflict(_) => "Model already exists. Please use a different model name.".to_string(),
            AppError::Unauthorized => "Incorrect password.".to_string(),
            AppError::Http { status, message } if message.is_empty() => {
                format!("Request failed with status {}.", status)
            }
            AppError::Http { status, message } => {
                format!("Request failed with status {}: {}", status, message)
            }
            AppError::Network(msg) => format!("Network error: {}", msg),
            AppError::Decode(msg) => format!("Unexpected server response: {}", msg),
        }
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self, AppError::Conflict(_))
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Validation(msg) => write!(f, "Validation error: {}", msg),
            AppError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            AppError::Unauthorized => write!(f, "Unauthorized"),
            AppError::Http { status, message } => write!(f, "HTTP {}: {}", status, message),
            AppError::Network(msg) => write!(f, "Network error: {}", msg),
            AppError::Decode(msg) => write!(f, "Decode error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            AppError::Decode(e.to_string())
        } else {
            AppError::Network(e.to_string())
        }
    }
}

impl From<csv::Error> for AppError {
    fn from(e: csv::Error) -> Self {
        AppError::Validation(format!("Malformed CSV: {}", e))
    }
}
