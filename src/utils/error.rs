use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Server responded with status {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("API error {code}: {message}")]
    ApiError { code: i64, message: String },

    #[error("Request task failed: {0}")]
    TaskError(#[from] tokio::task::JoinError),

    #[error("Query encoding error: {0}")]
    QueryEncodingError(#[from] serde_qs::Error),

    #[error("Unsupported request parameter `{field}`: {reason}")]
    UnsupportedParameter { field: String, reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for `{field}`: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value `{value}` for `{field}`: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Server,
    Data,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ClientError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ClientError::RequestError(_) | ClientError::TaskError(_) => ErrorCategory::Network,
            ClientError::HttpStatus { .. } | ClientError::ApiError { .. } => {
                ErrorCategory::Server
            }
            ClientError::UnsupportedParameter { .. }
            | ClientError::QueryEncodingError(_)
            | ClientError::SerializationError(_) => ErrorCategory::Data,
            ClientError::ConfigError { .. }
            | ClientError::ConfigValidationError { .. }
            | ClientError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            ClientError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // Timeouts and refused connections are usually transient.
            ClientError::RequestError(e) if e.is_timeout() || e.is_connect() => {
                ErrorSeverity::Medium
            }
            ClientError::HttpStatus { status, .. } if *status >= 500 => ErrorSeverity::Medium,
            ClientError::RequestError(_)
            | ClientError::HttpStatus { .. }
            | ClientError::ApiError { .. }
            | ClientError::UnsupportedParameter { .. }
            | ClientError::QueryEncodingError(_)
            | ClientError::SerializationError(_) => ErrorSeverity::High,
            ClientError::ConfigError { .. }
            | ClientError::ConfigValidationError { .. }
            | ClientError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            ClientError::IoError(_) | ClientError::TaskError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => "Check that the dashboard server is reachable and retry",
            ErrorCategory::Server => "Inspect the server logs for the failing request",
            ErrorCategory::Data => "Pass filter parameters as a JSON object",
            ErrorCategory::Configuration => "Fix the client configuration file or CLI flags",
            ErrorCategory::System => "Check file permissions and available disk space",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ClientError::RequestError(e) if e.is_timeout() => {
                "The dashboard server did not answer in time".to_string()
            }
            ClientError::RequestError(_) => "Could not reach the dashboard server".to_string(),
            ClientError::HttpStatus { status, .. } => {
                format!("The dashboard server rejected the request (HTTP {})", status)
            }
            ClientError::ApiError { code, message } if message.is_empty() => {
                format!("The dashboard reported error code {}", code)
            }
            ClientError::ApiError { code, message } => {
                format!("The dashboard reported error code {}: {}", code, message)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
