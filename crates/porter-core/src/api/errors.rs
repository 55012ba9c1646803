use crate::errors::PorterError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Invalid API host '{host}': {message}")]
    InvalidHost { host: String, message: String },

    #[error("Request to {url} failed: {source}")]
    RequestFailed {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Not authorized. Check api.token in ~/.porter/config.toml")]
    Unauthorized,

    #[error("Not found: {url}")]
    NotFound { url: String },

    #[error("Unexpected status {status} from {url}: {body}")]
    UnexpectedStatus {
        url: String,
        status: u16,
        body: String,
    },

    #[error("Failed to decode response from {url}: {message}")]
    Decode { url: String, message: String },
}

impl PorterError for ApiError {
    fn error_code(&self) -> &'static str {
        match self {
            ApiError::InvalidHost { .. } => "API_INVALID_HOST",
            ApiError::RequestFailed { .. } => "API_REQUEST_FAILED",
            ApiError::Unauthorized => "API_UNAUTHORIZED",
            ApiError::NotFound { .. } => "API_NOT_FOUND",
            ApiError::UnexpectedStatus { .. } => "API_UNEXPECTED_STATUS",
            ApiError::Decode { .. } => "API_DECODE_FAILED",
        }
    }

    fn is_user_error(&self) -> bool {
        match self {
            ApiError::InvalidHost { .. } | ApiError::Unauthorized | ApiError::NotFound { .. } => {
                true
            }

            ApiError::RequestFailed { .. }
            | ApiError::UnexpectedStatus { .. }
            | ApiError::Decode { .. } => false,
        }
    }
}
