use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Serialize)]
#[serde(tag = "type", content = "message")]
pub enum AppError {
    #[error("API error: {0}")]
    ApiError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Rate limit exceeded: {0}")]
    RateLimitError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AppError::ExternalServiceError("Request timeout".to_string())
        } else if err.is_connect() {
            AppError::ExternalServiceError("Failed to connect to external service".to_string())
        } else if let Some(status) = err.status() {
            match status.as_u16() {
                429 => AppError::RateLimitError("Too many requests".to_string()),
                404 => AppError::NotFound("External resource not found".to_string()),
                401 | 403 => {
                    AppError::Unauthorized("Not authorized to access external service".to_string())
                }
                _ => AppError::ApiError(format!("HTTP {}: {}", status, err)),
            }
        } else {
            AppError::ApiError(err.to_string())
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::SerializationError(err.to_string())
    }
}

impl From<regex::Error> for AppError {
    fn from(err: regex::Error) -> Self {
        AppError::ConfigError(format!("Invalid pattern: {}", err))
    }
}

impl AppError {
    /// Errors caused by the caller's input rather than by an upstream service.
    pub fn is_client_error(&self) -> bool {
        matches!(self, AppError::InvalidInput(_))
    }

    /// Wraps any upstream failure so the caller sees a single hard-failure kind.
    pub fn into_upstream(self, service: &str) -> Self {
        match self {
            AppError::ExternalServiceError(msg) => {
                AppError::ExternalServiceError(format!("{}: {}", service, msg))
            }
            other => AppError::ExternalServiceError(format!("{}: {}", service, other)),
        }
    }
}

// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_invalid_input_is_client_error() {
        assert!(AppError::InvalidInput("empty".to_string()).is_client_error());
        assert!(!AppError::ApiError("boom".to_string()).is_client_error());
        assert!(!AppError::ExternalServiceError("down".to_string()).is_client_error());
    }

    #[test]
    fn test_into_upstream_keeps_detail() {
        let err = AppError::ApiError("HTTP 502".to_string()).into_upstream("Jellyfin");

        match err {
            AppError::ExternalServiceError(msg) => {
                assert!(msg.starts_with("Jellyfin: "));
                assert!(msg.contains("HTTP 502"));
            }
            other => panic!("unexpected error kind: {:?}", other),
        }
    }

    #[test]
    fn test_into_upstream_does_not_nest_kind_name() {
        let err = AppError::ExternalServiceError("Request timeout".to_string())
            .into_upstream("TMDB");

        assert_eq!(err.to_string(), "External service error: TMDB: Request timeout");
    }

    #[test]
    fn test_serde_json_error_maps_to_serialization() {
        let parse: Result<u32, _> = serde_json::from_str("not json");
        let err: AppError = parse.unwrap_err().into();
        assert!(matches!(err, AppError::SerializationError(_)));
    }
}
