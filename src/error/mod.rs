//! The unified error handling system for the application.

pub use types::ApiError;

/// A unified `Result` type for the entire application.
///
/// All functions that can fail should return this type.
pub type Result<T> = std::result::Result<T, ApiError>;

pub mod types;

/// Error Category for monitoring and alerting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Errors caused by the client (e.g., bad input, invalid credentials).
    /// Corresponds to 4xx HTTP status codes.
    Client,
    /// Errors caused by the server or its dependencies.
    /// Corresponds to 5xx HTTP status codes.
    Server,
}

impl ApiError {
    /// 错误分类，客户端错误与服务端错误分别对应 4xx / 5xx
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::NotFound { .. } | Self::Validation { .. } | Self::Unauthorized { .. } => {
                ErrorCategory::Client
            }
            Self::Database { .. } | Self::Config { .. } | Self::Internal { .. } => {
                ErrorCategory::Server
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_category_split() {
        assert_eq!(
            ApiError::not_found("project 42 not found").category(),
            ErrorCategory::Client
        );
        assert_eq!(
            ApiError::unauthorized("invalid credentials").category(),
            ErrorCategory::Client
        );
        assert_eq!(
            ApiError::validation("status must be one of pending/processing/shipped/delivered/cancelled")
                .category(),
            ErrorCategory::Client
        );
        assert_eq!(
            ApiError::database("connection lost", None).category(),
            ErrorCategory::Server
        );
    }

    #[test]
    fn test_error_display_includes_message() {
        let err = ApiError::not_found("page about-me not found");
        assert!(err.to_string().contains("page about-me not found"));
    }
}
