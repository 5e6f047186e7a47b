use thiserror::Error;

#[derive(Error, Debug)]
pub enum CaseMaintenanceError {
    #[error("HTTP request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid request: {message}")]
    InvalidRequest { message: String },

    #[error("Forbidden: {message}")]
    Forbidden { message: String },

    #[error("Duplicate case: {message}")]
    DuplicateCase { message: String },

    #[error("Case not found: {message}")]
    CaseNotFound { message: String },

    #[error("Case already linked: {message}")]
    CaseAlreadyLinked { message: String },

    #[error("{service} responded with {status}: {message}")]
    Upstream {
        service: String,
        status: u16,
        message: String,
    },
}

/// 錯誤分類，用於日誌與監控
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Client,
    Authentication,
    Upstream,
    Internal,
}

impl CaseMaintenanceError {
    /// HTTP status returned to the caller for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidRequest { .. } => 400,
            Self::Forbidden { .. } => 403,
            Self::DuplicateCase { .. } => 300,
            Self::CaseNotFound { .. } | Self::CaseAlreadyLinked { .. } => 404,
            Self::Upstream { status, .. } => match status {
                400 => 400,
                401 | 403 => 403,
                404 => 404,
                _ => 502,
            },
            Self::ApiError(_) => 502,
            _ => 500,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ConfigError { .. }
            | Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => ErrorCategory::Configuration,
            Self::InvalidRequest { .. }
            | Self::DuplicateCase { .. }
            | Self::CaseNotFound { .. }
            | Self::CaseAlreadyLinked { .. } => ErrorCategory::Client,
            Self::Forbidden { .. } => ErrorCategory::Authentication,
            Self::Upstream { status, .. } if *status == 401 || *status == 403 => {
                ErrorCategory::Authentication
            }
            Self::Upstream { .. } | Self::ApiError(_) => ErrorCategory::Upstream,
            Self::IoError(_) | Self::SerializationError(_) => ErrorCategory::Internal,
        }
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            message: message.into(),
        }
    }

    pub fn case_not_found(message: impl Into<String>) -> Self {
        Self::CaseNotFound {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CaseMaintenanceError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn upstream(status: u16) -> CaseMaintenanceError {
        CaseMaintenanceError::Upstream {
            service: "case data store".to_string(),
            status,
            message: "boom".to_string(),
        }
    }

    #[test]
    fn test_upstream_status_passthrough() {
        assert_eq!(upstream(400).status_code(), 400);
        assert_eq!(upstream(401).status_code(), 403);
        assert_eq!(upstream(403).status_code(), 403);
        assert_eq!(upstream(404).status_code(), 404);
        assert_eq!(upstream(500).status_code(), 502);
        assert_eq!(upstream(422).status_code(), 502);
    }

    #[test]
    fn test_domain_error_status() {
        assert_eq!(
            CaseMaintenanceError::DuplicateCase {
                message: "two incomplete cases".to_string()
            }
            .status_code(),
            300
        );
        assert_eq!(
            CaseMaintenanceError::invalid_request("missing header").status_code(),
            400
        );
        assert_eq!(
            CaseMaintenanceError::case_not_found("no case").status_code(),
            404
        );
        assert_eq!(
            CaseMaintenanceError::MissingConfigError {
                field: "identity.url".to_string()
            }
            .status_code(),
            500
        );
    }

    #[test]
    fn test_categories() {
        assert_eq!(upstream(401).category(), ErrorCategory::Authentication);
        assert_eq!(upstream(500).category(), ErrorCategory::Upstream);
        assert_eq!(
            CaseMaintenanceError::ConfigError {
                message: "bad".to_string()
            }
            .category(),
            ErrorCategory::Configuration
        );
    }
}
