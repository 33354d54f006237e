//! # API Error Type
//!
//! Unified error type for storefront commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Cart commands ──────────────► never fail (the cart engine is total)    │
//! │                                                                         │
//! │  checkout ─── CoreError ─────► ApiError { code: CHECKOUT_ERROR, .. }    │
//! │               (store name) ──► ApiError { code: VALIDATION_ERROR, .. }  │
//! │                                                                         │
//! │  startup ──── ConfigError ───► ApiError { code: CONFIG_ERROR, .. }      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The UI receives a machine-readable `code` and a human-readable `message`.

use serde::Serialize;
use up_core::CoreError;

use crate::config::ConfigError;

/// API error returned from storefront commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "CHECKOUT_ERROR",
///   "message": "Invalid checkout recipient '+55 11': ..."
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Input validation failed
    ValidationError,

    /// Configuration could not be loaded
    ConfigError,

    /// The checkout link could not be built
    CheckoutError,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidRecipient { .. } => {
                tracing::error!("Checkout recipient rejected: {}", err);
                ApiError::new(ErrorCode::CheckoutError, err.to_string())
            }
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
        }
    }
}

/// Converts configuration errors to API errors.
impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Invalid(e) => ApiError::validation(e.to_string()),
            other => {
                tracing::error!("Configuration failed: {}", other);
                ApiError::new(ErrorCode::ConfigError, other.to_string())
            }
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use up_core::ValidationError;

    #[test]
    fn test_serializes_code_and_message() {
        let err = ApiError::new(ErrorCode::CheckoutError, "bad number");
        let json = serde_json::to_value(&err).unwrap();

        assert_eq!(json["code"], "CHECKOUT_ERROR");
        assert_eq!(json["message"], "bad number");
    }

    #[test]
    fn test_from_core_error() {
        let err: ApiError = CoreError::InvalidRecipient {
            recipient: "x".to_string(),
            reason: "digits".to_string(),
        }
        .into();
        assert_eq!(err.code, ErrorCode::CheckoutError);

        let err: ApiError = CoreError::Validation(ValidationError::Required {
            field: "store_name".to_string(),
        })
        .into();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "store_name is required");
    }

    #[test]
    fn test_from_config_error() {
        let err: ApiError = ConfigError::FileNotFound(PathBuf::from("/x.toml")).into();
        assert_eq!(err.code, ErrorCode::ConfigError);
        assert_eq!(err.to_string(), "[ConfigError] Config file not found: /x.toml");
    }
}
