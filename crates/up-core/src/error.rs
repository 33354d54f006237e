//! # Error Types
//!
//! Domain-specific error types for up-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  up-core errors (this file)                                             │
//! │  ├── CoreError        - Checkout link failures                          │
//! │  └── ValidationError  - Input validation failures                       │
//! │                                                                         │
//! │  storefront errors (app crate)                                          │
//! │  ├── ConfigError      - Configuration loading failures                  │
//! │  └── ApiError         - What the UI sees (serialized)                   │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → UI                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## What Is NOT an Error
//! The cart engine is total. These inputs are absorbed, never reported:
//! - Malformed or missing price strings (coerced to zero)
//! - Unknown product ids passed to remove/update (no-op)
//! - Quantities `<= 0` passed to update (treated as removal)

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The checkout recipient is not a usable phone number.
    ///
    /// ## When This Occurs
    /// - Recipient configured with punctuation or spaces (`+55 (11) ...`)
    /// - Recipient too short or too long for an international number
    #[error("Invalid checkout recipient '{recipient}': {reason}")]
    InvalidRecipient { recipient: String, reason: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Invalid format (e.g., non-digit phone number).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;
