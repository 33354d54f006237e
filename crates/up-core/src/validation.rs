//! # Validation Module
//!
//! Checks for the few values that come from configuration rather than from
//! the catalog: the checkout recipient and the store name.
//!
//! Catalog data is never validated here. The cart accepts any product record
//! and absorbs bad fields (see [`crate::money::parse_amount`]).
//!
//! ## Usage
//! ```rust
//! use up_core::validation::{validate_recipient, validate_store_name};
//!
//! assert!(validate_recipient("5511999999999").is_ok());
//! assert!(validate_recipient("+55 11 99999-9999").is_err());
//! assert!(validate_store_name("UP Universo das Pelúcias").is_ok());
//! ```

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Shortest accepted recipient (country + area + local number).
pub const MIN_RECIPIENT_DIGITS: usize = 10;

/// Longest number allowed by E.164.
pub const MAX_RECIPIENT_DIGITS: usize = 15;

pub const MAX_STORE_NAME_LEN: usize = 100;

/// Validates a messaging recipient: international number, digits only.
///
/// ## Rules
/// - Must not be empty
/// - ASCII digits only (no `+`, spaces, dashes or parentheses)
/// - Between 10 and 15 digits
pub fn validate_recipient(recipient: &str) -> ValidationResult<()> {
    if recipient.is_empty() {
        return Err(ValidationError::Required {
            field: "whatsapp_number".to_string(),
        });
    }

    if !recipient.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::InvalidFormat {
            field: "whatsapp_number".to_string(),
            reason: "must contain only digits, including country code".to_string(),
        });
    }

    if !(MIN_RECIPIENT_DIGITS..=MAX_RECIPIENT_DIGITS).contains(&recipient.len()) {
        return Err(ValidationError::InvalidFormat {
            field: "whatsapp_number".to_string(),
            reason: format!(
                "must have between {} and {} digits",
                MIN_RECIPIENT_DIGITS, MAX_RECIPIENT_DIGITS
            ),
        });
    }

    Ok(())
}

/// Validates the store name printed in the order header.
pub fn validate_store_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "store_name".to_string(),
        });
    }

    if name.chars().count() > MAX_STORE_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "store_name".to_string(),
            max: MAX_STORE_NAME_LEN,
        });
    }

    Ok(())
}
