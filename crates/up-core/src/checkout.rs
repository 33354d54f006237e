//! # Checkout Link
//!
//! Turns an order message into a WhatsApp deep link:
//!
//! ```text
//! https://wa.me/<recipient>?text=<percent-encoded message>
//! ```
//!
//! The message is UTF-8 percent-encoded (spaces as `%20`, newlines as `%0A`,
//! emoji as their byte sequences), so it survives the trip through the
//! browser unchanged.

use crate::cart::Cart;
use crate::error::{CoreError, CoreResult};
use crate::message::OrderMessage;
use crate::validation::{validate_recipient, validate_store_name};

/// Base URL of the messaging deep link.
pub const WHATSAPP_BASE_URL: &str = "https://wa.me";

/// Builds the deep link for `message`, addressed to `recipient`.
///
/// ## Errors
/// [`CoreError::InvalidRecipient`] when `recipient` is not 10 to 15 ASCII digits.
///
/// ## Example
/// ```rust
/// use up_core::checkout::checkout_url;
///
/// let url = checkout_url("5511999999999", "Olá mundo").unwrap();
/// assert_eq!(url, "https://wa.me/5511999999999?text=Ol%C3%A1%20mundo");
/// ```
pub fn checkout_url(recipient: &str, message: &str) -> CoreResult<String> {
    validate_recipient(recipient).map_err(|err| CoreError::InvalidRecipient {
        recipient: recipient.to_string(),
        reason: err.to_string(),
    })?;

    Ok(format!(
        "{}/{}?text={}",
        WHATSAPP_BASE_URL,
        recipient,
        urlencoding::encode(message)
    ))
}

/// Renders `cart` under `store_name` and returns `(message, link)`.
///
/// ## Errors
/// - [`CoreError::Validation`] when `store_name` is blank or too long
/// - [`CoreError::InvalidRecipient`] as for [`checkout_url`]
pub fn checkout_cart(cart: &Cart, store_name: &str, recipient: &str) -> CoreResult<(String, String)> {
    validate_store_name(store_name)?;

    let message = OrderMessage::for_store(store_name, cart.lines(), cart.total_price()).render();
    let url = checkout_url(recipient, &message)?;
    Ok((message, url))
}
