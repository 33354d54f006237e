//! # Checkout Command
//!
//! ## User Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  User clicks "Enviar pelo WhatsApp" in the cart panel                   │
//! │                    │                                                    │
//! │                    ▼                                                    │
//! │  checkout(cart, config)                                                 │
//! │    1. Render the order message under the configured store name          │
//! │    2. Percent-encode it into https://wa.me/<number>?text=...            │
//! │                    │                                                    │
//! │                    ▼                                                    │
//! │  UI opens the link in a new tab. The cart is left untouched.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tracing::info;
use up_core::checkout_cart;

use crate::config::StorefrontConfig;
use crate::error::ApiError;
use crate::state::CartState;

/// The rendered order and the link that sends it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutResponse {
    pub message: String,
    pub url: String,
}

/// Builds the order message and WhatsApp link for the current cart.
///
/// ## Errors
/// - `CHECKOUT_ERROR` when the configured number is unusable
/// - `VALIDATION_ERROR` when the configured store name is blank or too long
pub fn checkout(state: &CartState, config: &StorefrontConfig) -> Result<CheckoutResponse, ApiError> {
    let cart = state.cart();
    let (message, url) = checkout_cart(cart, &config.store_name, &config.whatsapp_number)?;

    info!(
        session_id = %state.session_id(),
        lines = cart.len(),
        total = %cart.total_price(),
        "Checkout link issued"
    );

    Ok(CheckoutResponse { message, url })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::cart::add_to_cart;
    use crate::error::ErrorCode;
    use up_core::Product;

    #[test]
    fn test_checkout_builds_message_and_link() {
        let mut state = CartState::new();
        let mut urso = Product::new(1);
        urso.name = Some("Urso".to_string());
        urso.price = Some("49,90".to_string());
        add_to_cart(&mut state, &urso);
        add_to_cart(&mut state, &urso);

        let response = checkout(&state, &StorefrontConfig::default()).unwrap();

        assert!(response.message.contains("Subtotal: R$ 99,80"));
        assert!(response.message.contains("💰 *TOTAL: R$ 99,80*"));
        assert!(response
            .url
            .starts_with("https://wa.me/5511999999999?text=%F0%9F%A7%B8%20%2APEDIDO"));
        assert_eq!(state.cart().total_items(), 2);
    }

    #[test]
    fn test_checkout_empty_cart() {
        let state = CartState::new();
        let response = checkout(&state, &StorefrontConfig::default()).unwrap();
        assert!(response.message.contains("TOTAL: R$ 0,00"));
    }

    #[test]
    fn test_checkout_with_bad_number() {
        let state = CartState::new();
        let config = StorefrontConfig {
            whatsapp_number: "11-9999".to_string(),
            ..StorefrontConfig::default()
        };

        let err = checkout(&state, &config).unwrap_err();
        assert_eq!(err.code, ErrorCode::CheckoutError);
    }

    #[test]
    fn test_checkout_with_blank_store_name() {
        let state = CartState::new();
        let config = StorefrontConfig {
            store_name: String::new(),
            ..StorefrontConfig::default()
        };

        let err = checkout(&state, &config).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "store_name is required");
    }
}
