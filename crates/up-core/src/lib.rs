//! # up-core: Pure Business Logic for the UP Storefront
//!
//! This crate is the cart engine of the storefront. It contains the business
//! logic as plain synchronous functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       UP Storefront Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Storefront UI                                │   │
//! │  │    Catalog ──► "Adicionar" ──► Cart panel ──► "Enviar"          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 up-storefront (commands, config)                │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ up-core (THIS CRATE) ★                          │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌──────────┐ │   │
//! │  │   │  types  │ │  money  │ │  cart   │ │ message │ │ checkout │ │   │
//! │  │   │ Product │ │  Money  │ │  Cart   │ │  Order  │ │  wa.me   │ │   │
//! │  │   │         │ │ "49,90" │ │CartLine │ │ Message │ │   link   │ │   │
//! │  │   └─────────┘ └─────────┘ └─────────┘ └─────────┘ └──────────┘ │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - The catalog's product record
//! - [`money`] - Money type, comma-decimal parser and formatter
//! - [`cart`] - Cart store: lines, quantities, totals, panel flag
//! - [`message`] - Order message rendering
//! - [`checkout`] - WhatsApp deep link
//! - [`validation`] - Configuration value checks
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use up_core::{generate_message, Cart, Product};
//!
//! let mut urso = Product::new(1);
//! urso.name = Some("Urso".to_string());
//! urso.price = Some("49,90".to_string());
//!
//! let mut cart = Cart::new();
//! cart.add_to_cart(&urso);
//! cart.add_to_cart(&urso);
//!
//! assert_eq!(cart.total_items(), 2);
//! assert_eq!(cart.total_price().cents(), 9980);
//! assert!(generate_message(&cart).contains("Subtotal: R$ 99,80"));
//! ```

pub mod cart;
pub mod checkout;
pub mod error;
pub mod message;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartLine, CartTotals};
pub use checkout::{checkout_cart, checkout_url};
pub use error::{CoreError, CoreResult, ValidationError};
pub use message::{generate_message, OrderMessage, DEFAULT_STORE_NAME};
pub use money::{format_amount, format_price_label, parse_amount, Money};
pub use types::{Product, ProductId};
