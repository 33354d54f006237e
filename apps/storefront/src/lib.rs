//! # up-storefront: Host Layer for the UP Storefront
//!
//! Wires configuration, the session cart and the UI commands together.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Storefront Startup                                │
//! │                                                                         │
//! │  1. Load Configuration ───────────────────────────────────────────────► │
//! │     • env (UP_*) > storefront.toml > defaults                           │
//! │     • whatsapp number and store name validated                          │
//! │                                                                         │
//! │  2. Initialize Logging ───────────────────────────────────────────────► │
//! │     • RUST_LOG > config log_filter > "info,up=debug"                    │
//! │                                                                         │
//! │  3. Create Session State ─────────────────────────────────────────────► │
//! │     • CartState: empty, closed cart                                     │
//! │                                                                         │
//! │  4. Serve UI Commands ────────────────────────────────────────────────► │
//! │     • commands::cart::*, commands::checkout::checkout                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use up_core::Product;
//! use up_storefront::{commands, Storefront, StorefrontConfig};
//!
//! let mut storefront = Storefront::new(StorefrontConfig::default());
//!
//! let mut urso = Product::new(1);
//! urso.name = Some("Urso".to_string());
//! urso.price = Some("49,90".to_string());
//! commands::cart::add_to_cart(storefront.cart_mut(), &urso);
//!
//! let checkout = storefront.checkout().unwrap();
//! assert!(checkout.url.starts_with("https://wa.me/5511999999999?text="));
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod state;

use tracing::info;
use tracing_subscriber::EnvFilter;

pub use config::{ConfigError, StorefrontConfig};
pub use error::{ApiError, ErrorCode};
pub use state::CartState;

use commands::checkout::CheckoutResponse;

/// Filter used when neither `RUST_LOG` nor the config sets one.
pub const DEFAULT_LOG_FILTER: &str = "info,up=debug";

/// Configuration plus one session's cart.
#[derive(Debug)]
pub struct Storefront {
    config: StorefrontConfig,
    cart: CartState,
}

impl Storefront {
    /// Creates a storefront session with an empty cart.
    pub fn new(config: StorefrontConfig) -> Self {
        Storefront {
            config,
            cart: CartState::new(),
        }
    }

    /// Loads configuration from the environment, starts logging and opens a
    /// session.
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = StorefrontConfig::load()?;
        init_tracing(config.log_filter.as_deref());

        info!(store_name = %config.store_name, "Starting UP storefront");
        Ok(Self::new(config))
    }

    pub fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    pub fn cart(&self) -> &CartState {
        &self.cart
    }

    pub fn cart_mut(&mut self) -> &mut CartState {
        &mut self.cart
    }

    /// Builds the checkout message and link for this session's cart.
    pub fn checkout(&self) -> Result<CheckoutResponse, ApiError> {
        commands::checkout::checkout(&self.cart, &self.config)
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=up_core=trace` - Show trace for the cart engine only
/// - Otherwise `fallback_filter`, or [`DEFAULT_LOG_FILTER`]
///
/// Returns `false` when a global subscriber was already installed.
pub fn init_tracing(fallback_filter: Option<&str>) -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::try_new(fallback_filter.unwrap_or(DEFAULT_LOG_FILTER))
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .is_ok()
}
