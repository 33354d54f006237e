//! # Cart Commands
//!
//! Commands for cart manipulation.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐                         │
//! │  │  Empty   │────►│ In Cart  │────►│ Checkout │ (cart kept as is)       │
//! │  │  Cart    │     │          │     │  link    │                         │
//! │  └──────────┘     └──────────┘     └──────────┘                         │
//! │                        │                                                │
//! │                   add_to_cart                                           │
//! │                   update_cart_item                                      │
//! │                   remove_from_cart                                      │
//! │                        │                                                │
//! │                        ▼                                                │
//! │                   clear_cart ──────────────────────►  (back to empty)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! None of these commands can fail, so they return the response directly.

use serde::Serialize;
use tracing::debug;
use up_core::{Cart, CartLine, CartTotals, Product, ProductId};

use crate::state::CartState;

/// Cart response including lines, totals and panel state.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub lines: Vec<CartLine>,
    pub totals: CartTotals,
    pub is_open: bool,
}

impl From<&Cart> for CartResponse {
    fn from(cart: &Cart) -> Self {
        CartResponse {
            lines: cart.lines().to_vec(),
            totals: CartTotals::from(cart),
            is_open: cart.is_cart_open(),
        }
    }
}

/// Gets the current cart contents.
pub fn get_cart(state: &CartState) -> CartResponse {
    debug!(session_id = %state.session_id(), "get_cart command");
    CartResponse::from(state.cart())
}

/// Adds one unit of `product` to the cart.
///
/// ## Behavior
/// - If product already in cart: quantity increases by one
/// - If product not in cart: added as new line with the product's current fields
pub fn add_to_cart(state: &mut CartState, product: &Product) -> CartResponse {
    debug!(session_id = %state.session_id(), product_id = product.id, "add_to_cart command");

    state.cart_mut().add_to_cart(product);
    CartResponse::from(state.cart())
}

/// Sets the quantity of a line.
///
/// ## Behavior
/// - Quantity <= 0: removes the line
/// - Product not in cart: nothing changes
pub fn update_cart_item(state: &mut CartState, product_id: ProductId, quantity: i64) -> CartResponse {
    debug!(
        session_id = %state.session_id(),
        product_id,
        quantity,
        "update_cart_item command"
    );

    state.cart_mut().update_quantity(product_id, quantity);
    CartResponse::from(state.cart())
}

/// Removes a line from the cart.
pub fn remove_from_cart(state: &mut CartState, product_id: ProductId) -> CartResponse {
    debug!(session_id = %state.session_id(), product_id, "remove_from_cart command");

    state.cart_mut().remove_from_cart(product_id);
    CartResponse::from(state.cart())
}

/// Clears all lines. The panel stays open or closed as it was.
pub fn clear_cart(state: &mut CartState) -> CartResponse {
    debug!(session_id = %state.session_id(), "clear_cart command");

    state.cart_mut().clear_cart();
    CartResponse::from(state.cart())
}

/// Opens or closes the cart panel.
pub fn set_cart_open(state: &mut CartState, open: bool) -> CartResponse {
    debug!(session_id = %state.session_id(), open, "set_cart_open command");

    state.cart_mut().set_cart_open(open);
    CartResponse::from(state.cart())
}
