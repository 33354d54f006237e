//! # Cart State
//!
//! Holds the cart for one browsing session.
//!
//! ## Lifecycle
//! ```text
//! session start ──► CartState::new() (empty, closed)
//!                        │
//!                        ▼
//!                  commands mutate / query
//!                        │
//!                        ▼
//! session end ────► dropped (nothing persisted)
//! ```

use tracing::debug;
use up_core::Cart;
use uuid::Uuid;

/// A session's cart plus the id used to correlate its log lines.
#[derive(Debug)]
pub struct CartState {
    session_id: Uuid,
    cart: Cart,
}

impl CartState {
    /// Creates a new empty cart state for a fresh session.
    pub fn new() -> Self {
        let session_id = Uuid::new_v4();
        debug!(%session_id, "Cart session started");
        CartState {
            session_id,
            cart: Cart::new(),
        }
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    /// Read access to the cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Write access to the cart. Mutation still goes through `Cart`'s
    /// operations, which keep lines unique and quantities positive.
    pub fn cart_mut(&mut self) -> &mut Cart {
        &mut self.cart
    }
}

impl Default for CartState {
    fn default() -> Self {
        Self::new()
    }
}
