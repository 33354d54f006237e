//! # State Module
//!
//! Session state owned by the storefront host.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────────┐        ┌──────────────────────────┐           │
//! │  │     CartState        │        │    StorefrontConfig      │           │
//! │  │                      │        │                          │           │
//! │  │  session_id (uuid)   │        │  whatsapp_number         │           │
//! │  │  Cart                │        │  store_name              │           │
//! │  └──────────────────────┘        └──────────────────────────┘           │
//! │                                                                         │
//! │  OWNERSHIP:                                                             │
//! │  • CartState: one per browsing session, owned by the UI context         │
//! │  • StorefrontConfig: read-only after startup                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! No locks: a session's cart is driven by a single UI event loop, and every
//! mutation completes before the next one is dispatched.

mod cart;

pub use cart::CartState;
