//! # Commands
//!
//! The operations the storefront UI invokes. Each one takes the session state
//! it needs and returns a serializable response.
//!
//! - [`cart`] - add/update/remove/clear, panel visibility, current cart
//! - [`checkout`] - order message and WhatsApp link

pub mod cart;
pub mod checkout;
