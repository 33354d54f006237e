//! # Order Message Builder
//!
//! Renders the cart into the text the customer sends to the store.
//!
//! ## Message Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  🧸 *PEDIDO - UP Universo das Pelúcias*          header                 │
//! │                                                                         │
//! │  ━━━━━━━━━━━━━━━━━━━━━━                          separator              │
//! │                                                                         │
//! │  *1. Urso*                                       one block per line,    │
//! │     Quantidade: 2                                in cart order          │
//! │     Preço unitário: R$ 49,90                                            │
//! │     Subtotal: R$ 99,80                                                  │
//! │                                                                         │
//! │  ━━━━━━━━━━━━━━━━━━━━━━                          separator              │
//! │                                                                         │
//! │  💰 *TOTAL: R$ 99,80*                            cart total             │
//! │                                                                         │
//! │  Por favor, confirme meu pedido! 😊              closing                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The text is sent verbatim, so the layout is an exact contract. It is built
//! as an ordered list of lines joined with `\n` (no trailing newline) so tests
//! can compare it line by line. An empty cart still renders header, both
//! separators, a zero total and the closing line.

use std::fmt;

use crate::cart::{Cart, CartLine};
use crate::money::Money;

/// Store name used in the header when none is configured.
pub const DEFAULT_STORE_NAME: &str = "UP Universo das Pelúcias";

/// Fixed-width separator line (22 × U+2501).
pub const SEPARATOR: &str = "━━━━━━━━━━━━━━━━━━━━━━";

/// Closing confirmation phrase.
pub const CLOSING_LINE: &str = "Por favor, confirme meu pedido! 😊";

/// A rendered order message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderMessage {
    lines: Vec<String>,
}

impl OrderMessage {
    /// Renders `cart` under the default store name.
    pub fn from_cart(cart: &Cart) -> Self {
        Self::for_store(DEFAULT_STORE_NAME, cart.lines(), cart.total_price())
    }

    /// Renders cart lines with an explicit store name and total.
    ///
    /// `total` is taken as given; pass [`Cart::total_price`] for the usual
    /// message.
    pub fn for_store(store_name: &str, items: &[CartLine], total: Money) -> Self {
        // header, separator, total and closing blocks + 5 lines per item
        let mut lines = Vec::with_capacity(9 + items.len() * 5);

        lines.push(format!("🧸 *PEDIDO - {store_name}*"));
        lines.push(String::new());
        lines.push(SEPARATOR.to_string());
        lines.push(String::new());

        for (index, item) in items.iter().enumerate() {
            let unit_price = item.unit_price();
            lines.push(format!("*{}. {}*", index + 1, item.product.display_name()));
            lines.push(format!("   Quantidade: {}", item.quantity));
            lines.push(format!("   Preço unitário: {unit_price}"));
            lines.push(format!("   Subtotal: {}", unit_price * item.quantity));
            lines.push(String::new());
        }

        lines.push(SEPARATOR.to_string());
        lines.push(String::new());
        lines.push(format!("💰 *TOTAL: {total}*"));
        lines.push(String::new());
        lines.push(CLOSING_LINE.to_string());

        OrderMessage { lines }
    }

    /// The message as individual lines.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The message as sent.
    pub fn render(&self) -> String {
        self.lines.join("\n")
    }
}

impl fmt::Display for OrderMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Renders the order message for `cart` under the default store name.
pub fn generate_message(cart: &Cart) -> String {
    OrderMessage::from_cart(cart).render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Product;

    fn product(id: i64, name: Option<&str>, price: Option<&str>) -> Product {
        let mut product = Product::new(id);
        product.name = name.map(str::to_string);
        product.price = price.map(str::to_string);
        product
    }

    #[test]
    fn test_single_line_message_exact() {
        let mut cart = Cart::new();
        cart.add_to_cart(&product(1, Some("Urso"), Some("49,90")));
        cart.update_quantity(1, 2);

        let expected = "🧸 *PEDIDO - UP Universo das Pelúcias*\n\
                        \n\
                        ━━━━━━━━━━━━━━━━━━━━━━\n\
                        \n\
                        *1. Urso*\n   \
                        Quantidade: 2\n   \
                        Preço unitário: R$ 49,90\n   \
                        Subtotal: R$ 99,80\n\
                        \n\
                        ━━━━━━━━━━━━━━━━━━━━━━\n\
                        \n\
                        💰 *TOTAL: R$ 99,80*\n\
                        \n\
                        Por favor, confirme meu pedido! 😊";

        assert_eq!(generate_message(&cart), expected);
        assert!(generate_message(&cart).contains("Subtotal: R$ 99,80"));
    }

    #[test]
    fn test_empty_cart_still_renders() {
        let message = generate_message(&Cart::new());

        assert_eq!(
            message,
            [
                "🧸 *PEDIDO - UP Universo das Pelúcias*",
                "",
                SEPARATOR,
                "",
                SEPARATOR,
                "",
                "💰 *TOTAL: R$ 0,00*",
                "",
                CLOSING_LINE,
            ]
            .join("\n")
        );
        assert!(message.contains("TOTAL: R$ 0,00"));
    }

    #[test]
    fn test_items_numbered_in_cart_order() {
        let mut cart = Cart::new();
        cart.add_to_cart(&product(9, Some("Stitch"), Some("10,00")));
        cart.add_to_cart(&product(4, Some("Mario"), Some("5,5")));
        cart.add_to_cart(&product(9, Some("Stitch"), Some("10,00")));

        let message = OrderMessage::from_cart(&cart);
        let titles: Vec<_> = message
            .lines()
            .iter()
            .filter(|line| line.starts_with('*') && !line.contains("TOTAL"))
            .cloned()
            .collect();

        assert_eq!(titles, vec!["*1. Stitch*", "*2. Mario*"]);
        assert!(message.render().contains("   Preço unitário: R$ 5,50"));
        assert!(message.render().contains("💰 *TOTAL: R$ 25,50*"));
    }

    #[test]
    fn test_null_fields_render_with_fallbacks() {
        let mut cart = Cart::new();
        cart.add_to_cart(&product(1, None, None));

        let message = generate_message(&cart);
        assert!(message.contains("*1. Produto*"));
        assert!(message.contains("   Preço unitário: R$ 0,00"));
        assert!(message.contains("   Subtotal: R$ 0,00"));
    }

    #[test]
    fn test_item_name_rendered_verbatim() {
        let mut cart = Cart::new();
        cart.add_to_cart(&product(1, Some(" Urso  Gigante "), Some("10,00")));

        let message = OrderMessage::from_cart(&cart);
        assert_eq!(message.lines()[4], "*1.  Urso  Gigante *");
    }

    #[test]
    fn test_custom_store_name_and_total() {
        let message = OrderMessage::for_store("Loja Teste", &[], Money::from_cents(1234));

        assert_eq!(message.lines()[0], "🧸 *PEDIDO - Loja Teste*");
        assert!(message.to_string().contains("💰 *TOTAL: R$ 12,34*"));
        assert!(!message.render().ends_with('\n'));
    }
}
