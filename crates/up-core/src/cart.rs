//! # Cart Store
//!
//! The shopping cart for one browsing session.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  UI Action               Operation              Cart Change             │
//! │  ─────────               ─────────              ───────────             │
//! │                                                                         │
//! │  "Adicionar" ──────────► add_to_cart() ───────► qty += 1 or push line   │
//! │                                                                         │
//! │  + / - buttons ────────► update_quantity() ───► qty = n (n <= 0 drops)  │
//! │                                                                         │
//! │  "Remover" ────────────► remove_from_cart() ──► line dropped            │
//! │                                                                         │
//! │  "Limpar carrinho" ────► clear_cart() ────────► lines cleared           │
//! │                                                                         │
//! │  Cart button / close ──► set_cart_open() ─────► panel flag only         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - At most one line per product id
//! - Every line has quantity >= 1; a line that would reach 0 is removed
//! - Lines keep insertion order
//! - A line is a snapshot: re-adding a product whose price changed in the
//!   catalog only bumps the quantity, the captured fields stay as they were
//!
//! Every operation is total. Unknown ids are ignored, non-positive quantities
//! mean removal, malformed prices count as zero.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use crate::money::Money;
use crate::types::{Product, ProductId};

// =============================================================================
// Cart Line
// =============================================================================

/// One product in the cart with its quantity.
///
/// Serializes as the product's fields plus `quantity` and `addedAt`, which is
/// the shape the cart panel renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartLine {
    /// Product fields captured when the line was created.
    #[serde(flatten)]
    pub product: Product,

    /// Always >= 1 while the line is in a cart.
    pub quantity: u32,

    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl CartLine {
    fn from_product(product: &Product) -> Self {
        CartLine {
            product: product.clone(),
            quantity: 1,
            added_at: Utc::now(),
        }
    }

    /// The line's identity.
    #[inline]
    pub fn id(&self) -> ProductId {
        self.product.id
    }

    /// Unit price captured at insertion (zero when malformed).
    #[inline]
    pub fn unit_price(&self) -> Money {
        self.product.unit_price()
    }

    /// Unit price × quantity.
    pub fn subtotal(&self) -> Money {
        self.unit_price() * self.quantity
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
///
/// Lines are private: the only way to change them is through the operations
/// below, which keeps the one-line-per-product invariant intact.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    lines: Vec<CartLine>,

    /// Whether the cart panel is shown. Independent of contents.
    is_open: bool,
}

impl Cart {
    /// Creates a new empty, closed cart.
    pub fn new() -> Self {
        Cart {
            lines: Vec::new(),
            is_open: false,
        }
    }

    /// Adds one unit of a product.
    ///
    /// ## Behavior
    /// - Product already in cart: quantity + 1, other fields untouched
    /// - Product not in cart: appended with quantity 1
    pub fn add_to_cart(&mut self, product: &Product) {
        if let Some(line) = self.line_mut(product.id) {
            line.quantity = line.quantity.saturating_add(1);
            debug!(product_id = product.id, quantity = line.quantity, "Cart line incremented");
            return;
        }

        self.lines.push(CartLine::from_product(product));
        debug!(product_id = product.id, "Cart line added");
    }

    /// Removes the line for `product_id`. No-op when absent.
    pub fn remove_from_cart(&mut self, product_id: ProductId) {
        let before = self.lines.len();
        self.lines.retain(|line| line.id() != product_id);

        if self.lines.len() != before {
            debug!(product_id, "Cart line removed");
        }
    }

    /// Sets the quantity of an existing line.
    ///
    /// ## Behavior
    /// - `quantity <= 0`: same as [`Cart::remove_from_cart`]
    /// - Product not in cart: no-op
    /// - Otherwise the line's quantity becomes `quantity`, clamped to `u32::MAX`
    pub fn update_quantity(&mut self, product_id: ProductId, quantity: i64) {
        if quantity <= 0 {
            self.remove_from_cart(product_id);
            return;
        }

        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        if let Some(line) = self.line_mut(product_id) {
            line.quantity = quantity;
            debug!(product_id, quantity, "Cart line quantity set");
        }
    }

    /// Empties the cart. The panel flag is left alone.
    pub fn clear_cart(&mut self) {
        self.lines.clear();
    }

    /// Sum of all line quantities.
    pub fn total_items(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    /// Sum of unit price × quantity over all lines.
    pub fn total_price(&self) -> Money {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    /// Shows or hides the cart panel.
    pub fn set_cart_open(&mut self, open: bool) {
        self.is_open = open;
    }

    /// Whether the cart panel is shown.
    pub fn is_cart_open(&self) -> bool {
        self.is_open
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// The line for `product_id`, if present.
    pub fn line(&self, product_id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.id() == product_id)
    }

    /// Number of distinct products (the count on the cart button).
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    fn line_mut(&mut self, product_id: ProductId) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|line| line.id() == product_id)
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Cart Totals
// =============================================================================

/// Cart totals summary for UI responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartTotals {
    pub line_count: u32,
    pub total_items: u64,
    pub total_price: Money,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            line_count: u32::try_from(cart.len()).unwrap_or(u32::MAX),
            total_items: cart.total_items(),
            total_price: cart.total_price(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn test_product(id: ProductId, name: &str, price: Option<&str>) -> Product {
        let mut product = Product::new(id);
        product.name = Some(name.to_string());
        product.price = price.map(str::to_string);
        product
    }

    #[test]
    fn test_add_same_product_increments_quantity() {
        let mut cart = Cart::new();
        let urso = test_product(1, "Urso", Some("49,90"));

        cart.add_to_cart(&urso);
        cart.add_to_cart(&urso);
        cart.add_to_cart(&urso);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.line(1).map(|l| l.quantity), Some(3));
        assert_eq!(cart.total_items(), 3);
    }

    #[test]
    fn test_lines_keep_insertion_order() {
        let mut cart = Cart::new();
        cart.add_to_cart(&test_product(3, "Stitch", Some("10,00")));
        cart.add_to_cart(&test_product(1, "Urso", Some("49,90")));
        cart.add_to_cart(&test_product(3, "Stitch", Some("10,00")));
        cart.add_to_cart(&test_product(2, "Mario", Some("5,00")));

        let ids: Vec<_> = cart.lines().iter().map(CartLine::id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_readd_keeps_original_snapshot() {
        let mut cart = Cart::new();
        cart.add_to_cart(&test_product(1, "Urso", Some("49,90")));
        cart.add_to_cart(&test_product(1, "Urso Gigante", Some("99,90")));

        let line = cart.line(1).unwrap();
        assert_eq!(line.quantity, 2);
        assert_eq!(line.product.name.as_deref(), Some("Urso"));
        assert_eq!(cart.total_price().cents(), 9980);
    }

    #[test]
    fn test_scenario_total_price() {
        let mut cart = Cart::new();
        let urso = test_product(1, "Urso", Some("49,90"));
        cart.add_to_cart(&urso);
        cart.update_quantity(1, 2);

        assert_eq!(cart.total_price(), Money::from_cents(9980));
    }

    #[test]
    fn test_update_quantity_negative_removes() {
        let mut cart = Cart::new();
        cart.add_to_cart(&test_product(1, "Urso", Some("49,90")));
        cart.update_quantity(1, -3);

        assert!(cart.line(1).is_none());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_quantity_up_and_down() {
        let mut cart = Cart::new();
        cart.add_to_cart(&test_product(1, "Urso", Some("49,90")));

        cart.update_quantity(1, 5);
        assert_eq!(cart.total_items(), 5);

        cart.update_quantity(1, 4);
        assert_eq!(cart.total_items(), 4);

        cart.update_quantity(1, 10_000);
        assert_eq!(cart.total_items(), 10_000);
    }

    #[test]
    fn test_update_quantity_clamps_to_u32() {
        let mut cart = Cart::new();
        cart.add_to_cart(&test_product(1, "Urso", Some("1,00")));

        cart.update_quantity(1, i64::MAX);
        assert_eq!(cart.line(1).map(|line| line.quantity), Some(u32::MAX));
    }

    #[test]
    fn test_unknown_ids_are_noops() {
        let mut cart = Cart::new();
        cart.add_to_cart(&test_product(1, "Urso", Some("49,90")));
        let before = cart.lines().to_vec();

        cart.remove_from_cart(99);
        cart.update_quantity(99, 4);
        cart.update_quantity(99, 0);

        assert_eq!(cart.lines(), before.as_slice());
    }

    #[test]
    fn test_malformed_prices_count_as_zero() {
        let mut cart = Cart::new();
        cart.add_to_cart(&test_product(1, "Sem preço", None));
        cart.add_to_cart(&test_product(2, "Preço ruim", Some("consulte")));
        cart.add_to_cart(&test_product(3, "Urso", Some("49,90")));

        assert_eq!(cart.total_price().cents(), 4990);
        assert_eq!(cart.total_items(), 3);
    }

    #[test]
    fn test_empty_cart_totals() {
        let cart = Cart::new();
        assert_eq!(cart.total_items(), 0);
        assert!(cart.total_price().is_zero());
        assert_eq!(
            CartTotals::from(&cart),
            CartTotals {
                line_count: 0,
                total_items: 0,
                total_price: Money::zero()
            }
        );
    }

    #[test]
    fn test_clear_leaves_visibility_alone() {
        let mut cart = Cart::new();
        cart.add_to_cart(&test_product(1, "Urso", Some("49,90")));
        cart.set_cart_open(true);

        cart.clear_cart();

        assert!(cart.is_empty());
        assert!(cart.is_cart_open());
    }

    #[test]
    fn test_visibility_does_not_touch_contents() {
        let mut cart = Cart::new();
        assert!(!cart.is_cart_open());

        cart.add_to_cart(&test_product(1, "Urso", Some("49,90")));
        cart.set_cart_open(true);
        cart.set_cart_open(false);

        assert_eq!(cart.total_items(), 1);
        assert!(!cart.is_cart_open());
    }

    #[test]
    fn test_cart_line_serializes_flat() {
        let mut cart = Cart::new();
        cart.add_to_cart(&test_product(1, "Urso", Some("49,90")));

        let json = serde_json::to_value(&cart.lines()[0]).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["name"], "Urso");
        assert_eq!(json["price"], "49,90");
        assert_eq!(json["quantity"], 1);
        assert!(json.get("addedAt").is_some());
    }

    #[derive(Debug, Clone)]
    enum Op {
        Add(ProductId),
        Remove(ProductId),
        Update(ProductId, i64),
        Clear,
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            4 => (0i64..6).prop_map(Op::Add),
            1 => (0i64..6).prop_map(Op::Remove),
            2 => ((0i64..6), (-3i64..8)).prop_map(|(id, qty)| Op::Update(id, qty)),
            1 => Just(Op::Clear),
        ]
    }

    fn catalog_product(id: ProductId) -> Product {
        test_product(id, &format!("Pelúcia {id}"), Some(format!("{},{}0", id + 1, id).as_str()))
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]

        #[test]
        fn invariant_repeated_adds_make_one_line(count in 1u32..50) {
            let mut cart = Cart::new();
            let product = catalog_product(1);
            for _ in 0..count {
                cart.add_to_cart(&product);
            }

            prop_assert_eq!(cart.len(), 1);
            prop_assert_eq!(cart.line(1).map(|l| l.quantity), Some(count));
        }

        #[test]
        fn invariant_lines_unique_and_positive(ops in prop::collection::vec(op_strategy(), 0..60)) {
            let mut cart = Cart::new();
            for op in ops {
                match op {
                    Op::Add(id) => cart.add_to_cart(&catalog_product(id)),
                    Op::Remove(id) => cart.remove_from_cart(id),
                    Op::Update(id, qty) => cart.update_quantity(id, qty),
                    Op::Clear => cart.clear_cart(),
                }

                let mut ids: Vec<_> = cart.lines().iter().map(CartLine::id).collect();
                ids.sort_unstable();
                ids.dedup();
                prop_assert_eq!(ids.len(), cart.len());
                prop_assert!(cart.lines().iter().all(|l| l.quantity >= 1));

                let summed: u64 = cart.lines().iter().map(|l| u64::from(l.quantity)).sum();
                prop_assert_eq!(cart.total_items(), summed);
            }
        }

        #[test]
        fn invariant_update_to_zero_equals_remove(
            adds in prop::collection::vec(0i64..6, 0..20),
            target in 0i64..6,
        ) {
            let mut via_update = Cart::new();
            let mut via_remove = Cart::new();
            for id in &adds {
                via_update.add_to_cart(&catalog_product(*id));
                via_remove.add_to_cart(&catalog_product(*id));
            }
            via_remove.remove_from_cart(target);
            via_update.update_quantity(target, 0);

            // addedAt differs between the two carts, compare identity and quantity
            let shape = |cart: &Cart| -> Vec<(ProductId, u32)> {
                cart.lines().iter().map(|l| (l.id(), l.quantity)).collect()
            };
            prop_assert_eq!(shape(&via_update), shape(&via_remove));
        }

        #[test]
        fn invariant_total_price_order_independent(
            ids in prop::collection::vec(0i64..6, 0..30).prop_shuffle(),
        ) {
            let mut forward = Cart::new();
            let mut backward = Cart::new();
            for id in &ids {
                forward.add_to_cart(&catalog_product(*id));
            }
            for id in ids.iter().rev() {
                backward.add_to_cart(&catalog_product(*id));
            }

            prop_assert_eq!(forward.total_price(), backward.total_price());
            prop_assert_eq!(forward.total_items(), backward.total_items());
        }
    }
}
