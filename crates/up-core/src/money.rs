//! # Money Module
//!
//! Provides the `Money` type and the parser/formatter for the storefront's
//! comma-decimal price strings.
//!
//! ## Price Strings In, Integer Cents Inside
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Product record          parse_amount           Cart math               │
//! │  ──────────────          ────────────           ─────────               │
//! │  price: "49,90"   ──►    Money(4990)     ──►    4990 × 2 = 9980         │
//! │  price: null      ──►    Money(0)                                       │
//! │  price: "abc"     ──►    Money(0)   (zero-coercion, logged at warn)     │
//! │                                                                         │
//! │  Display                 format_amount                                  │
//! │  ───────                 ─────────────                                  │
//! │  Money(9980)      ──►    "99,80"   ──►  "R$ 99,80"                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Parsing snaps to the nearest cent once. Every sum and product after that
//! is exact integer arithmetic, so totals never drift and never depend on the
//! order lines were added in.
//!
//! ## Usage
//! ```rust
//! use up_core::money::{format_amount, parse_amount};
//!
//! let price = parse_amount(Some("49,90"));
//! assert_eq!(price.cents(), 4990);
//! assert_eq!(format_amount(price * 2), "99,80");
//!
//! // Absent or malformed input is zero, never an error
//! assert!(parse_amount(None).is_zero());
//! assert!(parse_amount(Some("sob consulta")).is_zero());
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub};
use tracing::warn;
use ts_rs::TS;

/// Currency prefix shown before every amount (Brazilian real).
pub const CURRENCY_PREFIX: &str = "R$";

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in centavos (1/100 of a real).
///
/// ## Design Decisions
/// - **i64 (signed)**: a malformed record may carry a negative price; the
///   type represents it instead of hiding it
/// - **Single field tuple struct**: zero-cost abstraction over i64
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from centavos.
    ///
    /// ## Example
    /// ```rust
    /// use up_core::money::Money;
    ///
    /// let price = Money::from_cents(4990); // R$ 49,90
    /// assert_eq!(price.cents(), 4990);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in centavos.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole reais portion (sign preserved).
    ///
    /// ```rust
    /// use up_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(4990).reais(), 49);
    /// assert_eq!(Money::from_cents(-550).reais(), -5);
    /// ```
    #[inline]
    pub const fn reais(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the centavos portion (always 0-99).
    #[inline]
    pub const fn centavos(&self) -> u64 {
        self.0.unsigned_abs() % 100
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies a unit price by a line quantity.
    ///
    /// ## Example
    /// ```rust
    /// use up_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(4990);
    /// assert_eq!(unit_price.multiply_quantity(2).cents(), 9980);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: u32) -> Self {
        Money(self.0.saturating_mul(qty as i64))
    }
}

// =============================================================================
// Parser / Formatter
// =============================================================================

/// Parses a comma-decimal price string into [`Money`].
///
/// ## Rules
/// - `None`, empty or whitespace-only input is zero
/// - Surrounding whitespace is ignored
/// - Only the FIRST comma becomes the decimal point (`"1.234,50"` is malformed)
/// - Anything that still isn't a finite number is zero
/// - The value is rounded to the nearest centavo, halves away from zero
///
/// This function never fails. Malformed input is logged at `warn` so bad
/// catalog records show up in the logs instead of in a failed checkout.
pub fn parse_amount(raw: Option<&str>) -> Money {
    let Some(raw) = raw else {
        return Money::zero();
    };

    let normalized = raw.trim().replacen(',', ".", 1);
    if normalized.is_empty() {
        return Money::zero();
    }

    match normalized.parse::<f64>() {
        Ok(value) if value.is_finite() => Money::from_cents(cents_from_f64(value)),
        _ => {
            warn!(raw = %raw, "Unparseable amount coerced to zero");
            Money::zero()
        }
    }
}

/// Formats an amount with exactly two decimals and a comma separator.
///
/// ```rust
/// use up_core::money::{format_amount, Money};
///
/// assert_eq!(format_amount(Money::from_cents(123450)), "1234,50");
/// assert_eq!(format_amount(Money::from_cents(-550)), "-5,50");
/// assert_eq!(format_amount(Money::zero()), "0,00");
/// ```
pub fn format_amount(value: Money) -> String {
    let sign = if value.is_negative() { "-" } else { "" };
    format!(
        "{}{},{:02}",
        sign,
        value.cents().unsigned_abs() / 100,
        value.centavos()
    )
}

/// Formats a raw price field the way the cart panel shows it: `R$ 49,90`.
pub fn format_price_label(raw: Option<&str>) -> String {
    parse_amount(raw).to_string()
}

/// Rounds a decimal value to whole centavos (half away from zero).
fn cents_from_f64(value: f64) -> i64 {
    // `as` saturates at the i64 bounds
    (value * 100.0).round() as i64
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Displays as `R$ 49,90`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", CURRENCY_PREFIX, format_amount(*self))
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0.saturating_sub(other.0))
    }
}

/// Multiplication by a line quantity.
impl Mul<u32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: u32) -> Self {
        self.multiply_quantity(qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
