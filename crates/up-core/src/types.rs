//! # Domain Types
//!
//! The product record as the catalog hands it to the storefront.
//!
//! ## Record Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                           Product                                       │
//! │  ─────────────────────────────────────────────────────────────────────  │
//! │  id             i64        unique, the only required field              │
//! │  name           text?      display name                                 │
//! │  price          text?      "49,90" (comma decimal)                      │
//! │  originalPrice  text?      strikethrough price, same format             │
//! │  image          text?      JSON array of URLs, or a single URL          │
//! │  category       text?                                                   │
//! │  subcategory    text?      franchise slug ("stitch", "mario", ...)      │
//! │  created_at     timestamp? catalog ordering                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every field except `id` may be null. Nothing in this crate rejects a record
//! for a missing field: prices fall back to zero, names to [`UNNAMED_PRODUCT`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;
use ts_rs::TS;

use crate::money::{parse_amount, Money};

/// Name shown for products whose name is null or blank.
pub const UNNAMED_PRODUCT: &str = "Produto";

/// Catalog product identifier.
pub type ProductId = i64;

// =============================================================================
// Product
// =============================================================================

/// A product record from the catalog. Read-only from the cart's perspective.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Unique identifier.
    pub id: ProductId,

    /// Display name.
    #[serde(default)]
    pub name: Option<String>,

    /// Unit price as entered in the admin screen, comma decimal.
    #[serde(default)]
    pub price: Option<String>,

    /// Strikethrough price shown next to a promotional price.
    #[serde(default, rename = "originalPrice")]
    pub original_price: Option<String>,

    /// Image reference: a JSON array of URLs or a single URL.
    #[serde(default)]
    pub image: Option<String>,

    #[serde(default)]
    pub category: Option<String>,

    #[serde(default)]
    pub subcategory: Option<String>,

    /// When the record was created in the catalog.
    #[serde(default)]
    #[ts(as = "Option<String>")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Product {
    /// Creates a product with only an id; every other field is null.
    pub fn new(id: ProductId) -> Self {
        Product {
            id,
            name: None,
            price: None,
            original_price: None,
            image: None,
            category: None,
            subcategory: None,
            created_at: None,
        }
    }

    /// Returns the unit price, zero when absent or malformed.
    #[inline]
    pub fn unit_price(&self) -> Money {
        parse_amount(self.price.as_deref())
    }

    /// Returns the strikethrough price, or `None` when the field is absent.
    pub fn original_price(&self) -> Option<Money> {
        self.original_price
            .as_deref()
            .map(|raw| parse_amount(Some(raw)))
    }

    /// Returns the name to display, falling back to [`UNNAMED_PRODUCT`].
    ///
    /// A non-blank name is returned exactly as stored, surrounding whitespace
    /// included.
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => UNNAMED_PRODUCT,
        }
    }

    /// Returns the usable image URLs for this product.
    ///
    /// ## Accepted Shapes
    /// - `["https://.../a.png", "/assets/b.png"]` - entries kept in order
    /// - `"https://.../a.png"` (not JSON) - treated as a one-element list
    ///
    /// Entries that are not strings, or do not start with `http` or `/`,
    /// are dropped. Anything unreadable yields an empty list.
    pub fn images(&self) -> Vec<String> {
        let raw = match self.image.as_deref().map(str::trim) {
            Some(raw) if !raw.is_empty() => raw,
            _ => return Vec::new(),
        };

        match serde_json::from_str::<Value>(raw) {
            Ok(Value::Array(entries)) => entries
                .into_iter()
                .filter_map(|entry| match entry {
                    Value::String(url) if is_image_url(&url) => Some(url),
                    _ => None,
                })
                .collect(),
            Ok(_) => Vec::new(),
            Err(_) if is_image_url(raw) => vec![raw.to_string()],
            Err(err) => {
                warn!(product_id = self.id, error = %err, "Unreadable image list");
                Vec::new()
            }
        }
    }
}

fn is_image_url(candidate: &str) -> bool {
    candidate.starts_with("http") || candidate.starts_with('/')
}

// =============================================================================
// Unit Tests
// =============================================================================
