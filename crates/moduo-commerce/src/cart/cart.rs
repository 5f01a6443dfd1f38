//! Cart and line item types.

use serde::{Deserialize, Serialize};

use crate::builder::ShelfConfiguration;
use crate::catalog::{Dimensions, ShelfComponent};
use crate::ids::CartLineId;
use crate::money::Money;

/// What a cart line refers to: a whole configuration or a single part.
///
/// Both payloads are independent snapshots; mutating the source after the
/// line was created does not affect the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum CartLineSource {
    /// A whole shelf configuration.
    Configuration { configuration: ShelfConfiguration },
    /// A single catalog component.
    Component { component: ShelfComponent },
}

impl CartLineSource {
    /// Display name of the underlying purchase.
    pub fn name(&self) -> &str {
        match self {
            CartLineSource::Configuration { configuration } => &configuration.name,
            CartLineSource::Component { component } => &component.name,
        }
    }

    /// Weight of one unit in kilograms.
    pub fn unit_weight(&self) -> f64 {
        match self {
            CartLineSource::Configuration { configuration } => configuration.total_weight,
            CartLineSource::Component { component } => component.weight,
        }
    }

    /// Bounding dimensions of one unit.
    pub fn dimensions(&self) -> Dimensions {
        match self {
            CartLineSource::Configuration { configuration } => configuration.total_dimensions,
            CartLineSource::Component { component } => component.dimensions,
        }
    }
}

/// An entry in the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    /// Unique line identifier.
    pub id: CartLineId,
    /// The purchased configuration or component.
    #[serde(flatten)]
    pub source: CartLineSource,
    /// Quantity. Always at least 1.
    pub quantity: u32,
    /// Unit price captured at insertion time; never re-read from the
    /// catalog or configuration afterwards.
    pub price: Money,
}

impl CartLine {
    /// Line subtotal (unit price times quantity).
    pub fn subtotal(&self) -> Money {
        self.price * self.quantity
    }
}

/// The purchase cart with cached aggregates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    /// Lines in insertion order.
    pub items: Vec<CartLine>,
    /// Cached sum of quantities.
    pub total_items: u32,
    /// Cached sum of line subtotals.
    pub total_price: Money,
    /// Shipping cost chosen by the customer, 0 until set.
    pub shipping_cost: Money,
    /// Cached `total_price + shipping_cost`.
    pub grand_total: Money,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            total_items: 0,
            total_price: Money::ZERO,
            shipping_cost: Money::ZERO,
            grand_total: Money::ZERO,
        }
    }

    /// Check if the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get a line by id.
    pub fn line(&self, id: &CartLineId) -> Option<&CartLine> {
        self.items.iter().find(|l| &l.id == id)
    }

    /// Recompute every cached aggregate from the line items.
    pub(crate) fn recompute(&mut self) {
        self.total_items = self.items.iter().map(|l| l.quantity).sum();
        self.total_price = self.items.iter().map(|l| l.subtotal()).sum();
        self.grand_total = self.total_price + self.shipping_cost;
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}
