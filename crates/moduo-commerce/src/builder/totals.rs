//! Aggregate totals for a shelf configuration.

use serde::{Deserialize, Serialize};

use crate::builder::ConfigurationItem;
use crate::catalog::{ComponentKind, Dimensions};
use crate::money::Money;

/// Bounding-box fallback when no item contributes to an axis, in centimeters.
pub const MIN_WIDTH_CM: f64 = 60.0;
pub const MIN_HEIGHT_CM: f64 = 180.0;
pub const MIN_DEPTH_CM: f64 = 30.0;

/// Derived weight, price, and bounding dimensions for a list of items.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Totals {
    /// Total weight in kilograms, rounded to two decimals.
    pub weight: f64,
    /// Total price in whole kroner.
    pub price: Money,
    /// Approximate bounding box of the assembled structure.
    pub dimensions: Dimensions,
}

impl Totals {
    /// Totals of an empty configuration: zero weight and price, floor
    /// dimensions.
    pub fn empty() -> Self {
        configuration_totals(&[])
    }
}

/// Compute aggregate weight, price, and bounding dimensions.
///
/// The dimension rule is a deliberate approximation of how the parts stack,
/// not a layout solver. Uprights stand side by side, so each one widens the
/// structure by its own width and the tallest sets the height. Shelves and
/// bases span between uprights and only stretch the footprint. Everything
/// else just grows the bounding box where it sticks out.
pub fn configuration_totals(items: &[ConfigurationItem]) -> Totals {
    let mut weight = 0.0;
    let mut price = Money::ZERO;
    let mut width = 0.0_f64;
    let mut height = 0.0_f64;
    let mut depth = 0.0_f64;

    for item in items {
        let quantity = f64::from(item.quantity);
        weight += item.component.weight * quantity;
        price += item.component.price * item.quantity;

        let dims = item.component.dimensions;
        match item.component.kind {
            ComponentKind::Upright => {
                height = height.max(dims.height);
                width += dims.width * quantity;
            }
            ComponentKind::Shelf | ComponentKind::Base => {
                width = width.max(dims.width);
                depth = depth.max(dims.depth);
            }
            _ => {
                width = width.max(dims.width);
                height = height.max(dims.height);
                depth = depth.max(dims.depth);
            }
        }
    }

    Totals {
        weight: round_weight(weight),
        price,
        dimensions: Dimensions {
            width: if width == 0.0 { MIN_WIDTH_CM } else { width },
            height: if height == 0.0 { MIN_HEIGHT_CM } else { height },
            depth: if depth == 0.0 { MIN_DEPTH_CM } else { depth },
        },
    }
}

/// Round a weight in kilograms to two decimals.
fn round_weight(kg: f64) -> f64 {
    (kg * 100.0).round() / 100.0
}
