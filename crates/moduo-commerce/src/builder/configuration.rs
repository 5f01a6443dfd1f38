//! Shelf configuration model.

use serde::{Deserialize, Serialize};

use crate::builder::totals::{configuration_totals, Totals};
use crate::catalog::{Dimensions, ShelfComponent};
use crate::ids::{ComponentId, ConfigurationId};
use crate::money::Money;

/// Default display name for a new configuration.
pub const DEFAULT_NAME: &str = "Min hylle";

/// Optional 3D placement hint for the preview renderers. Ignored by the
/// totals calculator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// A component with quantity inside a configuration.
///
/// A configuration holds at most one item per component id; re-adding a
/// component accumulates its quantity instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigurationItem {
    /// Id of the referenced component.
    pub component_id: ComponentId,
    /// Snapshot of the component at the time it was added.
    pub component: ShelfComponent,
    /// How many of this component. Always at least 1.
    pub quantity: u32,
    /// Placement hint for the 3D preview.
    pub placement: Option<Placement>,
}

/// A named collection of shelf components with cached derived totals.
///
/// The cached totals always equal [`configuration_totals`] over the current
/// items; every mutation path recomputes them before returning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShelfConfiguration {
    /// Unique configuration identifier.
    pub id: ConfigurationId,
    /// Display name.
    pub name: String,
    /// Unix timestamp of creation.
    pub created_at: i64,
    /// Unix timestamp of last mutation.
    pub updated_at: i64,
    /// Items in insertion order.
    pub items: Vec<ConfigurationItem>,
    /// Cached bounding dimensions.
    pub total_dimensions: Dimensions,
    /// Cached weight in kilograms.
    pub total_weight: f64,
    /// Cached price in kroner.
    pub total_price: Money,
}

impl ShelfConfiguration {
    /// Create an empty configuration with floor dimensions and zero totals.
    pub fn new(name: impl Into<String>) -> Self {
        let now = current_timestamp();
        let totals = Totals::empty();
        Self {
            id: ConfigurationId::generate(),
            name: name.into(),
            created_at: now,
            updated_at: now,
            items: Vec::new(),
            total_dimensions: totals.dimensions,
            total_weight: totals.weight,
            total_price: totals.price,
        }
    }

    /// Get an item by component id.
    pub fn item(&self, component_id: &ComponentId) -> Option<&ConfigurationItem> {
        self.items.iter().find(|i| &i.component_id == component_id)
    }

    /// Total item count (sum of quantities).
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Check if the configuration has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Recompute and cache the derived totals from the current items.
    pub(crate) fn refresh_totals(&mut self) {
        let totals = configuration_totals(&self.items);
        self.total_weight = totals.weight;
        self.total_price = totals.price;
        self.total_dimensions = totals.dimensions;
    }

    /// Stamp the last-mutation timestamp.
    pub(crate) fn touch(&mut self) {
        self.updated_at = current_timestamp();
    }
}

/// Get current Unix timestamp.
fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_configuration_is_empty_with_floors() {
        let config = ShelfConfiguration::new(DEFAULT_NAME);
        assert_eq!(config.name, "Min hylle");
        assert!(config.is_empty());
        assert_eq!(config.total_weight, 0.0);
        assert_eq!(config.total_price, Money::ZERO);
        assert_eq!(config.total_dimensions.width, 60.0);
        assert_eq!(config.total_dimensions.height, 180.0);
        assert_eq!(config.total_dimensions.depth, 30.0);
    }

    #[test]
    fn test_fresh_ids() {
        let a = ShelfConfiguration::new("a");
        let b = ShelfConfiguration::new("b");
        assert_ne!(a.id, b.id);
    }
}
