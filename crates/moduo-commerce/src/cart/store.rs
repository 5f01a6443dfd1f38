//! Cart store: owns the purchase cart.

use moduo_storage::KvStore;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::builder::ShelfConfiguration;
use crate::cart::cart::{Cart, CartLine, CartLineSource};
use crate::cart::shipping::{self, ShippingEstimate};
use crate::catalog::ShelfComponent;
use crate::ids::CartLineId;
use crate::money::Money;

/// Storage key for the persisted cart.
pub const STORAGE_KEY: &str = "moduo-cart";

/// Persisted cart state. Unlike the builder, the whole cart (including the
/// chosen shipping cost) survives the session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct PersistedState {
    cart: Cart,
}

/// Owns the purchase cart.
///
/// Every mutation recomputes the cached aggregates and then writes the
/// whole cart behind, best-effort.
pub struct CartStore {
    cart: Cart,
    storage: Option<KvStore>,
}

impl CartStore {
    /// Create a store with no persistence backend.
    pub fn new() -> Self {
        Self {
            cart: Cart::new(),
            storage: None,
        }
    }

    /// Create a store that loads and persists the cart through the given
    /// backend. A missing or unreadable document yields an empty cart.
    pub fn with_storage(storage: KvStore) -> Self {
        let cart = match storage.get::<PersistedState>(STORAGE_KEY) {
            Ok(Some(state)) => state.cart,
            Ok(None) => Cart::new(),
            Err(e) => {
                warn!(error = %e, "failed to load cart, starting empty");
                Cart::new()
            }
        };
        Self {
            cart,
            storage: Some(storage),
        }
    }

    /// The current cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Add a whole configuration as a line item.
    ///
    /// The configuration is snapshot-copied and its current total price is
    /// captured as the line's unit price. Adding the same configuration id
    /// again increments the existing line instead.
    pub fn add_configuration(&mut self, config: &ShelfConfiguration) {
        let existing = self.cart.items.iter_mut().find(|l| {
            matches!(&l.source, CartLineSource::Configuration { configuration }
                if configuration.id == config.id)
        });
        match existing {
            Some(line) => line.quantity += 1,
            None => self.cart.items.push(CartLine {
                id: CartLineId::generate(),
                source: CartLineSource::Configuration {
                    configuration: config.clone(),
                },
                quantity: 1,
                price: config.total_price,
            }),
        }
        debug!(configuration = %config.id, "configuration added to cart");
        self.commit();
    }

    /// Add a single component as a line item.
    ///
    /// Adding the same component id again increments the existing line.
    /// A zero quantity is a no-op.
    pub fn add_component(&mut self, component: &ShelfComponent, quantity: u32) {
        if quantity == 0 {
            return;
        }
        let existing = self.cart.items.iter_mut().find(|l| {
            matches!(&l.source, CartLineSource::Component { component: c }
                if c.id == component.id)
        });
        match existing {
            Some(line) => line.quantity += quantity,
            None => self.cart.items.push(CartLine {
                id: CartLineId::generate(),
                source: CartLineSource::Component {
                    component: component.clone(),
                },
                quantity,
                price: component.price,
            }),
        }
        debug!(component = %component.id, quantity, "component added to cart");
        self.commit();
    }

    /// Drop a line. No-op for an unknown id.
    pub fn remove_line(&mut self, line_id: &CartLineId) {
        self.cart.items.retain(|l| &l.id != line_id);
        self.commit();
    }

    /// Replace a line's quantity. A quantity below 1 removes the line.
    pub fn update_quantity(&mut self, line_id: &CartLineId, quantity: u32) {
        if quantity < 1 {
            self.remove_line(line_id);
            return;
        }
        if let Some(line) = self.cart.items.iter_mut().find(|l| &l.id == line_id) {
            line.quantity = quantity;
        }
        self.commit();
    }

    /// Empty the cart and reset the shipping cost.
    pub fn clear(&mut self) {
        self.cart = Cart::new();
        self.commit();
    }

    /// Set the chosen shipping cost and recompute the grand total.
    pub fn set_shipping_cost(&mut self, cost: Money) {
        self.cart.shipping_cost = cost;
        self.commit();
    }

    /// Quote shipping for the current cart contents. Read-only: callers
    /// apply a chosen option through [`CartStore::set_shipping_cost`].
    pub fn estimate_shipping(&self, postal_code: &str) -> ShippingEstimate {
        shipping::estimate(&self.cart, postal_code)
    }

    /// Recompute cached aggregates, then write the cart behind. A failed
    /// write is logged and never surfaces to the caller.
    fn commit(&mut self) {
        self.cart.recompute();
        let Some(storage) = &self.storage else {
            return;
        };
        let state = PersistedState {
            cart: self.cart.clone(),
        };
        if let Err(e) = storage.set(STORAGE_KEY, &state) {
            warn!(error = %e, "failed to persist cart");
        }
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}
