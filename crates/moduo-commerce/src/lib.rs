//! Shelf configuration, cart, and checkout logic for the Moduo storefront.
//!
//! This crate provides the storefront core behind the Moduo shelf builder:
//!
//! - **Catalog**: the fixed table of purchasable shelf parts
//! - **Builder**: the in-progress shelf configuration with derived totals
//! - **Cart**: line items, cached aggregates, and the shipping estimator
//! - **Checkout**: simulated order placement and confirmation
//!
//! # Example
//!
//! ```rust,ignore
//! use moduo_commerce::prelude::*;
//!
//! let catalog = standard_catalog();
//! let mut builder = BuilderStore::new();
//! builder.add_component(&catalog[0], 2);
//!
//! let mut cart = CartStore::new();
//! if let Some(config) = builder.configuration() {
//!     cart.add_configuration(config);
//! }
//!
//! let estimate = cart.estimate_shipping("0560");
//! println!("Standard: {}", estimate.options[0].price);
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod builder;
pub mod cart;
pub mod catalog;
pub mod checkout;

pub use error::CommerceError;
pub use ids::*;
pub use money::Money;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::Money;

    // Catalog
    pub use crate::catalog::{
        standard_catalog, ComponentKind, Dimensions, Finish, ShelfComponent, WoodType,
    };

    // Builder
    pub use crate::builder::{
        configuration_totals, BuilderStore, ConfigurationItem, Placement, ShelfConfiguration,
        Totals,
    };

    // Cart
    pub use crate::cart::{
        Cart, CartLine, CartLineSource, CartStore, DayRange, Parcel, ServiceLevel,
        ShippingEstimate, ShippingOption,
    };

    // Checkout
    pub use crate::checkout::{
        CheckoutFlow, CheckoutStep, Order, OrderStatus, PaymentMethod, ShippingAddress,
    };
}
