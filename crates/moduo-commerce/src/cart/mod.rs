//! Cart: line items, cached aggregates, and the shipping estimator.

#[allow(clippy::module_inception)]
mod cart;
mod shipping;
mod store;

pub use cart::{Cart, CartLine, CartLineSource};
pub use shipping::{
    estimate, DayRange, Parcel, ServiceLevel, ShippingEstimate, ShippingOption,
    FREE_SHIPPING_THRESHOLD, KG_PER_PACKAGE,
};
pub use store::{CartStore, STORAGE_KEY};
