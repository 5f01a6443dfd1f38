//! Shelf builder: configuration model, totals calculator, and store.

mod configuration;
mod store;
pub mod totals;

pub use configuration::{ConfigurationItem, Placement, ShelfConfiguration, DEFAULT_NAME};
pub use store::{BuilderStore, STORAGE_KEY};
pub use totals::{configuration_totals, Totals};
