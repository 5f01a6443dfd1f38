//! Builder store: owns the in-progress configuration and the saved list.

use moduo_storage::KvStore;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::builder::configuration::{
    ConfigurationItem, ShelfConfiguration, DEFAULT_NAME,
};
use crate::catalog::ShelfComponent;
use crate::ids::{ComponentId, ConfigurationId};

/// Storage key for the persisted builder state.
pub const STORAGE_KEY: &str = "moduo-builder";

/// Persisted subset of the builder state.
///
/// The active in-progress configuration deliberately does not survive a
/// session; only explicit saves do.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct PersistedState {
    saved_configurations: Vec<ShelfConfiguration>,
}

/// Owns the single in-progress shelf configuration and the saved list.
///
/// No operation errors for a missing active configuration: adds create one
/// implicitly, everything else is a silent no-op. Persistence is
/// best-effort and never fails or rolls back an in-memory mutation.
pub struct BuilderStore {
    configuration: Option<ShelfConfiguration>,
    saved: Vec<ShelfConfiguration>,
    dirty: bool,
    storage: Option<KvStore>,
}

impl BuilderStore {
    /// Create a store with no persistence backend.
    pub fn new() -> Self {
        Self {
            configuration: None,
            saved: Vec::new(),
            dirty: false,
            storage: None,
        }
    }

    /// Create a store that loads and persists the saved list through the
    /// given backend. A missing or unreadable document yields an empty
    /// list.
    pub fn with_storage(storage: KvStore) -> Self {
        let saved = match storage.get::<PersistedState>(STORAGE_KEY) {
            Ok(Some(state)) => state.saved_configurations,
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(error = %e, "failed to load saved configurations, starting empty");
                Vec::new()
            }
        };
        Self {
            configuration: None,
            saved,
            dirty: false,
            storage: Some(storage),
        }
    }

    /// The active in-progress configuration, if any.
    pub fn configuration(&self) -> Option<&ShelfConfiguration> {
        self.configuration.as_ref()
    }

    /// The explicitly saved configurations.
    pub fn saved(&self) -> &[ShelfConfiguration] {
        &self.saved
    }

    /// Whether the active configuration has unsaved changes.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Start a fresh empty configuration, replacing any active one.
    pub fn create_new(&mut self, name: Option<&str>) {
        self.configuration = Some(ShelfConfiguration::new(name.unwrap_or(DEFAULT_NAME)));
        self.dirty = false;
        self.persist();
    }

    /// Adopt an existing (typically saved) configuration as the active one.
    pub fn load(&mut self, config: ShelfConfiguration) {
        debug!(id = %config.id, "configuration loaded");
        self.configuration = Some(config);
        self.dirty = false;
        self.persist();
    }

    /// Add a component, creating an active configuration if none exists.
    ///
    /// Re-adding a component accumulates its quantity on the existing item.
    /// A zero quantity is a no-op.
    pub fn add_component(&mut self, component: &ShelfComponent, quantity: u32) {
        if quantity == 0 {
            return;
        }
        let config = self
            .configuration
            .get_or_insert_with(|| ShelfConfiguration::new(DEFAULT_NAME));

        match config
            .items
            .iter_mut()
            .find(|i| i.component_id == component.id)
        {
            Some(item) => item.quantity += quantity,
            None => config.items.push(ConfigurationItem {
                component_id: component.id.clone(),
                component: component.clone(),
                quantity,
                placement: None,
            }),
        }
        config.refresh_totals();
        config.touch();
        self.dirty = true;
        debug!(component = %component.id, quantity, "component added");
        self.persist();
    }

    /// Remove a component's item entirely. No-op if absent or no active
    /// configuration.
    pub fn remove_component(&mut self, component_id: &ComponentId) {
        let Some(config) = self.configuration.as_mut() else {
            return;
        };
        let before = config.items.len();
        config.items.retain(|i| &i.component_id != component_id);
        if config.items.len() == before {
            return;
        }
        config.refresh_totals();
        config.touch();
        self.dirty = true;
        debug!(component = %component_id, "component removed");
        self.persist();
    }

    /// Replace a component's quantity. A quantity below 1 removes the item.
    pub fn update_quantity(&mut self, component_id: &ComponentId, quantity: u32) {
        if quantity < 1 {
            self.remove_component(component_id);
            return;
        }
        let Some(config) = self.configuration.as_mut() else {
            return;
        };
        let Some(item) = config
            .items
            .iter_mut()
            .find(|i| &i.component_id == component_id)
        else {
            return;
        };
        item.quantity = quantity;
        config.refresh_totals();
        config.touch();
        self.dirty = true;
        self.persist();
    }

    /// Rename the active configuration. No-op if none.
    pub fn rename(&mut self, name: impl Into<String>) {
        let Some(config) = self.configuration.as_mut() else {
            return;
        };
        config.name = name.into();
        config.touch();
        self.dirty = true;
        self.persist();
    }

    /// Upsert the active configuration into the saved list by id. Clears
    /// the dirty flag and keeps the configuration active. No-op if none.
    pub fn save(&mut self) {
        let Some(config) = self.configuration.clone() else {
            return;
        };
        match self.saved.iter_mut().find(|c| c.id == config.id) {
            Some(slot) => *slot = config,
            None => self.saved.push(config),
        }
        self.dirty = false;
        self.persist();
    }

    /// Discard the active configuration without saving it.
    pub fn clear(&mut self) {
        self.configuration = None;
        self.dirty = false;
        self.persist();
    }

    /// Delete a configuration from the saved list.
    pub fn delete_saved(&mut self, id: &ConfigurationId) {
        self.saved.retain(|c| &c.id != id);
        self.persist();
    }

    /// Best-effort write of the saved list; a failure is logged and never
    /// surfaces to the caller.
    fn persist(&self) {
        let Some(storage) = &self.storage else {
            return;
        };
        let state = PersistedState {
            saved_configurations: self.saved.clone(),
        };
        if let Err(e) = storage.set(STORAGE_KEY, &state) {
            warn!(error = %e, "failed to persist saved configurations");
        }
    }
}

impl Default for BuilderStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::standard_catalog;
    use crate::money::Money;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn temp_storage() -> KvStore {
        static SEQ: AtomicU32 = AtomicU32::new(0);
        let dir = std::env::temp_dir().join(format!(
            "moduo-builder-test-{}-{}",
            std::process::id(),
            SEQ.fetch_add(1, Ordering::SeqCst)
        ));
        KvStore::open(dir).unwrap()
    }

    fn catalog_component(id: &str) -> ShelfComponent {
        standard_catalog()
            .into_iter()
            .find(|c| c.id.as_str() == id)
            .unwrap()
    }

    #[test]
    fn test_add_creates_configuration_implicitly() {
        let mut store = BuilderStore::new();
        assert!(store.configuration().is_none());

        store.add_component(&catalog_component("shelf-80"), 1);

        let config = store.configuration().unwrap();
        assert_eq!(config.name, DEFAULT_NAME);
        assert_eq!(config.items.len(), 1);
        assert!(store.is_dirty());
    }

    #[test]
    fn test_readd_accumulates_quantity() {
        let mut store = BuilderStore::new();
        let shelf = catalog_component("shelf-80");

        store.add_component(&shelf, 1);
        store.add_component(&shelf, 2);

        let config = store.configuration().unwrap();
        assert_eq!(config.items.len(), 1);
        assert_eq!(config.items[0].quantity, 3);
        assert_eq!(config.total_price, shelf.price * 3);
    }

    #[test]
    fn test_add_zero_quantity_is_noop() {
        let mut store = BuilderStore::new();
        store.add_component(&catalog_component("shelf-80"), 0);
        assert!(store.configuration().is_none());
    }

    #[test]
    fn test_totals_track_every_mutation() {
        let mut store = BuilderStore::new();
        let shelf = catalog_component("shelf-80");
        let upright = catalog_component("upright-180");

        store.add_component(&upright, 2);
        store.add_component(&shelf, 3);
        let config = store.configuration().unwrap();
        assert_eq!(config.total_price, upright.price * 2 + shelf.price * 3);
        assert_eq!(
            config.total_weight,
            ((upright.weight * 2.0 + shelf.weight * 3.0) * 100.0).round() / 100.0
        );

        store.update_quantity(&shelf.id, 1);
        let config = store.configuration().unwrap();
        assert_eq!(config.total_price, upright.price * 2 + shelf.price * 1);

        store.remove_component(&upright.id);
        let config = store.configuration().unwrap();
        assert_eq!(config.total_price, shelf.price * 1);
    }

    #[test]
    fn test_update_quantity_zero_removes_item() {
        let mut store = BuilderStore::new();
        let shelf = catalog_component("shelf-80");
        store.add_component(&shelf, 2);

        store.update_quantity(&shelf.id, 0);

        let config = store.configuration().unwrap();
        assert!(config.is_empty());
        assert_eq!(config.total_price, Money::ZERO);
        assert_eq!(config.total_dimensions.width, 60.0);
    }

    #[test]
    fn test_operations_without_configuration_are_noops() {
        let mut store = BuilderStore::new();
        let id = ComponentId::new("shelf-80");

        store.remove_component(&id);
        store.update_quantity(&id, 5);
        store.rename("whatever");
        store.save();

        assert!(store.configuration().is_none());
        assert!(store.saved().is_empty());
        assert!(!store.is_dirty());
    }

    #[test]
    fn test_remove_absent_component_keeps_state() {
        let mut store = BuilderStore::new();
        store.add_component(&catalog_component("shelf-80"), 1);
        store.save();
        assert!(!store.is_dirty());

        store.remove_component(&ComponentId::new("not-in-config"));
        assert!(!store.is_dirty());
    }

    #[test]
    fn test_save_upserts_by_id() {
        let mut store = BuilderStore::new();
        store.add_component(&catalog_component("shelf-80"), 1);
        store.save();
        assert_eq!(store.saved().len(), 1);
        assert!(!store.is_dirty());

        store.rename("Stua");
        assert!(store.is_dirty());
        store.save();

        assert_eq!(store.saved().len(), 1);
        assert_eq!(store.saved()[0].name, "Stua");
    }

    #[test]
    fn test_clear_discards_without_saving() {
        let mut store = BuilderStore::new();
        store.add_component(&catalog_component("shelf-80"), 1);
        store.clear();
        assert!(store.configuration().is_none());
        assert!(store.saved().is_empty());
        assert!(!store.is_dirty());
    }

    #[test]
    fn test_delete_saved() {
        let mut store = BuilderStore::new();
        store.add_component(&catalog_component("shelf-80"), 1);
        store.save();
        let id = store.saved()[0].id.clone();

        store.delete_saved(&id);
        assert!(store.saved().is_empty());
    }

    #[test]
    fn test_saved_configurations_round_trip_storage() {
        let storage = temp_storage();
        let root = storage.root().to_path_buf();

        let mut store = BuilderStore::with_storage(storage);
        store.add_component(&catalog_component("upright-180"), 2);
        store.add_component(&catalog_component("shelf-80"), 3);
        store.rename("Kontoret");
        store.save();
        let saved = store.saved().to_vec();

        let reloaded = BuilderStore::with_storage(KvStore::open(root).unwrap());
        assert_eq!(reloaded.saved(), saved.as_slice());
        // The active configuration does not survive the session
        assert!(reloaded.configuration().is_none());
    }

    #[test]
    fn test_corrupt_state_starts_empty() {
        let storage = temp_storage();
        let root = storage.root().to_path_buf();
        std::fs::write(root.join(format!("{STORAGE_KEY}.json")), b"not json").unwrap();

        let store = BuilderStore::with_storage(KvStore::open(root).unwrap());
        assert!(store.saved().is_empty());
    }
}
