//! The standard component catalog.
//!
//! Fixed reference data read by the builder and product views. Prices are
//! VAT-inclusive kroner.

use super::component::{ComponentKind, Dimensions, Finish, ShelfComponent, WoodType};
use crate::ids::ComponentId;
use crate::money::Money;

/// The fixed table of purchasable shelf parts.
pub fn standard_catalog() -> Vec<ShelfComponent> {
    vec![
        ShelfComponent {
            id: ComponentId::new("upright-180"),
            kind: ComponentKind::Upright,
            name: "Upright 180 cm".to_string(),
            description: Some("Full-height side rail with shelf slots every 32 mm".to_string()),
            dimensions: Dimensions::new(4.0, 180.0, 30.0),
            weight: 8.5,
            price: Money::new(549),
            wood: WoodType::Oak,
            finish: Finish::Oiled,
            max_load: None,
        },
        ShelfComponent {
            id: ComponentId::new("upright-120"),
            kind: ComponentKind::Upright,
            name: "Upright 120 cm".to_string(),
            description: Some("Mid-height side rail for sideboards and benches".to_string()),
            dimensions: Dimensions::new(4.0, 120.0, 30.0),
            weight: 6.2,
            price: Money::new(449),
            wood: WoodType::Oak,
            finish: Finish::Oiled,
            max_load: None,
        },
        ShelfComponent {
            id: ComponentId::new("shelf-80"),
            kind: ComponentKind::Shelf,
            name: "Shelf board 80 cm".to_string(),
            description: Some("Solid board spanning one 80 cm bay".to_string()),
            dimensions: Dimensions::new(80.0, 2.5, 30.0),
            weight: 4.8,
            price: Money::new(349),
            wood: WoodType::Oak,
            finish: Finish::Oiled,
            max_load: Some(25.0),
        },
        ShelfComponent {
            id: ComponentId::new("shelf-60"),
            kind: ComponentKind::Shelf,
            name: "Shelf board 60 cm".to_string(),
            description: Some("Solid board spanning one 60 cm bay".to_string()),
            dimensions: Dimensions::new(60.0, 2.5, 30.0),
            weight: 3.6,
            price: Money::new(249),
            wood: WoodType::Oak,
            finish: Finish::Oiled,
            max_load: Some(30.0),
        },
        ShelfComponent {
            id: ComponentId::new("base-80"),
            kind: ComponentKind::Base,
            name: "Plinth base 80 cm".to_string(),
            description: Some("Raised plinth that keeps the lowest shelf off the floor".to_string()),
            dimensions: Dimensions::new(80.0, 10.0, 30.0),
            weight: 5.4,
            price: Money::new(399),
            wood: WoodType::Oak,
            finish: Finish::Lacquered,
            max_load: None,
        },
        ShelfComponent {
            id: ComponentId::new("bracket-pair"),
            kind: ComponentKind::Bracket,
            name: "Bracket pair".to_string(),
            description: Some("Steel-reinforced bracket pair for wall mounting".to_string()),
            dimensions: Dimensions::new(3.0, 12.0, 25.0),
            weight: 0.6,
            price: Money::new(89),
            wood: WoodType::Beech,
            finish: Finish::Natural,
            max_load: None,
        },
        ShelfComponent {
            id: ComponentId::new("backpanel-80"),
            kind: ComponentKind::Backpanel,
            name: "Back panel 80 cm".to_string(),
            description: Some("Veneered panel closing one bay at the back".to_string()),
            dimensions: Dimensions::new(80.0, 76.0, 0.8),
            weight: 3.1,
            price: Money::new(299),
            wood: WoodType::Birch,
            finish: Finish::Natural,
            max_load: None,
        },
        ShelfComponent {
            id: ComponentId::new("drawer-80"),
            kind: ComponentKind::Drawer,
            name: "Drawer module 80 cm".to_string(),
            description: Some("Soft-close drawer insert for one bay".to_string()),
            dimensions: Dimensions::new(76.0, 16.0, 28.0),
            weight: 6.8,
            price: Money::new(899),
            wood: WoodType::Walnut,
            finish: Finish::Oiled,
            max_load: None,
        },
        ShelfComponent {
            id: ComponentId::new("door-40"),
            kind: ComponentKind::Door,
            name: "Cabinet door 40 cm".to_string(),
            description: Some("Hinged half-bay door with push-to-open latch".to_string()),
            dimensions: Dimensions::new(38.0, 76.0, 1.8),
            weight: 3.4,
            price: Money::new(649),
            wood: WoodType::Walnut,
            finish: Finish::Stained,
            max_load: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_ids_unique() {
        let catalog = standard_catalog();
        let ids: HashSet<_> = catalog.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn test_catalog_covers_every_kind() {
        let catalog = standard_catalog();
        for kind in [
            ComponentKind::Upright,
            ComponentKind::Shelf,
            ComponentKind::Bracket,
            ComponentKind::Base,
            ComponentKind::Backpanel,
            ComponentKind::Drawer,
            ComponentKind::Door,
        ] {
            assert!(
                catalog.iter().any(|c| c.kind == kind),
                "no {kind} in catalog"
            );
        }
    }

    #[test]
    fn test_catalog_values_sane() {
        for component in standard_catalog() {
            assert!(component.dimensions.width > 0.0);
            assert!(component.dimensions.height > 0.0);
            assert!(component.dimensions.depth > 0.0);
            assert!(component.weight >= 0.0);
            assert!(component.price >= Money::ZERO);
        }
    }
}
