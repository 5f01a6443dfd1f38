//! Shelf component types.

use crate::ids::ComponentId;
use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kinds of purchasable shelf parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    /// Vertical side rail; uprights stand side by side and set the height.
    Upright,
    /// Horizontal board spanning between uprights.
    Shelf,
    /// Mounting bracket.
    Bracket,
    /// Plinth the structure stands on.
    Base,
    /// Back panel.
    Backpanel,
    /// Pull-out drawer module.
    Drawer,
    /// Hinged door module.
    Door,
}

impl ComponentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentKind::Upright => "upright",
            ComponentKind::Shelf => "shelf",
            ComponentKind::Bracket => "bracket",
            ComponentKind::Base => "base",
            ComponentKind::Backpanel => "backpanel",
            ComponentKind::Drawer => "drawer",
            ComponentKind::Door => "door",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "upright" => Some(ComponentKind::Upright),
            "shelf" => Some(ComponentKind::Shelf),
            "bracket" => Some(ComponentKind::Bracket),
            "base" => Some(ComponentKind::Base),
            "backpanel" => Some(ComponentKind::Backpanel),
            "drawer" => Some(ComponentKind::Drawer),
            "door" => Some(ComponentKind::Door),
            _ => None,
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Wood species a component is made from. Informational only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WoodType {
    #[default]
    Oak,
    Walnut,
    Beech,
    Pine,
    Birch,
}

impl WoodType {
    pub fn as_str(&self) -> &'static str {
        match self {
            WoodType::Oak => "oak",
            WoodType::Walnut => "walnut",
            WoodType::Beech => "beech",
            WoodType::Pine => "pine",
            WoodType::Birch => "birch",
        }
    }
}

/// Surface finish. Informational only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Finish {
    #[default]
    Natural,
    Oiled,
    Lacquered,
    Stained,
}

impl Finish {
    pub fn as_str(&self) -> &'static str {
        match self {
            Finish::Natural => "natural",
            Finish::Oiled => "oiled",
            Finish::Lacquered => "lacquered",
            Finish::Stained => "stained",
        }
    }
}

/// Physical dimensions in centimeters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
    pub depth: f64,
}

impl Dimensions {
    pub fn new(width: f64, height: f64, depth: f64) -> Self {
        Self {
            width,
            height,
            depth,
        }
    }
}

impl fmt::Display for Dimensions {
    /// Formats as "height × width × depth cm".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} × {} × {} cm", self.height, self.width, self.depth)
    }
}

/// A purchasable catalog part. Immutable, externally supplied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShelfComponent {
    /// Unique component identifier.
    pub id: ComponentId,
    /// What kind of part this is; drives the dimension aggregation rule.
    pub kind: ComponentKind,
    /// Display name.
    pub name: String,
    /// Short description for listings.
    pub description: Option<String>,
    /// Physical dimensions in centimeters.
    pub dimensions: Dimensions,
    /// Weight in kilograms.
    pub weight: f64,
    /// Unit price in kroner.
    pub price: Money,
    /// Wood species.
    pub wood: WoodType,
    /// Surface finish.
    pub finish: Finish,
    /// Maximum load in kilograms, for shelves.
    pub max_load: Option<f64>,
}

impl ShelfComponent {
    /// Create a component with default material metadata.
    pub fn new(
        id: impl Into<ComponentId>,
        kind: ComponentKind,
        name: impl Into<String>,
        dimensions: Dimensions,
        weight: f64,
        price: Money,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            name: name.into(),
            description: None,
            dimensions,
            weight,
            price,
            wood: WoodType::default(),
            finish: Finish::default(),
            max_load: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_round_trip() {
        for kind in [
            ComponentKind::Upright,
            ComponentKind::Shelf,
            ComponentKind::Bracket,
            ComponentKind::Base,
            ComponentKind::Backpanel,
            ComponentKind::Drawer,
            ComponentKind::Door,
        ] {
            assert_eq!(ComponentKind::from_str(kind.as_str()), Some(kind));
        }
        assert_eq!(ComponentKind::from_str("plinth"), None);
    }

    #[test]
    fn test_dimensions_display() {
        let dims = Dimensions::new(80.0, 2.5, 30.0);
        assert_eq!(dims.to_string(), "2.5 × 80 × 30 cm");
    }

    #[test]
    fn test_component_creation() {
        let component = ShelfComponent::new(
            "shelf-80",
            ComponentKind::Shelf,
            "Shelf board 80",
            Dimensions::new(80.0, 2.5, 30.0),
            4.8,
            Money::new(349),
        );
        assert_eq!(component.id.as_str(), "shelf-80");
        assert_eq!(component.wood, WoodType::Oak);
        assert!(component.max_load.is_none());
    }
}
