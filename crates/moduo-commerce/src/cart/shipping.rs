//! Mocked shipping estimation.
//!
//! Reproduces the carrier's simplified zone pricing: a base rate per postal
//! band, a weight surcharge, and a per-package multiplier. Estimates are
//! derived fresh from the cart on every request and never cached.

use serde::{Deserialize, Serialize};

use crate::cart::cart::Cart;
use crate::money::Money;

/// Carrier label on every option.
pub const CARRIER: &str = "Posten";

/// Maximum weight per package in kilograms.
pub const KG_PER_PACKAGE: f64 = 25.0;

/// Cart subtotal from which standard shipping is free.
pub const FREE_SHIPPING_THRESHOLD: Money = Money::new(5000);

/// Fallback base rate for postal codes outside every mapped zone.
const DEFAULT_BASE_RATE: i32 = 299;

/// Shipping service level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceLevel {
    Standard,
    Express,
}

impl ServiceLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceLevel::Standard => "standard",
            ServiceLevel::Express => "express",
        }
    }
}

/// Delivery window in business days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRange {
    pub min: u32,
    pub max: u32,
}

/// A priced carrier option.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShippingOption {
    /// Service level.
    pub service: ServiceLevel,
    /// Display name.
    pub name: String,
    /// Carrier label.
    pub carrier: String,
    /// Estimated delivery window.
    pub estimated_days: DayRange,
    /// Quoted price.
    pub price: Money,
    /// Display description.
    pub description: String,
}

/// Parcel summary reported with an estimate. Length is the widest line,
/// width the deepest, height the tallest.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Parcel {
    pub length: f64,
    pub width: f64,
    pub height: f64,
}

/// A transient shipping quote for the current cart and postal code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShippingEstimate {
    /// Cumulative weight in kilograms, scaled by line quantities.
    pub weight: f64,
    /// Bounding parcel across all lines (not scaled by quantity).
    pub dimensions: Parcel,
    /// Number of packages at [`KG_PER_PACKAGE`] each.
    pub packages: u32,
    /// Standard and express options, in that order.
    pub options: Vec<ShippingOption>,
}

impl ShippingEstimate {
    /// Get the option for a service level.
    pub fn option(&self, service: ServiceLevel) -> Option<&ShippingOption> {
        self.options.iter().find(|o| o.service == service)
    }
}

/// Quote shipping for the current cart contents and a postal code.
pub fn estimate(cart: &Cart, postal_code: &str) -> ShippingEstimate {
    let mut weight = 0.0_f64;
    let mut max_width = 0.0_f64;
    let mut max_height = 0.0_f64;
    let mut max_depth = 0.0_f64;

    for line in &cart.items {
        weight += line.source.unit_weight() * f64::from(line.quantity);
        let dims = line.source.dimensions();
        max_width = max_width.max(dims.width);
        max_height = max_height.max(dims.height);
        max_depth = max_depth.max(dims.depth);
    }

    let packages = (weight / KG_PER_PACKAGE).ceil() as u32;

    let base_rate = base_rate(postal_code);
    let weight_surcharge = ((weight - 10.0) * 5.0).max(0.0);

    let mut standard_price =
        Money::round_from(f64::from(base_rate) + weight_surcharge) * packages;
    let mut express_price = standard_price.scale(1.8);

    // Free standard shipping over the threshold; express at half rate
    if cart.total_price >= FREE_SHIPPING_THRESHOLD {
        standard_price = Money::ZERO;
        express_price = express_price.scale(0.5);
    }

    ShippingEstimate {
        weight,
        dimensions: Parcel {
            length: max_width,
            width: max_depth,
            height: max_height,
        },
        packages,
        options: vec![
            ShippingOption {
                service: ServiceLevel::Standard,
                name: "Standard delivery".to_string(),
                carrier: CARRIER.to_string(),
                estimated_days: DayRange { min: 3, max: 5 },
                price: standard_price,
                description: "Delivered to your door".to_string(),
            },
            ShippingOption {
                service: ServiceLevel::Express,
                name: "Express delivery".to_string(),
                carrier: CARRIER.to_string(),
                estimated_days: DayRange { min: 1, max: 2 },
                price: express_price,
                description: "Priority handling, delivered to your door".to_string(),
            },
        ],
    }
}

/// Base rate in kroner for a postal-code zone.
///
/// The 3000-3999 and 6000-6999 ranges are not mapped and take the default
/// rate, as do five-digit, negative, and unparseable codes.
fn base_rate(postal_code: &str) -> i32 {
    match postal_code.trim().parse::<i64>() {
        Ok(n) => match n {
            0..=999 => 199,       // Oslo area
            1000..=2999 => 249,   // Eastern Norway
            4000..=4999 => 349,   // Southern Norway
            5000..=5999 => 399,   // Western Norway
            7000..=7999 => 449,   // Central Norway
            8000..=9999 => 549,   // Northern Norway
            _ => DEFAULT_BASE_RATE,
        },
        Err(_) => DEFAULT_BASE_RATE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::cart::{CartLine, CartLineSource};
    use crate::catalog::{ComponentKind, Dimensions, ShelfComponent};
    use crate::ids::{CartLineId, ComponentId};

    fn cart_with(lines: Vec<(f64, Dimensions, u32, i64)>) -> Cart {
        let mut cart = Cart::new();
        for (weight, dims, quantity, price) in lines {
            let component = ShelfComponent::new(
                ComponentId::generate(),
                ComponentKind::Shelf,
                "part",
                dims,
                weight,
                Money::new(price),
            );
            cart.items.push(CartLine {
                id: CartLineId::generate(),
                source: CartLineSource::Component { component },
                quantity,
                price: Money::new(price),
            });
        }
        cart.recompute();
        cart
    }

    #[test]
    fn test_band_boundaries() {
        assert_eq!(base_rate("0500"), 199);
        assert_eq!(base_rate("2500"), 249);
        assert_eq!(base_rate("3500"), 299);
        assert_eq!(base_rate("4500"), 349);
        assert_eq!(base_rate("5500"), 399);
        assert_eq!(base_rate("6500"), 299);
        assert_eq!(base_rate("7500"), 449);
        assert_eq!(base_rate("9999"), 549);
    }

    #[test]
    fn test_unmapped_codes_take_default_rate() {
        assert_eq!(base_rate("10000"), 299);
        assert_eq!(base_rate("-5"), 299);
        assert_eq!(base_rate("oslo"), 299);
        assert_eq!(base_rate(""), 299);
    }

    #[test]
    fn test_single_package_pricing() {
        // 5 kg, below the surcharge knee: standard = base * 1 package
        let cart = cart_with(vec![(5.0, Dimensions::new(80.0, 2.5, 30.0), 1, 349)]);
        let estimate = estimate(&cart, "0500");
        assert_eq!(estimate.packages, 1);
        assert_eq!(estimate.option(ServiceLevel::Standard).unwrap().price, Money::new(199));
        assert_eq!(
            estimate.option(ServiceLevel::Express).unwrap().price,
            Money::new((199.0_f64 * 1.8).round() as i64)
        );
    }

    #[test]
    fn test_weight_surcharge_and_packages() {
        // 30 kg total: 2 packages, surcharge (30-10)*5 = 100
        let cart = cart_with(vec![(15.0, Dimensions::new(80.0, 2.5, 30.0), 2, 349)]);
        let estimate = estimate(&cart, "0500");
        assert_eq!(estimate.weight, 30.0);
        assert_eq!(estimate.packages, 2);
        assert_eq!(
            estimate.option(ServiceLevel::Standard).unwrap().price,
            Money::new((199 + 100) * 2)
        );
    }

    #[test]
    fn test_dimensions_not_scaled_by_quantity() {
        let cart = cart_with(vec![
            (4.0, Dimensions::new(80.0, 2.5, 30.0), 5, 349),
            (8.0, Dimensions::new(4.0, 180.0, 35.0), 1, 549),
        ]);
        let estimate = estimate(&cart, "0500");
        assert_eq!(estimate.dimensions.length, 80.0);
        assert_eq!(estimate.dimensions.height, 180.0);
        assert_eq!(estimate.dimensions.width, 35.0);
    }

    #[test]
    fn test_empty_cart_quotes_zero_packages() {
        let cart = Cart::new();
        let estimate = estimate(&cart, "0500");
        assert_eq!(estimate.packages, 0);
        assert_eq!(estimate.option(ServiceLevel::Standard).unwrap().price, Money::ZERO);
        assert_eq!(estimate.option(ServiceLevel::Express).unwrap().price, Money::ZERO);
    }

    #[test]
    fn test_free_shipping_at_threshold() {
        let cart = cart_with(vec![(5.0, Dimensions::new(80.0, 2.5, 30.0), 1, 5000)]);
        let estimate = estimate(&cart, "0500");
        let standard = estimate.option(ServiceLevel::Standard).unwrap().price;
        let express = estimate.option(ServiceLevel::Express).unwrap().price;
        assert_eq!(standard, Money::ZERO);
        // Express halves the computed price instead of zeroing it
        assert_eq!(express, Money::new(358).scale(0.5));
    }

    #[test]
    fn test_no_free_shipping_below_threshold() {
        let cart = cart_with(vec![(5.0, Dimensions::new(80.0, 2.5, 30.0), 1, 4999)]);
        let estimate = estimate(&cart, "0500");
        assert!(estimate.option(ServiceLevel::Standard).unwrap().price > Money::ZERO);
    }

    #[test]
    fn test_configuration_lines_use_cached_totals() {
        use crate::builder::BuilderStore;
        use crate::catalog::standard_catalog;

        let catalog = standard_catalog();
        let upright = catalog.iter().find(|c| c.id.as_str() == "upright-180").unwrap();

        let mut builder = BuilderStore::new();
        builder.add_component(upright, 2);
        let config = builder.configuration().unwrap().clone();

        let mut cart = Cart::new();
        cart.items.push(CartLine {
            id: CartLineId::generate(),
            source: CartLineSource::Configuration {
                configuration: config.clone(),
            },
            quantity: 2,
            price: config.total_price,
        });
        cart.recompute();

        let estimate = estimate(&cart, "0500");
        assert_eq!(estimate.weight, config.total_weight * 2.0);
        assert_eq!(estimate.dimensions.length, config.total_dimensions.width);
    }
}
