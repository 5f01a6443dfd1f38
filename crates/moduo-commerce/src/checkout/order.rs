//! Order types and checkout helpers.

use chrono::{Datelike, NaiveDate, Weekday};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::cart::CartLine;
use crate::checkout::ShippingAddress;
use crate::ids::OrderId;
use crate::money::Money;

/// VAT rate applied on receipts.
pub const VAT_RATE: f64 = 0.25;

/// Order status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Order placed, awaiting confirmation.
    #[default]
    Pending,
    /// Payment confirmed.
    Confirmed,
    /// Order being prepared.
    Processing,
    /// Order shipped.
    Shipped,
    /// Order delivered.
    Delivered,
    /// Order cancelled.
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

/// Payment method. All simulated; no real transaction happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    /// Card payment.
    #[default]
    Card,
    /// Vipps mobile payment.
    Vipps,
    /// Pay by invoice.
    Invoice,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "card",
            PaymentMethod::Vipps => "vipps",
            PaymentMethod::Invoice => "invoice",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "Card",
            PaymentMethod::Vipps => "Vipps",
            PaymentMethod::Invoice => "Invoice",
        }
    }
}

/// A confirmed order. Lives only as the value returned to the confirmation
/// view; nothing is persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Unique order identifier.
    pub id: OrderId,
    /// Human-readable order number.
    pub order_number: String,
    /// Unix timestamp of placement.
    pub created_at: i64,
    /// Order status.
    pub status: OrderStatus,
    /// Snapshot of the cart lines at placement.
    pub items: Vec<CartLine>,
    /// Delivery address.
    pub shipping_address: ShippingAddress,
    /// How the order was paid.
    pub payment_method: PaymentMethod,
    /// Cart subtotal at placement.
    pub subtotal: Money,
    /// Chosen shipping option's price.
    pub shipping_cost: Money,
    /// VAT receipt line.
    pub tax: Money,
    /// Amount charged: subtotal plus shipping.
    pub total: Money,
    /// Carrier tracking number, assigned after shipment.
    pub tracking_number: Option<String>,
    /// Estimated delivery date.
    pub estimated_delivery: NaiveDate,
}

impl Order {
    /// Total item count (sum of quantities).
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|l| l.quantity).sum()
    }
}

/// VAT line for a receipt.
pub fn vat_amount(subtotal: Money) -> Money {
    subtotal.scale(VAT_RATE)
}

/// Generate a human-readable order number: `MOD-` plus the base-36
/// millisecond timestamp and a 4-character random suffix. Unique with
/// overwhelming probability, not guaranteed.
pub fn generate_order_number() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};

    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    format!("MOD-{}-{}", to_base36(millis), random_suffix(4))
}

/// Encode an integer in uppercase base 36.
fn to_base36(mut n: u64) -> String {
    const DIGITS: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
    if n == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while n > 0 {
        out.push(DIGITS[(n % 36) as usize]);
        n /= 36;
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}

/// Random uppercase alphanumeric suffix.
fn random_suffix(len: usize) -> String {
    const DIGITS: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
    let mut rng = rand::thread_rng();
    (0..len)
        .map(|_| DIGITS[rng.gen_range(0..DIGITS.len())] as char)
        .collect()
}

/// The date a given number of business days from `from`, skipping
/// Saturdays and Sundays.
pub fn estimated_delivery_date(from: NaiveDate, business_days: u32) -> NaiveDate {
    let mut date = from;
    let mut added = 0;
    while added < business_days {
        let Some(next) = date.succ_opt() else {
            break;
        };
        date = next;
        if !matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
            added += 1;
        }
    }
    date
}
