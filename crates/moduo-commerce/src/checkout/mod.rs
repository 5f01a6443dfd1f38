//! Checkout: simulated order placement and confirmation.

mod address;
mod flow;
mod order;

pub use address::ShippingAddress;
pub use flow::{CheckoutFlow, CheckoutStep, PROCESSING_DELAY};
pub use order::{
    estimated_delivery_date, generate_order_number, vat_amount, Order, OrderStatus,
    PaymentMethod, VAT_RATE,
};
