//! Three-step checkout flow.

use std::time::Duration;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::cart::{CartStore, ShippingOption};
use crate::checkout::order::{
    estimated_delivery_date, generate_order_number, vat_amount, Order, OrderStatus,
    PaymentMethod,
};
use crate::checkout::ShippingAddress;
use crate::error::CommerceError;
use crate::ids::OrderId;

/// Simulated payment-processing latency.
pub const PROCESSING_DELAY: Duration = Duration::from_millis(2000);

/// Steps in the checkout flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckoutStep {
    /// Shipping address entry.
    Shipping,
    /// Payment method selection and order review.
    Payment,
    /// Order confirmed.
    Confirmation,
}

impl CheckoutStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckoutStep::Shipping => "shipping",
            CheckoutStep::Payment => "payment",
            CheckoutStep::Confirmation => "confirmation",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CheckoutStep::Shipping => "Shipping",
            CheckoutStep::Payment => "Payment",
            CheckoutStep::Confirmation => "Confirmation",
        }
    }

    /// Get the step number (1-indexed).
    pub fn number(&self) -> u8 {
        match self {
            CheckoutStep::Shipping => 1,
            CheckoutStep::Payment => 2,
            CheckoutStep::Confirmation => 3,
        }
    }
}

/// Checkout flow state.
///
/// Consumes cart totals and a chosen shipping option; the only thing it
/// mutates outside itself is the final cart clear on successful placement.
pub struct CheckoutFlow {
    /// Current step.
    pub step: CheckoutStep,
    /// Address collected in the shipping step.
    pub shipping_address: Option<ShippingAddress>,
    /// Selected payment method.
    pub payment_method: PaymentMethod,
    processing_delay: Duration,
}

impl CheckoutFlow {
    /// Start a new checkout at the shipping step.
    pub fn new() -> Self {
        Self {
            step: CheckoutStep::Shipping,
            shipping_address: None,
            payment_method: PaymentMethod::default(),
            processing_delay: PROCESSING_DELAY,
        }
    }

    /// Override the simulated processing delay.
    pub fn with_processing_delay(mut self, delay: Duration) -> Self {
        self.processing_delay = delay;
        self
    }

    /// Record the shipping address and advance to the payment step.
    pub fn submit_address(&mut self, address: ShippingAddress) -> Result<(), CommerceError> {
        if self.step != CheckoutStep::Shipping {
            return Err(CommerceError::InvalidCheckoutTransition {
                from: self.step.as_str().to_string(),
                to: CheckoutStep::Payment.as_str().to_string(),
            });
        }
        if !address.is_complete() {
            return Err(CommerceError::CheckoutIncomplete(
                "shipping address".to_string(),
            ));
        }
        self.shipping_address = Some(address);
        self.step = CheckoutStep::Payment;
        Ok(())
    }

    /// Select the payment method.
    pub fn set_payment_method(&mut self, method: PaymentMethod) {
        self.payment_method = method;
    }

    /// Go back from payment to the shipping step.
    pub fn go_back(&mut self) -> Result<CheckoutStep, CommerceError> {
        match self.step {
            CheckoutStep::Payment => {
                self.step = CheckoutStep::Shipping;
                Ok(self.step)
            }
            step => Err(CommerceError::InvalidCheckoutTransition {
                from: step.as_str().to_string(),
                to: "previous".to_string(),
            }),
        }
    }

    /// Simulate payment processing and place the order.
    ///
    /// Builds the order from the current cart, the collected address, and
    /// the chosen shipping option, clears the cart, and advances to the
    /// confirmation step. The returned order is the only record of the
    /// purchase.
    pub async fn place_order(
        &mut self,
        cart_store: &mut CartStore,
        option: &ShippingOption,
    ) -> Result<Order, CommerceError> {
        if self.step != CheckoutStep::Payment {
            return Err(CommerceError::InvalidCheckoutTransition {
                from: self.step.as_str().to_string(),
                to: CheckoutStep::Confirmation.as_str().to_string(),
            });
        }
        let Some(address) = self.shipping_address.clone() else {
            return Err(CommerceError::CheckoutIncomplete(
                "shipping address".to_string(),
            ));
        };
        if cart_store.cart().is_empty() {
            return Err(CommerceError::EmptyCart);
        }

        // Simulate payment processing
        tokio::time::sleep(self.processing_delay).await;

        let cart = cart_store.cart();
        let subtotal = cart.total_price;
        let order = Order {
            id: OrderId::generate(),
            order_number: generate_order_number(),
            created_at: current_timestamp(),
            status: OrderStatus::Confirmed,
            items: cart.items.clone(),
            shipping_address: address,
            payment_method: self.payment_method,
            subtotal,
            shipping_cost: option.price,
            tax: vat_amount(subtotal),
            total: subtotal + option.price,
            tracking_number: None,
            estimated_delivery: estimated_delivery_date(
                Utc::now().date_naive(),
                option.estimated_days.max,
            ),
        };

        cart_store.clear();
        self.step = CheckoutStep::Confirmation;
        info!(order = %order.order_number, "order placed");

        Ok(order)
    }

    /// Check if the flow has reached confirmation.
    pub fn is_complete(&self) -> bool {
        self.step == CheckoutStep::Confirmation
    }
}

impl Default for CheckoutFlow {
    fn default() -> Self {
        Self::new()
    }
}

/// Get current Unix timestamp.
fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::ServiceLevel;
    use crate::catalog::standard_catalog;
    use crate::money::Money;

    fn address() -> ShippingAddress {
        ShippingAddress {
            first_name: "Ola".to_string(),
            last_name: "Nordmann".to_string(),
            email: "ola@example.no".to_string(),
            phone: "45678901".to_string(),
            street: "Kirkegata 12".to_string(),
            postal_code: "7013".to_string(),
            city: "Trondheim".to_string(),
            country: "Norge".to_string(),
        }
    }

    fn instant_flow() -> CheckoutFlow {
        CheckoutFlow::new().with_processing_delay(Duration::ZERO)
    }

    #[test]
    fn test_submit_address_advances() {
        let mut flow = CheckoutFlow::new();
        assert_eq!(flow.step, CheckoutStep::Shipping);
        flow.submit_address(address()).unwrap();
        assert_eq!(flow.step, CheckoutStep::Payment);
    }

    #[test]
    fn test_incomplete_address_rejected() {
        let mut flow = CheckoutFlow::new();
        let mut addr = address();
        addr.email = String::new();
        assert!(flow.submit_address(addr).is_err());
        assert_eq!(flow.step, CheckoutStep::Shipping);
    }

    #[test]
    fn test_go_back_from_payment() {
        let mut flow = CheckoutFlow::new();
        flow.submit_address(address()).unwrap();
        assert_eq!(flow.go_back().unwrap(), CheckoutStep::Shipping);
        assert!(flow.go_back().is_err());
    }

    #[tokio::test]
    async fn test_place_order_requires_payment_step() {
        let mut flow = instant_flow();
        let mut cart = CartStore::new();
        let catalog = standard_catalog();
        cart.add_component(&catalog[0], 1);
        let option = cart.estimate_shipping("7013").options[0].clone();

        let result = flow.place_order(&mut cart, &option).await;
        assert!(matches!(
            result,
            Err(CommerceError::InvalidCheckoutTransition { .. })
        ));
    }

    #[tokio::test]
    async fn test_place_order_on_empty_cart_fails() {
        let mut flow = instant_flow();
        flow.submit_address(address()).unwrap();
        let mut cart = CartStore::new();
        let option = cart.estimate_shipping("7013").options[0].clone();

        let result = flow.place_order(&mut cart, &option).await;
        assert!(matches!(result, Err(CommerceError::EmptyCart)));
        assert!(!flow.is_complete());
    }

    #[tokio::test]
    async fn test_place_order_clears_cart_and_confirms() {
        let mut flow = instant_flow();
        flow.submit_address(address()).unwrap();
        flow.set_payment_method(PaymentMethod::Vipps);

        let mut cart = CartStore::new();
        let catalog = standard_catalog();
        cart.add_component(&catalog[0], 2);
        let subtotal = cart.cart().total_price;
        let option = cart
            .estimate_shipping("7013")
            .option(ServiceLevel::Standard)
            .unwrap()
            .clone();

        let order = flow.place_order(&mut cart, &option).await.unwrap();

        assert!(order.order_number.starts_with("MOD-"));
        assert_eq!(order.status, OrderStatus::Confirmed);
        assert_eq!(order.payment_method, PaymentMethod::Vipps);
        assert_eq!(order.subtotal, subtotal);
        assert_eq!(order.shipping_cost, option.price);
        assert_eq!(order.total, subtotal + option.price);
        assert_eq!(order.item_count(), 2);
        assert!(order.tax > Money::ZERO);

        assert!(cart.cart().is_empty());
        assert!(flow.is_complete());
    }
}
