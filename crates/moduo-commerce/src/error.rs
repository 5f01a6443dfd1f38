//! Commerce error types.
//!
//! Store mutations never fail: missing ids and absent configurations are
//! no-ops, and quantity zero falls back to removal. Only the checkout
//! collaborator returns errors.

use thiserror::Error;

/// Errors that can occur in storefront operations.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Checkout attempted on an empty cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// Checkout step advanced without required data.
    #[error("Checkout incomplete: missing {0}")]
    CheckoutIncomplete(String),

    /// Invalid checkout state transition.
    #[error("Invalid checkout transition from {from} to {to}")]
    InvalidCheckoutTransition { from: String, to: String },
}
