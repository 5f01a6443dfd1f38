//! Shipping address types.

use serde::{Deserialize, Serialize};

/// A delivery address as collected by the checkout form.
///
/// Field-level validation is the form's responsibility; the core accepts
/// whatever a validated form hands it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ShippingAddress {
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Contact email.
    pub email: String,
    /// Contact phone number.
    pub phone: String,
    /// Street address.
    pub street: String,
    /// Postal code (4-digit Norwegian format).
    pub postal_code: String,
    /// City.
    pub city: String,
    /// Country.
    pub country: String,
}

impl ShippingAddress {
    /// Get full name.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Check if every required field is filled in.
    pub fn is_complete(&self) -> bool {
        !self.first_name.is_empty()
            && !self.last_name.is_empty()
            && !self.email.is_empty()
            && !self.street.is_empty()
            && !self.postal_code.is_empty()
            && !self.city.is_empty()
            && !self.country.is_empty()
    }

    /// Format as multi-line.
    pub fn multi_line(&self) -> String {
        vec![
            self.full_name(),
            self.street.clone(),
            format!("{} {}", self.postal_code, self.city),
            self.country.clone(),
        ]
        .join("\n")
    }
}
