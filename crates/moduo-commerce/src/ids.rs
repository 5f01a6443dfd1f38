//! Newtype IDs for type-safe identifiers.
//!
//! Using newtypes prevents accidentally mixing up different ID types,
//! e.g., passing a ComponentId where a CartLineId is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to generate newtype ID structs.
macro_rules! define_id {
    ($name:ident, $prefix:literal) => {
        /// A unique identifier.
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from a string.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Generate a new unique ID.
            pub fn generate() -> Self {
                Self(generate_id($prefix))
            }

            /// Get the ID as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume and return the inner string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

// Define all ID types
define_id!(ComponentId, "comp");
define_id!(ConfigurationId, "config");
define_id!(CartLineId, "line");
define_id!(OrderId, "order");

/// Generate a prefixed unique ID from a millisecond timestamp and a random
/// suffix. Unique with overwhelming probability, not cryptographically
/// guaranteed.
fn generate_id(prefix: &str) -> String {
    use std::time::{SystemTime, UNIX_EPOCH};

    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);
    let suffix: u32 = rand::random();

    format!("{prefix}-{timestamp}-{suffix:08x}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_creation() {
        let id = ComponentId::new("shelf-80");
        assert_eq!(id.as_str(), "shelf-80");
    }

    #[test]
    fn test_id_generation() {
        let id1 = ConfigurationId::generate();
        let id2 = ConfigurationId::generate();
        assert_ne!(id1, id2);
        assert!(id1.as_str().starts_with("config-"));
    }

    #[test]
    fn test_id_from_string() {
        let id: CartLineId = "line-123".into();
        assert_eq!(id.as_str(), "line-123");
    }

    #[test]
    fn test_id_display() {
        let id = OrderId::new("order-789");
        assert_eq!(format!("{}", id), "order-789");
    }
}
