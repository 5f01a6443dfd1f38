//! CLI command implementations.

pub mod build;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod ship;

use clap::{Args, Subcommand};

/// Arguments for the catalog command.
#[derive(Args)]
pub struct CatalogArgs {
    /// Only show components of this kind (upright, shelf, bracket, base,
    /// backpanel, drawer, door).
    #[arg(short, long)]
    pub kind: Option<String>,
}

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    #[command(subcommand)]
    pub command: Option<CartCommand>,
}

#[derive(Subcommand)]
pub enum CartCommand {
    /// Show the cart contents.
    Show,
    /// Add a catalog component by id.
    Add {
        /// Component id (see `moduo catalog`).
        component_id: String,

        /// Quantity to add.
        #[arg(short, long, default_value = "1")]
        quantity: u32,
    },
    /// Remove a cart line.
    Remove {
        /// Cart line id.
        line_id: String,
    },
    /// Set a cart line's quantity (0 removes the line).
    SetQuantity {
        /// Cart line id.
        line_id: String,
        /// New quantity.
        quantity: u32,
    },
    /// Empty the cart.
    Clear,
}

/// Arguments for the ship command.
#[derive(Args)]
pub struct ShipArgs {
    /// Destination postal code (4-digit Norwegian format).
    pub postal_code: String,
}

/// Arguments for the checkout command.
#[derive(Args)]
pub struct CheckoutArgs {
    /// Destination postal code for the shipping quote (prompted if
    /// omitted).
    #[arg(short, long)]
    pub postal_code: Option<String>,
}
