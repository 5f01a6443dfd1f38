//! Shipping estimate command.

use anyhow::Result;

use super::ShipArgs;
use crate::config::Context;

/// Run the ship command.
pub fn run(args: ShipArgs, ctx: &Context) -> Result<()> {
    let cart = ctx.cart_store()?;
    if cart.cart().is_empty() {
        ctx.output.warn("The cart is empty; nothing to ship.");
        return Ok(());
    }

    let estimate = cart.estimate_shipping(&args.postal_code);

    ctx.output
        .header(&format!("Shipping to {}", args.postal_code));
    ctx.output.row("Weight", &format!("{:.1} kg", estimate.weight));
    ctx.output.row(
        "Parcel",
        &format!(
            "{} × {} × {} cm",
            estimate.dimensions.length, estimate.dimensions.width, estimate.dimensions.height
        ),
    );
    ctx.output
        .row("Packages", &estimate.packages.to_string());
    println!();

    for option in &estimate.options {
        ctx.output.row(
            &option.name,
            &format!(
                "{} ({}, {}-{} business days)",
                option.price, option.carrier, option.estimated_days.min, option.estimated_days.max
            ),
        );
    }

    Ok(())
}
