//! Cart inspection and editing commands.

use anyhow::{bail, Result};
use console::style;
use moduo_commerce::cart::{Cart, CartLineSource, CartStore};
use moduo_commerce::catalog::standard_catalog;
use moduo_commerce::ids::{CartLineId, ComponentId};

use super::{CartArgs, CartCommand};
use crate::config::Context;

/// Run the cart command.
pub fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    let mut store = ctx.cart_store()?;

    match args.command {
        Some(CartCommand::Show) | None => show(store.cart(), ctx),
        Some(CartCommand::Add {
            component_id,
            quantity,
        }) => add(&mut store, &component_id, quantity, ctx),
        Some(CartCommand::Remove { line_id }) => {
            store.remove_line(&CartLineId::new(line_id));
            ctx.output.success("Line removed");
            Ok(())
        }
        Some(CartCommand::SetQuantity { line_id, quantity }) => {
            store.update_quantity(&CartLineId::new(line_id), quantity);
            ctx.output.success("Quantity updated");
            Ok(())
        }
        Some(CartCommand::Clear) => {
            store.clear();
            ctx.output.success("Cart emptied");
            Ok(())
        }
    }
}

fn show(cart: &Cart, ctx: &Context) -> Result<()> {
    if cart.is_empty() {
        ctx.output.info("The cart is empty.");
        ctx.output
            .info("Add parts with `moduo cart add <component-id>` or build a shelf with `moduo build`.");
        return Ok(());
    }

    ctx.output.header("Cart");
    for line in &cart.items {
        let label = match &line.source {
            CartLineSource::Configuration { configuration } => format!(
                "{} ({} parts)",
                configuration.name,
                configuration.item_count()
            ),
            CartLineSource::Component { component } => component.name.clone(),
        };
        println!(
            "  {:<34} {:>3} × {:>8} = {:>10}   {}",
            label,
            line.quantity,
            line.price.to_string(),
            line.subtotal().to_string(),
            style(&line.id).dim(),
        );
    }
    println!();
    ctx.output
        .row("Items", &cart.total_items.to_string());
    ctx.output.row("Subtotal", &cart.total_price.to_string());
    ctx.output
        .row("Shipping", &cart.shipping_cost.to_string());
    ctx.output.row("Total", &cart.grand_total.to_string());

    Ok(())
}

fn add(store: &mut CartStore, component_id: &str, quantity: u32, ctx: &Context) -> Result<()> {
    let id = ComponentId::new(component_id);
    let catalog = standard_catalog();
    let Some(component) = catalog.iter().find(|c| c.id == id) else {
        bail!("No such component: {component_id} (see `moduo catalog`)");
    };

    store.add_component(component, quantity);
    ctx.output.success(&format!(
        "Added {} × {} ({})",
        quantity,
        component.name,
        store.cart().total_price
    ));
    Ok(())
}
