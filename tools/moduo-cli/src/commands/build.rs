//! Interactive shelf builder session.
//!
//! The in-progress configuration lives only for this session; the saved
//! list and the cart persist in the data directory.

use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};
use moduo_commerce::builder::{BuilderStore, ShelfConfiguration};
use moduo_commerce::catalog::{standard_catalog, ShelfComponent};

use crate::config::Context;

/// Run the build command.
pub fn run(ctx: &Context) -> Result<()> {
    let theme = ColorfulTheme::default();
    let catalog = standard_catalog();
    let mut builder = ctx.builder_store()?;
    let mut cart = ctx.cart_store()?;

    start_session(&mut builder, &theme)?;

    loop {
        let Some(config) = builder.configuration() else {
            break;
        };
        summarize(config, ctx);

        let actions = [
            "Add component",
            "Change quantity",
            "Remove component",
            "Rename",
            "Save configuration",
            "Add to cart",
            "Finish",
        ];
        let choice = Select::with_theme(&theme)
            .with_prompt("What next?")
            .items(&actions)
            .default(0)
            .interact()?;

        match choice {
            0 => add_component(&mut builder, &catalog, &theme)?,
            1 => change_quantity(&mut builder, &theme)?,
            2 => remove_component(&mut builder, &theme)?,
            3 => {
                let name: String = Input::with_theme(&theme)
                    .with_prompt("New name")
                    .interact_text()?;
                builder.rename(name);
            }
            4 => {
                builder.save();
                ctx.output.success("Configuration saved");
            }
            5 => {
                if let Some(config) = builder.configuration().cloned() {
                    cart.add_configuration(&config);
                    ctx.output.success(&format!(
                        "Added \"{}\" to the cart ({})",
                        config.name,
                        cart.cart().total_price
                    ));
                }
            }
            _ => {
                if builder.is_dirty() {
                    let save = Confirm::with_theme(&theme)
                        .with_prompt("You have unsaved changes. Save before leaving?")
                        .default(true)
                        .interact()?;
                    if save {
                        builder.save();
                        ctx.output.success("Configuration saved");
                    }
                }
                break;
            }
        }
    }

    Ok(())
}

/// Pick up a saved configuration or start fresh.
fn start_session(builder: &mut BuilderStore, theme: &ColorfulTheme) -> Result<()> {
    if builder.saved().is_empty() {
        builder.create_new(None);
        return Ok(());
    }

    let mut items: Vec<String> = builder
        .saved()
        .iter()
        .map(|c| format!("{} ({} parts, {})", c.name, c.item_count(), c.total_price))
        .collect();
    items.insert(0, "New configuration".to_string());

    let choice = Select::with_theme(theme)
        .with_prompt("Start from")
        .items(&items)
        .default(0)
        .interact()?;

    if choice == 0 {
        builder.create_new(None);
    } else {
        let config = builder.saved()[choice - 1].clone();
        builder.load(config);
    }
    Ok(())
}

fn summarize(config: &ShelfConfiguration, ctx: &Context) {
    ctx.output.header(&config.name);
    for item in &config.items {
        println!(
            "  {:>3} × {:<22} {}",
            item.quantity,
            item.component.name,
            item.component.price * item.quantity
        );
    }
    if config.is_empty() {
        println!("  (no components yet)");
    }
    println!();
    ctx.output
        .row("Dimensions", &config.total_dimensions.to_string());
    ctx.output
        .row("Weight", &format!("{:.1} kg", config.total_weight));
    ctx.output.row("Price", &config.total_price.to_string());
}

fn add_component(
    builder: &mut BuilderStore,
    catalog: &[ShelfComponent],
    theme: &ColorfulTheme,
) -> Result<()> {
    let items: Vec<String> = catalog
        .iter()
        .map(|c| format!("{} — {} ({})", c.name, c.dimensions, c.price))
        .collect();
    let choice = Select::with_theme(theme)
        .with_prompt("Component")
        .items(&items)
        .default(0)
        .interact()?;
    let quantity: u32 = Input::with_theme(theme)
        .with_prompt("Quantity")
        .default(1)
        .interact_text()?;

    builder.add_component(&catalog[choice], quantity);
    Ok(())
}

fn change_quantity(builder: &mut BuilderStore, theme: &ColorfulTheme) -> Result<()> {
    let Some((ids, items)) = configured_items(builder) else {
        return Ok(());
    };
    let choice = Select::with_theme(theme)
        .with_prompt("Which item?")
        .items(&items)
        .default(0)
        .interact()?;
    let quantity: u32 = Input::with_theme(theme)
        .with_prompt("New quantity (0 removes)")
        .interact_text()?;

    builder.update_quantity(&ids[choice], quantity);
    Ok(())
}

fn remove_component(builder: &mut BuilderStore, theme: &ColorfulTheme) -> Result<()> {
    let Some((ids, items)) = configured_items(builder) else {
        return Ok(());
    };
    let choice = Select::with_theme(theme)
        .with_prompt("Remove which item?")
        .items(&items)
        .default(0)
        .interact()?;

    builder.remove_component(&ids[choice]);
    Ok(())
}

type ItemChoices = (
    Vec<moduo_commerce::ids::ComponentId>,
    Vec<String>,
);

fn configured_items(builder: &BuilderStore) -> Option<ItemChoices> {
    let config = builder.configuration()?;
    if config.is_empty() {
        return None;
    }
    let ids = config
        .items
        .iter()
        .map(|i| i.component_id.clone())
        .collect();
    let labels = config
        .items
        .iter()
        .map(|i| format!("{} × {}", i.quantity, i.component.name))
        .collect();
    Some((ids, labels))
}
