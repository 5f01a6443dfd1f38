//! Catalog browsing command.

use anyhow::{bail, Result};
use console::style;
use moduo_commerce::catalog::{standard_catalog, ComponentKind};

use super::CatalogArgs;
use crate::config::Context;

/// Run the catalog command.
pub fn run(args: CatalogArgs, ctx: &Context) -> Result<()> {
    let kind = match args.kind.as_deref() {
        Some(s) => match ComponentKind::from_str(s) {
            Some(kind) => Some(kind),
            None => bail!("Unknown component kind: {s}"),
        },
        None => None,
    };

    let catalog = standard_catalog();
    let components: Vec<_> = catalog
        .iter()
        .filter(|c| kind.map_or(true, |k| c.kind == k))
        .collect();

    ctx.output.header("Component catalog");
    println!(
        "  {:<14} {:<22} {:<10} {:>18} {:>8} {:>10}",
        style("ID").dim(),
        style("NAME").dim(),
        style("KIND").dim(),
        style("DIMENSIONS").dim(),
        style("WEIGHT").dim(),
        style("PRICE").dim(),
    );
    for component in &components {
        println!(
            "  {:<14} {:<22} {:<10} {:>18} {:>7.1} kg {:>7}",
            component.id.to_string(),
            component.name,
            component.kind.as_str(),
            component.dimensions.to_string(),
            component.weight,
            component.price.to_string(),
        );
    }
    println!();
    ctx.output.info(&format!("{} components", components.len()));

    Ok(())
}
