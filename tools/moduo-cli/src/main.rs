//! Moduo CLI - command line storefront for the modular shelf system.
//!
//! Commands:
//! - `moduo catalog` - browse the component catalog
//! - `moduo build` - build a shelf interactively
//! - `moduo cart` - inspect and edit the cart
//! - `moduo ship` - estimate shipping to a postal code
//! - `moduo checkout` - place a simulated order

mod commands;
mod config;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{CartArgs, CatalogArgs, CheckoutArgs, ShipArgs};

/// Moduo - build, price, and order modular shelving
#[derive(Parser)]
#[command(name = "moduo")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the component catalog
    Catalog(CatalogArgs),

    /// Build a shelf interactively
    Build,

    /// Inspect and edit the cart
    Cart(CartArgs),

    /// Estimate shipping to a postal code
    Ship(ShipArgs),

    /// Place a simulated order
    Checkout(CheckoutArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let output = output::Output::new(cli.verbose);
    let ctx = config::Context::load(cli.config.as_deref(), output)?;

    let result = match cli.command {
        Commands::Catalog(args) => commands::catalog::run(args, &ctx),
        Commands::Build => commands::build::run(&ctx),
        Commands::Cart(args) => commands::cart::run(args, &ctx),
        Commands::Ship(args) => commands::ship::run(args, &ctx),
        Commands::Checkout(args) => commands::checkout::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{e:#}"));
        std::process::exit(1);
    }

    Ok(())
}
