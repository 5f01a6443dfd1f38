//! Simulated checkout command.

use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use indicatif::{ProgressBar, ProgressStyle};
use moduo_commerce::checkout::{CheckoutFlow, PaymentMethod, ShippingAddress};

use super::CheckoutArgs;
use crate::config::Context;

/// Run the checkout command.
pub async fn run(args: CheckoutArgs, ctx: &Context) -> Result<()> {
    let theme = ColorfulTheme::default();
    let mut cart = ctx.cart_store()?;

    if cart.cart().is_empty() {
        ctx.output.warn("The cart is empty; nothing to check out.");
        return Ok(());
    }

    ctx.output.header("Checkout");
    ctx.output
        .row("Subtotal", &cart.cart().total_price.to_string());

    // Shipping step
    let address = prompt_address(&args, &theme)?;
    let estimate = cart.estimate_shipping(&address.postal_code);
    let labels: Vec<String> = estimate
        .options
        .iter()
        .map(|o| {
            format!(
                "{} — {} ({}-{} business days)",
                o.name, o.price, o.estimated_days.min, o.estimated_days.max
            )
        })
        .collect();
    let choice = Select::with_theme(&theme)
        .with_prompt("Shipping option")
        .items(&labels)
        .default(0)
        .interact()?;
    let option = estimate.options[choice].clone();
    cart.set_shipping_cost(option.price);

    // Payment step
    let methods = [PaymentMethod::Card, PaymentMethod::Vipps, PaymentMethod::Invoice];
    let method_labels: Vec<&str> = methods.iter().map(|m| m.display_name()).collect();
    let method = methods[Select::with_theme(&theme)
        .with_prompt("Payment method")
        .items(&method_labels)
        .default(0)
        .interact()?];

    ctx.output
        .row("Total", &cart.cart().grand_total.to_string());

    let mut flow = CheckoutFlow::new();
    flow.submit_address(address)?;
    flow.set_payment_method(method);

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner} {msg}")?);
    spinner.set_message("Processing payment...");
    spinner.enable_steady_tick(std::time::Duration::from_millis(100));

    let order = flow.place_order(&mut cart, &option).await?;
    spinner.finish_and_clear();

    ctx.output
        .success(&format!("Order {} confirmed", order.order_number));
    ctx.output.row("Items", &order.item_count().to_string());
    ctx.output.row("Paid", &order.total.to_string());
    ctx.output.row(
        "Payment",
        order.payment_method.display_name(),
    );
    ctx.output.row(
        "Delivery",
        &format!("estimated {}", order.estimated_delivery),
    );
    ctx.output.info("Thanks for shopping with Moduo!");

    Ok(())
}

fn prompt_address(args: &CheckoutArgs, theme: &ColorfulTheme) -> Result<ShippingAddress> {
    let first_name: String = Input::with_theme(theme)
        .with_prompt("First name")
        .interact_text()?;
    let last_name: String = Input::with_theme(theme)
        .with_prompt("Last name")
        .interact_text()?;
    let email: String = Input::with_theme(theme)
        .with_prompt("Email")
        .interact_text()?;
    let phone: String = Input::with_theme(theme)
        .with_prompt("Phone")
        .allow_empty(true)
        .interact_text()?;
    let street: String = Input::with_theme(theme)
        .with_prompt("Street address")
        .interact_text()?;
    let postal_code: String = match &args.postal_code {
        Some(code) => code.clone(),
        None => Input::with_theme(theme)
            .with_prompt("Postal code")
            .interact_text()?,
    };
    let city: String = Input::with_theme(theme)
        .with_prompt("City")
        .interact_text()?;
    let country: String = Input::with_theme(theme)
        .with_prompt("Country")
        .default("Norge".to_string())
        .interact_text()?;

    Ok(ShippingAddress {
        first_name,
        last_name,
        email,
        phone,
        street,
        postal_code,
        city,
        country,
    })
}
