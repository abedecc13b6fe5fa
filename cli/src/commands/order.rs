use std::io::{self, BufRead};

use anyhow::Context;
use colored::*;
use tracing::{debug, info, warn};

use crate::pprint;
use crate::terminal::{colors, format, input, print};
use pizzeria_common::{config::Config, error::MenuError, success};
use pizzeria_core::builder::{PizzaBuilder, Topping};
use pizzeria_core::catalog::{CatalogItem, MainMenuChoice, PaymentMethod, ToppingChoice};
use pizzeria_core::observer::{AuditLogger, EmailNotifier};
use pizzeria_core::order::Order;
use pizzeria_core::pizza::{CustomPizza, Pizza};
use pizzeria_core::price::Price;

/// Outcome of asking the user for a number.
enum Reply {
    Number(u32),
    Invalid,
    Closed,
}

pub fn order(payment: Option<PaymentMethod>, cfg: &Config) -> anyhow::Result<()> {
    let email: EmailNotifier = EmailNotifier;
    let audit: AuditLogger = AuditLogger;

    let mut order: Order = Order::new();
    order.add_observer(&email);
    order.add_observer(&audit);

    let stdin = io::stdin();
    let mut input = stdin.lock();

    let total: Price = run_session(&mut input, &mut order, payment, cfg)?;
    print_summary(total, cfg);
    Ok(())
}

/// Drives a whole session: take pizzas, list them, pick a payment, check out.
///
/// The order is cleared after checkout. Returns the amount charged.
pub fn run_session<R: BufRead>(
    input: &mut R,
    order: &mut Order<'_>,
    payment: Option<PaymentMethod>,
    cfg: &Config,
) -> anyhow::Result<Price> {
    take_pizzas(input, order)?;
    print_order(order, cfg);

    let method: PaymentMethod = match payment {
        Some(method) => {
            debug!("Payment method preset to {method}");
            method
        }
        None => choose_payment(input)?,
    };

    print::header("checkout", cfg);
    let handler = method.handler();
    let total: Price = order.checkout(handler.as_ref());
    order.clear_order();

    Ok(total)
}

fn ask<R: BufRead>(input: &mut R, label: &str) -> anyhow::Result<Reply> {
    print::prompt(label);
    match input::read_selection(input) {
        Ok(selection) => Ok(Reply::Number(selection)),
        Err(MenuError::EndOfInput) => Ok(Reply::Closed),
        Err(err @ MenuError::NotANumber(_)) => {
            warn!("{err}");
            Ok(Reply::Invalid)
        }
        Err(err) => Err(err).context("failed to read from stdin"),
    }
}

fn take_pizzas<R: BufRead>(input: &mut R, order: &mut Order<'_>) -> anyhow::Result<()> {
    loop {
        print_main_menu();

        let selection: u32 = match ask(input, "Select an option")? {
            Reply::Number(selection) => selection,
            Reply::Invalid => continue,
            Reply::Closed => {
                info!("No more input, finishing order...");
                return Ok(());
            }
        };

        match MainMenuChoice::from_selection(selection) {
            Some(MainMenuChoice::Add(item)) => {
                success!("Added {} ({})", item.name(), item.price());
                order.add_pizza(item.to_pizza());
            }
            Some(MainMenuChoice::Custom) => {
                let pizza: CustomPizza = build_custom(input)?;
                success!("Added {} ({})", pizza.name(), pizza.price());
                order.add_pizza(Box::new(pizza));
            }
            Some(MainMenuChoice::Finish) => {
                info!("Finishing order...");
                return Ok(());
            }
            None => warn!("Invalid option."),
        }
    }
}

fn build_custom<R: BufRead>(input: &mut R) -> anyhow::Result<CustomPizza> {
    let mut builder: PizzaBuilder = PizzaBuilder::new();
    print_topping_menu();

    loop {
        let selection: u32 = match ask(input, "Topping")? {
            Reply::Number(selection) => selection,
            Reply::Invalid => continue,
            Reply::Closed => break,
        };

        match ToppingChoice::from_selection(selection) {
            Some(ToppingChoice::Add(topping)) => {
                builder.add(topping);
                debug!("{topping} added, custom pizza now at {}", builder.price());
            }
            Some(ToppingChoice::Done) => break,
            None => warn!("Invalid option."),
        }
    }

    Ok(builder.build())
}

fn choose_payment<R: BufRead>(input: &mut R) -> anyhow::Result<PaymentMethod> {
    print_payment_menu();

    let method: Option<PaymentMethod> = match ask(input, "Payment method")? {
        Reply::Number(selection) => PaymentMethod::from_selection(selection),
        Reply::Invalid | Reply::Closed => None,
    };

    Ok(method.unwrap_or_else(|| {
        warn!("Invalid method. {} will be used by default.", PaymentMethod::default());
        PaymentMethod::default()
    }))
}

fn print_main_menu() {
    pprint!();
    print::GLOBAL_KEY_WIDTH.set(24);
    for (idx, item) in CatalogItem::ALL.iter().enumerate() {
        print::menu_option(idx as u32 + 1, item.name(), Some(format::price(item.price())));
    }
    print::menu_option::<&str>(3, "Custom pizza", None);
    print::menu_option::<&str>(4, "Finish order", None);
}

fn print_topping_menu() {
    print::print_status("Choose toppings for your custom pizza");
    print::GLOBAL_KEY_WIDTH.set(24);
    for (idx, topping) in Topping::ALL.iter().enumerate() {
        print::menu_option(idx as u32 + 1, topping.label(), Some(format::surcharge(topping.surcharge())));
    }
    print::menu_option::<&str>(0, "Done", None);
}

fn print_payment_menu() {
    pprint!();
    print::print_status("Select a payment method");
    for method in PaymentMethod::ALL {
        print::menu_option::<&str>(method.selection(), method.label(), None);
    }
}

fn print_order(order: &Order<'_>, cfg: &Config) {
    match cfg.quiet {
        0 => {}
        1 => {
            for line in compact_listing(order) {
                print::print(&line);
            }
            return;
        }
        _ => return,
    }

    print::header("your order", cfg);
    if order.is_empty() {
        print::print_status("The order is empty");
        return;
    }

    print::tree_head(&format!("{} pizza(s)", order.len()));
    print::as_tree_one_level(format::order_to_details(order));
}

/// Plain listing shown when headers are hidden.
fn compact_listing(order: &Order<'_>) -> Vec<String> {
    order.list_order().lines().map(str::to_string).collect()
}

fn print_summary(total: Price, cfg: &Config) {
    let total: ColoredString = format::price(total).bold();
    let output: String = format!("Order complete: {total} charged")
        .color(colors::TEXT_DEFAULT)
        .to_string();

    match cfg.quiet {
        0 => {
            print::fat_separator();
            print::centerln(&output);
            print::end_of_program();
        }
        _ => success!("{}", output),
    }
}
