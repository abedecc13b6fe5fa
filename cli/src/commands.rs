pub mod menu;
pub mod order;

use clap::{ArgAction, Parser, Subcommand};
use pizzeria_core::catalog::PaymentMethod;

#[derive(Parser)]
#[command(name = "pizzeria")]
#[command(about = "Order pizzas from the terminal.")]
#[command(version)]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Do not print the banner
    #[arg(long, global = true)]
    pub no_banner: bool,

    /// Reduce decoration (-q hides headers, -qq also hides the order listing)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Disable coloured output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Take an order interactively and pay for it
    #[command(alias = "o")]
    Order {
        /// Pay with this method instead of asking (cash, card, external)
        #[arg(short, long)]
        payment: Option<PaymentMethod>,
    },
    /// Show pizzas, toppings and payment methods
    #[command(alias = "m")]
    Menu,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
