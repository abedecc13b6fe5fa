//! # Pizzeria Core
//!
//! Domain of the pizza ordering workflow. Nothing in here reads input or
//! writes to the terminal directly: confirmations go through `tracing` and
//! the CLI decides how they look.
//!
//! ## Contents
//! * [`price::Price`]: amount in Bolivianos.
//! * [`pizza`]: the [`pizza::Pizza`] capability and its fixed and custom variants.
//! * [`builder::PizzaBuilder`]: accumulates topping surcharges into a custom pizza.
//! * [`payment`]: the [`payment::Payment`] strategies, including the adapter for the external API.
//! * [`observer`]: sinks notified with the final total at checkout.
//! * [`order::Order`]: owns the pizzas, borrows the observers, drives checkout.
//! * [`catalog`]: menu entries and the selection numbers that pick them.

pub mod builder;
pub mod catalog;
pub mod observer;
pub mod order;
pub mod payment;
pub mod pizza;
pub mod price;
