//! # Order
//!
//! The subject of the workflow. An [`Order`] owns the pizzas added to it and
//! borrows the observers registered on it, so observers outlive the order
//! and are never dropped by it.

use std::fmt::Write;

use tracing::{debug, info};

use crate::observer::OrderObserver;
use crate::payment::Payment;
use crate::pizza::Pizza;
use crate::price::Price;

#[derive(Default)]
pub struct Order<'a> {
    pizzas: Vec<Box<dyn Pizza>>,
    observers: Vec<&'a dyn OrderObserver>,
}

impl<'a> Order<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a pizza. The order takes ownership of it.
    pub fn add_pizza(&mut self, pizza: Box<dyn Pizza>) {
        debug!("Added {} ({}) to the order", pizza.name(), pizza.price());
        self.pizzas.push(pizza);
    }

    pub fn add_observer(&mut self, observer: &'a dyn OrderObserver) {
        self.observers.push(observer);
    }

    pub fn pizzas(&self) -> &[Box<dyn Pizza>] {
        &self.pizzas
    }

    pub fn len(&self) -> usize {
        self.pizzas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pizzas.is_empty()
    }

    pub fn calculate_total(&self) -> Price {
        self.pizzas.iter().map(|pizza| pizza.price()).sum()
    }

    /// Calls every observer in registration order.
    pub fn notify_observers(&self, total: Price) {
        for observer in &self.observers {
            observer.update(total);
        }
    }

    /// Charges the current contents of the order.
    ///
    /// The total is recomputed on every call. Observers hear about it before
    /// the payment runs, and an empty order still reaches the payment with
    /// `Bs0`. Returns the amount charged.
    pub fn checkout(&self, payment: &dyn Payment) -> Price {
        let total = self.calculate_total();
        self.notify_observers(total);
        info!("Total to pay: {total}");
        payment.pay(total);
        total
    }

    pub fn list_order(&self) -> String {
        let mut listing = String::from("Pizzas in the order:\n");
        for pizza in &self.pizzas {
            // Writing into a String cannot fail.
            let _ = writeln!(listing, "- {} ({})", pizza.name(), pizza.price());
        }
        listing
    }

    /// Drops every pizza. Observers stay registered.
    pub fn clear_order(&mut self) {
        self.pizzas.clear();
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
