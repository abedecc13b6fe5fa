#![cfg(test)]
use std::cell::RefCell;

use pizzeria_core::observer::OrderObserver;
use pizzeria_core::payment::{ExternalTransactions, Payment};
use pizzeria_core::price::Price;

/// Payment that remembers every amount it was asked to charge.
#[derive(Default)]
pub struct RecordingPayment {
    pub paid: RefCell<Vec<Price>>,
}

impl Payment for RecordingPayment {
    fn pay(&self, amount: Price) {
        self.paid.borrow_mut().push(amount);
    }
}

/// Observer that remembers every total it was notified with.
#[derive(Default)]
pub struct RecordingObserver {
    pub seen: RefCell<Vec<Price>>,
}

impl OrderObserver for RecordingObserver {
    fn update(&self, total: Price) {
        self.seen.borrow_mut().push(total);
    }
}

/// Stand-in for a third-party provider.
#[derive(Default)]
pub struct RecordingGateway {
    pub transactions: RefCell<Vec<Price>>,
}

impl ExternalTransactions for RecordingGateway {
    fn do_transaction(&self, amount: Price) {
        self.transactions.borrow_mut().push(amount);
    }
}
