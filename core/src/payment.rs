//! # Payment Strategies
//!
//! [`Payment`] is the only contract [`Order::checkout`](crate::order::Order::checkout)
//! knows about. Cash and card implement it directly. The external API has its
//! own call shape ([`ExternalTransactions::do_transaction`]) and is plugged in
//! through [`ExternalPaymentAdapter`].

use pizzeria_common::success;

use crate::price::Price;

/// Executes a payment of a given amount.
pub trait Payment {
    fn pay(&self, amount: Price);
}

#[derive(Clone, Copy, Debug, Default)]
pub struct CashPayment;

impl Payment for CashPayment {
    fn pay(&self, amount: Price) {
        success!("Paying {amount} in cash.");
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct CardPayment;

impl Payment for CardPayment {
    fn pay(&self, amount: Price) {
        success!("Paying {amount} by card.");
    }
}

/// Call shape exposed by third-party payment providers.
pub trait ExternalTransactions {
    fn do_transaction(&self, amount: Price);
}

/// Simulated third-party payment API.
#[derive(Clone, Copy, Debug, Default)]
pub struct ExternalPaymentApi;

impl ExternalTransactions for ExternalPaymentApi {
    fn do_transaction(&self, amount: Price) {
        success!("Payment completed through external API: {amount}");
    }
}

/// Exposes an [`ExternalTransactions`] provider as a [`Payment`].
///
/// Only the call shape changes; the amount is forwarded untouched.
#[derive(Clone, Debug, Default)]
pub struct ExternalPaymentAdapter<A = ExternalPaymentApi> {
    api: A,
}

impl<A: ExternalTransactions> ExternalPaymentAdapter<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn into_inner(self) -> A {
        self.api
    }
}

impl<A: ExternalTransactions> Payment for ExternalPaymentAdapter<A> {
    fn pay(&self, amount: Price) {
        self.api.do_transaction(amount);
    }
}
