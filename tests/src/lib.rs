mod checkout;
mod support;
