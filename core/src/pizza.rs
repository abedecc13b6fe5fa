//! # Menu Items
//!
//! Everything that can be put in an [`Order`](crate::order::Order) implements
//! [`Pizza`]. Items are immutable once created.

use crate::price::Price;

/// A named, priced menu entity.
pub trait Pizza {
    fn name(&self) -> &str;
    fn price(&self) -> Price;
}

/// Fixed catalog entry: pepperoni.
#[derive(Clone, Copy, Debug, Default)]
pub struct PepperoniPizza;

impl PepperoniPizza {
    pub const NAME: &'static str = "Pizza Pepperoni";
    pub const PRICE: Price = Price::new(40);
}

impl Pizza for PepperoniPizza {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn price(&self) -> Price {
        Self::PRICE
    }
}

/// Fixed catalog entry: hawaiian.
#[derive(Clone, Copy, Debug, Default)]
pub struct HawaiianPizza;

impl HawaiianPizza {
    pub const NAME: &'static str = "Pizza Hawaiana";
    pub const PRICE: Price = Price::new(50);
}

impl Pizza for HawaiianPizza {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn price(&self) -> Price {
        Self::PRICE
    }
}

/// A pizza composed by a [`PizzaBuilder`](crate::builder::PizzaBuilder).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CustomPizza {
    name: String,
    price: Price,
}

impl CustomPizza {
    pub fn new(name: impl Into<String>, price: Price) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

impl Pizza for CustomPizza {
    fn name(&self) -> &str {
        &self.name
    }

    fn price(&self) -> Price {
        self.price
    }
}
