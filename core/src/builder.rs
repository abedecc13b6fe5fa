use std::fmt;

use crate::pizza::CustomPizza;
use crate::price::Price;

/// Add-ons available for a custom pizza.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Topping {
    Cheese,
    Pepperoni,
    Pineapple,
}

impl Topping {
    pub const ALL: [Topping; 3] = [Topping::Cheese, Topping::Pepperoni, Topping::Pineapple];

    pub const fn surcharge(self) -> Price {
        match self {
            Topping::Cheese => Price::new(10),
            Topping::Pepperoni => Price::new(12),
            Topping::Pineapple => Price::new(8),
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Topping::Cheese => "Cheese",
            Topping::Pepperoni => "Pepperoni",
            Topping::Pineapple => "Pineapple",
        }
    }
}

impl fmt::Display for Topping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Accumulates topping surcharges and produces [`CustomPizza`] values.
///
/// `build` takes a snapshot and leaves the accumulator untouched, so building
/// twice from the same builder carries the earlier add-ons into the second
/// pizza. Start from a fresh builder for every independent pizza.
///
/// ```
/// use pizzeria_core::builder::PizzaBuilder;
/// use pizzeria_core::pizza::Pizza;
/// use pizzeria_core::price::Price;
///
/// let pizza = PizzaBuilder::new().add_cheese().add_pepperoni().build();
/// assert_eq!(pizza.price(), Price::new(22));
/// ```
#[derive(Clone, Debug)]
pub struct PizzaBuilder {
    name: String,
    price: Price,
}

impl PizzaBuilder {
    pub const DEFAULT_NAME: &'static str = "Pizza Personalizada";

    pub fn new() -> Self {
        Self {
            name: Self::DEFAULT_NAME.to_string(),
            price: Price::ZERO,
        }
    }

    pub fn add_cheese(&mut self) -> &mut Self {
        self.add(Topping::Cheese)
    }

    pub fn add_pepperoni(&mut self) -> &mut Self {
        self.add(Topping::Pepperoni)
    }

    pub fn add_pineapple(&mut self) -> &mut Self {
        self.add(Topping::Pineapple)
    }

    pub fn add(&mut self, topping: Topping) -> &mut Self {
        self.price += topping.surcharge();
        self
    }

    /// Price accumulated so far.
    pub fn price(&self) -> Price {
        self.price
    }

    pub fn build(&self) -> CustomPizza {
        CustomPizza::new(self.name.clone(), self.price)
    }
}

impl Default for PizzaBuilder {
    fn default() -> Self {
        Self::new()
    }
}
