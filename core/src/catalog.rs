//! # Catalog
//!
//! Menu entries and the numbers the interactive session uses to pick them.
//! Parsing a selection never fails: an unknown number is simply `None` and
//! the caller decides whether to re-prompt or fall back.

use std::fmt;
use std::str::FromStr;

use crate::builder::Topping;
use crate::payment::{CardPayment, CashPayment, ExternalPaymentAdapter, ExternalPaymentApi, Payment};
use crate::pizza::{HawaiianPizza, PepperoniPizza, Pizza};
use crate::price::Price;

/// Pizzas with a fixed name and price.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CatalogItem {
    Pepperoni,
    Hawaiian,
}

impl CatalogItem {
    pub const ALL: [CatalogItem; 2] = [CatalogItem::Pepperoni, CatalogItem::Hawaiian];

    pub const fn name(self) -> &'static str {
        match self {
            CatalogItem::Pepperoni => PepperoniPizza::NAME,
            CatalogItem::Hawaiian => HawaiianPizza::NAME,
        }
    }

    pub const fn price(self) -> Price {
        match self {
            CatalogItem::Pepperoni => PepperoniPizza::PRICE,
            CatalogItem::Hawaiian => HawaiianPizza::PRICE,
        }
    }

    pub fn to_pizza(self) -> Box<dyn Pizza> {
        match self {
            CatalogItem::Pepperoni => Box::new(PepperoniPizza),
            CatalogItem::Hawaiian => Box::new(HawaiianPizza),
        }
    }
}

/// Entries of the main ordering menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MainMenuChoice {
    Add(CatalogItem),
    Custom,
    Finish,
}

impl MainMenuChoice {
    pub fn from_selection(selection: u32) -> Option<Self> {
        match selection {
            1 => Some(MainMenuChoice::Add(CatalogItem::Pepperoni)),
            2 => Some(MainMenuChoice::Add(CatalogItem::Hawaiian)),
            3 => Some(MainMenuChoice::Custom),
            4 => Some(MainMenuChoice::Finish),
            _ => None,
        }
    }
}

/// Entries of the topping sub-menu. `0` closes it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToppingChoice {
    Add(Topping),
    Done,
}

impl ToppingChoice {
    pub fn from_selection(selection: u32) -> Option<Self> {
        match selection {
            0 => Some(ToppingChoice::Done),
            1 => Some(ToppingChoice::Add(Topping::Cheese)),
            2 => Some(ToppingChoice::Add(Topping::Pepperoni)),
            3 => Some(ToppingChoice::Add(Topping::Pineapple)),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PaymentMethod {
    #[default]
    Cash,
    Card,
    External,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 3] =
        [PaymentMethod::Cash, PaymentMethod::Card, PaymentMethod::External];

    pub fn from_selection(selection: u32) -> Option<Self> {
        match selection {
            1 => Some(PaymentMethod::Cash),
            2 => Some(PaymentMethod::Card),
            3 => Some(PaymentMethod::External),
            _ => None,
        }
    }

    /// Like [`from_selection`](Self::from_selection) but unknown numbers mean cash.
    pub fn from_selection_or_default(selection: u32) -> Self {
        Self::from_selection(selection).unwrap_or_default()
    }

    pub const fn selection(self) -> u32 {
        match self {
            PaymentMethod::Cash => 1,
            PaymentMethod::Card => 2,
            PaymentMethod::External => 3,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            PaymentMethod::Cash => "Cash",
            PaymentMethod::Card => "Card",
            PaymentMethod::External => "External API (adapter)",
        }
    }

    pub fn handler(self) -> Box<dyn Payment> {
        match self {
            PaymentMethod::Cash => Box::new(CashPayment),
            PaymentMethod::Card => Box::new(CardPayment),
            PaymentMethod::External => Box::new(ExternalPaymentAdapter::new(ExternalPaymentApi)),
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PaymentMethod {
    type Err = String;

    /// Accepts the method names (`cash`, `card`, `external`) case-insensitively,
    /// or their menu numbers.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        match lower.as_str() {
            "cash" => Ok(PaymentMethod::Cash),
            "card" => Ok(PaymentMethod::Card),
            "external" | "api" => Ok(PaymentMethod::External),
            other => other
                .parse::<u32>()
                .ok()
                .and_then(PaymentMethod::from_selection)
                .ok_or_else(|| format!("invalid payment method: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn main_menu_numbers() {
        assert_eq!(
            MainMenuChoice::from_selection(1),
            Some(MainMenuChoice::Add(CatalogItem::Pepperoni))
        );
        assert_eq!(
            MainMenuChoice::from_selection(2),
            Some(MainMenuChoice::Add(CatalogItem::Hawaiian))
        );
        assert_eq!(MainMenuChoice::from_selection(3), Some(MainMenuChoice::Custom));
        assert_eq!(MainMenuChoice::from_selection(4), Some(MainMenuChoice::Finish));
        assert_eq!(MainMenuChoice::from_selection(0), None);
        assert_eq!(MainMenuChoice::from_selection(5), None);
    }

    #[test]
    fn topping_menu_numbers() {
        assert_eq!(ToppingChoice::from_selection(0), Some(ToppingChoice::Done));
        assert_eq!(
            ToppingChoice::from_selection(3),
            Some(ToppingChoice::Add(Topping::Pineapple))
        );
        assert_eq!(ToppingChoice::from_selection(9), None);
    }

    #[test]
    fn unknown_payment_selection_falls_back_to_cash() {
        assert_eq!(PaymentMethod::from_selection_or_default(2), PaymentMethod::Card);
        assert_eq!(PaymentMethod::from_selection_or_default(3), PaymentMethod::External);
        assert_eq!(PaymentMethod::from_selection_or_default(0), PaymentMethod::Cash);
        assert_eq!(PaymentMethod::from_selection_or_default(42), PaymentMethod::Cash);
    }

    #[test]
    fn payment_method_from_str() {
        assert_eq!("CARD".parse::<PaymentMethod>(), Ok(PaymentMethod::Card));
        assert_eq!("external".parse::<PaymentMethod>(), Ok(PaymentMethod::External));
        assert_eq!("1".parse::<PaymentMethod>(), Ok(PaymentMethod::Cash));
        assert!("bitcoin".parse::<PaymentMethod>().is_err());
    }

    #[test]
    fn selection_numbers_round_trip() {
        for method in PaymentMethod::ALL {
            assert_eq!(PaymentMethod::from_selection(method.selection()), Some(method));
        }
    }

    #[test]
    fn catalog_items_match_their_pizzas() {
        for item in CatalogItem::ALL {
            let pizza = item.to_pizza();
            assert_eq!(pizza.name(), item.name());
            assert_eq!(pizza.price(), item.price());
        }
    }
}
