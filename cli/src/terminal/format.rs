use crate::terminal::colors;
use colored::*;
use pizzeria_core::order::Order;
use pizzeria_core::pizza::Pizza;
use pizzeria_core::price::Price;

pub type Detail = (String, ColoredString);

pub fn price(price: Price) -> ColoredString {
    price.to_string().color(colors::PRICE)
}

pub fn surcharge(price: Price) -> ColoredString {
    format!("+{}", price).color(colors::SURCHARGE)
}

pub fn pizza_to_detail(pizza: &dyn Pizza) -> Detail {
    (pizza.name().to_string(), self::price(pizza.price()))
}

pub fn order_to_details(order: &Order<'_>) -> Vec<Detail> {
    order
        .pizzas()
        .iter()
        .map(|pizza| pizza_to_detail(pizza.as_ref()))
        .collect()
}
