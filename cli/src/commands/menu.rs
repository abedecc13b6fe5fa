use pizzeria_common::config::Config;
use pizzeria_core::builder::Topping;
use pizzeria_core::catalog::{CatalogItem, PaymentMethod};

use crate::pprint;
use crate::terminal::{format, print};

pub fn menu(cfg: &Config) {
    print::GLOBAL_KEY_WIDTH.set(20);

    for item in CatalogItem::ALL {
        print::aligned_line(item.name(), format::price(item.price()));
    }

    pprint!();
    print::header("toppings", cfg);
    for topping in Topping::ALL {
        print::aligned_line(topping.label(), format::surcharge(topping.surcharge()));
    }

    pprint!();
    print::header("payment methods", cfg);
    for method in PaymentMethod::ALL {
        print::aligned_line(method.label(), format!("option {}", method.selection()));
    }

    if !cfg.is_quiet() {
        print::end_of_program();
    }
}
