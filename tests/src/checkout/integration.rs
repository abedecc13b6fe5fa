#![cfg(test)]
use pizzeria_core::builder::PizzaBuilder;
use pizzeria_core::catalog::CatalogItem;
use pizzeria_core::order::Order;
use pizzeria_core::payment::{ExternalPaymentAdapter, Payment};
use pizzeria_core::pizza::{HawaiianPizza, PepperoniPizza, Pizza};
use pizzeria_core::price::Price;

use crate::support::{RecordingGateway, RecordingObserver, RecordingPayment};

/// Pepperoni plus a custom pizza with cheese and pineapple, paid through two
/// observers and a recording payment.
#[test]
fn pepperoni_and_custom_checkout_end_to_end() {
    let email = RecordingObserver::default();
    let audit = RecordingObserver::default();
    let payment = RecordingPayment::default();

    let mut order = Order::new();
    order.add_observer(&email);
    order.add_observer(&audit);

    order.add_pizza(Box::new(PepperoniPizza));
    order.add_pizza(Box::new(PizzaBuilder::new().add_cheese().add_pineapple().build()));

    assert_eq!(order.calculate_total(), Price::new(58));

    let charged = order.checkout(&payment);

    assert_eq!(charged, Price::new(58));
    assert_eq!(*payment.paid.borrow(), vec![Price::new(58)]);
    assert_eq!(*email.seen.borrow(), vec![Price::new(58)]);
    assert_eq!(*audit.seen.borrow(), vec![Price::new(58)]);
}

#[test]
fn adding_catalog_item_n_times_scales_total() {
    for item in CatalogItem::ALL {
        for n in 0..5u32 {
            let mut order = Order::new();
            order.add_pizza(Box::new(PizzaBuilder::new().add_pepperoni().build()));
            let before = order.calculate_total();

            for _ in 0..n {
                order.add_pizza(item.to_pizza());
            }

            assert_eq!(order.calculate_total(), before + item.price().times(n));
        }
    }
}

#[test]
fn total_matches_sum_regardless_of_notifications() {
    let observer = RecordingObserver::default();
    let pizzas: Vec<Box<dyn Pizza>> = vec![
        Box::new(HawaiianPizza),
        Box::new(PizzaBuilder::new().build()),
        Box::new(PepperoniPizza),
        Box::new(PizzaBuilder::new().add_cheese().add_cheese().build()),
    ];
    let expected: Price = pizzas.iter().map(|pizza| pizza.price()).sum();

    let mut order = Order::new();
    order.add_observer(&observer);
    for pizza in pizzas {
        order.notify_observers(order.calculate_total());
        order.add_pizza(pizza);
    }

    assert_eq!(order.calculate_total(), expected);
    assert_eq!(observer.seen.borrow().len(), 4);
}

#[test]
fn cleared_order_checks_out_at_zero() {
    let observer = RecordingObserver::default();
    let payment = RecordingPayment::default();

    let mut order = Order::new();
    order.add_observer(&observer);
    order.add_pizza(Box::new(HawaiianPizza));
    order.checkout(&payment);
    order.clear_order();

    assert!(order.pizzas().is_empty());
    assert_eq!(order.calculate_total(), Price::ZERO);

    order.checkout(&payment);
    assert_eq!(*payment.paid.borrow(), vec![Price::new(50), Price::ZERO]);
    assert_eq!(*observer.seen.borrow(), vec![Price::new(50), Price::ZERO]);
}

#[test]
fn adapter_checkout_reaches_external_gateway_unchanged() {
    let adapter = ExternalPaymentAdapter::new(RecordingGateway::default());

    let mut order = Order::new();
    order.add_pizza(Box::new(PepperoniPizza));
    order.add_pizza(Box::new(HawaiianPizza));
    order.checkout(&adapter);

    adapter.pay(Price::new(13));

    assert_eq!(
        *adapter.api().transactions.borrow(),
        vec![Price::new(90), Price::new(13)]
    );
}
