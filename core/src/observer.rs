use tracing::info;

use crate::price::Price;

/// Sink notified with the final total of an order at checkout.
///
/// Notifications are fire-and-forget: nothing an observer does can change
/// the outcome of the checkout.
pub trait OrderObserver {
    fn update(&self, total: Price);
}

/// Sends the order confirmation by e-mail.
#[derive(Clone, Copy, Debug, Default)]
pub struct EmailNotifier;

impl OrderObserver for EmailNotifier {
    fn update(&self, total: Price) {
        info!("[Email] Sending order confirmation for {total}...");
    }
}

/// Records the order in the audit log.
#[derive(Clone, Copy, Debug, Default)]
pub struct AuditLogger;

impl OrderObserver for AuditLogger {
    fn update(&self, total: Price) {
        info!("[Log] Order recorded for {total}.");
    }
}
