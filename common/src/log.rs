//! Logging helpers shared by the domain and the CLI.
//!
//! Events are plain `tracing` events. The CLI formatter gives special
//! treatment to two targets:
//! * [`SUCCESS_TARGET`]: rendered with a success marker.
//! * [`PRINT_TARGET`]: the `raw_msg` field is written verbatim.

pub const SUCCESS_TARGET: &str = "pizzeria::success";
pub const PRINT_TARGET: &str = "pizzeria::print";

/// Emits an info-level event on the success target.
#[macro_export]
macro_rules! success {
    ($($arg:tt)+) => {
        $crate::tracing::info!(target: "pizzeria::success", $($arg)+)
    };
}
