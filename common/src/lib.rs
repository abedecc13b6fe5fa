pub mod config;
pub mod error;
pub mod log;

pub use tracing;
