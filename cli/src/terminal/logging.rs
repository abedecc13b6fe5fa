use std::fmt;

use colored::*;
use pizzeria_common::log::{PRINT_TARGET, SUCCESS_TARGET};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::FormatEvent;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::registry::LookupSpan;

pub struct PizzeriaFormatter;

/// Pulls the `raw_msg` field out of print events.
#[derive(Default)]
struct RawMessage(Option<String>);

impl Visit for RawMessage {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "raw_msg" {
            self.0 = Some(value.to_string());
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "raw_msg" {
            self.0 = Some(format!("{value:?}"));
        }
    }
}

impl<S, N> FormatEvent<S, N> for PizzeriaFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let meta = event.metadata();

        if meta.target() == PRINT_TARGET {
            let mut raw = RawMessage::default();
            event.record(&mut raw);
            if let Some(msg) = raw.0 {
                return writeln!(writer, "{msg}");
            }
        }

        let (symbol, color_func): (&str, fn(ColoredString) -> ColoredString) =
            match (*meta.level(), meta.target()) {
                (Level::INFO, SUCCESS_TARGET) => ("[✓]", |s| s.bright_green().bold()),
                (Level::TRACE, _) => ("[ ]", |s| s.dimmed()),
                (Level::DEBUG, _) => ("[?]", |s| s.blue()),
                (Level::INFO, _) => ("[+]", |s| s.green().bold()),
                (Level::WARN, _) => ("[*]", |s| s.yellow().bold()),
                (Level::ERROR, _) => ("[-]", |s| s.red().bold()),
            };

        write!(writer, "{} ", color_func(symbol.into()))?;

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

/// Filter used when `RUST_LOG` is unset.
///
/// Each quiet level drops one more level of status lines. Success and print
/// events stay at `info` so menus and payment confirmations always show.
pub fn default_directive(quiet: u8) -> String {
    let level = match quiet {
        0 => "info",
        1 => "warn",
        _ => "error",
    };

    if quiet == 0 {
        return level.to_string();
    }

    format!("{level},{SUCCESS_TARGET}=info,{PRINT_TARGET}=info")
}

/// Installs the global subscriber. `RUST_LOG` overrides [`default_directive`].
pub fn init_logging(quiet: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(quiet)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stdout)
        .event_format(PizzeriaFormatter)
        .init();
}
