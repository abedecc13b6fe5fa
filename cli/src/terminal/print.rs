use std::{cell::Cell, fmt::Display};

use crate::terminal::colors;
use colored::*;
use pizzeria_common::config::Config;
use pizzeria_common::log::PRINT_TARGET;
use tracing::info;
use unicode_width::UnicodeWidthStr;

pub const TOTAL_WIDTH: usize = 64;

thread_local! {
    pub static GLOBAL_KEY_WIDTH: Cell<usize> = const { Cell::new(0) }
}

#[macro_export]
macro_rules! pprint {
    () => {
        $crate::terminal::print::print("");
    };
    ($msg:expr) => {
        $crate::terminal::print::print($msg);
    };
}

pub trait WithDefaultColor {
    fn with_default(self, default_color: Color) -> ColoredString;
}

impl WithDefaultColor for &str {
    fn with_default(self, default_color: Color) -> ColoredString {
        self.color(default_color)
    }
}

impl WithDefaultColor for String {
    fn with_default(self, default_color: Color) -> ColoredString {
        self.color(default_color)
    }
}

impl WithDefaultColor for ColoredString {
    fn with_default(self, _default_color: Color) -> ColoredString {
        self
    }
}

pub fn initialize(cfg: &Config) {
    if cfg.no_color {
        colored::control::set_override(false);
    }
}

pub fn print(msg: &str) {
    info!(target: PRINT_TARGET, raw_msg = msg);
}

pub fn banner(cfg: &Config) {
    if cfg.no_banner || cfg.is_quiet() {
        return;
    }

    let text_content: String = format!("⟦ PIZZERIA v{} ⟧ ", env!("CARGO_PKG_VERSION"));
    let text_width: usize = UnicodeWidthStr::width(text_content.as_str());
    let text: ColoredString = text_content.bright_green().bold();
    let sep: ColoredString = "═".repeat(TOTAL_WIDTH.saturating_sub(text_width) / 2).bright_black();
    let output: String = format!("{}{}{}", sep, text, sep);

    print(&output);
}

pub fn header(msg: &str, cfg: &Config) {
    if cfg.is_quiet() {
        return;
    }

    let formatted: String = format!("⟦ {} ⟧", msg);
    let msg_len: usize = formatted.chars().count();

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    let line: ColoredString = format!(
        "{}{}{}",
        "─".repeat(left),
        formatted.to_uppercase().bright_green(),
        "─".repeat(right)
    )
    .bright_black();

    print(&format!("{}", line));
}

pub fn fat_separator() {
    let sep: ColoredString = "═".repeat(TOTAL_WIDTH).bright_black();
    print(&format!("{}", sep));
}

pub fn aligned_line<V>(key: &str, value: V)
where
    V: Display + WithDefaultColor,
{
    let whitespace: String = ".".repeat((GLOBAL_KEY_WIDTH.get() + 1).saturating_sub(key.len()));
    let colon: String = format!(
        "{}{}",
        whitespace.color(colors::SEPARATOR),
        ":".color(colors::SEPARATOR)
    );
    let value: ColoredString = value.with_default(colors::TEXT_DEFAULT);
    print_status(format!("{}{} {}", key.color(colors::PRIMARY), colon, value));
}

pub fn print_status<T: AsRef<str>>(msg: T) {
    let prefix: ColoredString = ">".color(colors::SEPARATOR);
    let message: String = format!("{} {}", prefix, msg.as_ref().color(colors::TEXT_DEFAULT));
    print(&message);
}

/// A numbered menu entry, e.g. `[1] Pizza Pepperoni .... Bs40`.
pub fn menu_option<V>(selection: u32, label: &str, value: Option<V>)
where
    V: Display + WithDefaultColor,
{
    let idx_str: String = format!("[{}]", selection.to_string().color(colors::ACCENT));
    let mut output: String = format!("{} {}", idx_str.color(colors::SEPARATOR), label.color(colors::PRIMARY));

    if let Some(value) = value {
        let dots: String = ".".repeat((GLOBAL_KEY_WIDTH.get() + 1).saturating_sub(label.len()));
        let value: ColoredString = value.with_default(colors::TEXT_DEFAULT);
        output = format!("{} {} {}", output, dots.color(colors::SEPARATOR), value);
    }

    print(&output);
}

pub fn prompt(label: &str) {
    print(&format!("{}{}", label.color(colors::ACCENT), ":".color(colors::SEPARATOR)));
}

pub fn tree_head(name: &str) {
    print(&format!("{}", name.color(colors::PRIMARY)));
}

pub fn as_tree_one_level(key_value_pair: Vec<(String, ColoredString)>) {
    let key_width: usize = key_value_pair
        .iter()
        .map(|(key, _)| key.len())
        .max()
        .unwrap_or(0);

    for (i, (key, value)) in key_value_pair.iter().enumerate() {
        let last: bool = i + 1 == key_value_pair.len();
        let branch: ColoredString = if !last {
            "├─".bright_black()
        } else {
            "└─".bright_black()
        };
        let dots: String = ".".repeat(key_width + 1 - key.len());
        let key: ColoredString = key.color(colors::TEXT_DEFAULT);
        let output: String = format!(
            " {} {}{}{} {}",
            branch,
            key,
            dots.color(colors::SEPARATOR),
            ":".color(colors::SEPARATOR),
            value
        );
        print(&output);
    }
}

pub fn centerln(msg: &str) {
    let space = " ".repeat(TOTAL_WIDTH.saturating_sub(console::measure_text_width(msg)) / 2);
    print(&format!("{}{}{}", space, msg, space));
}

pub fn end_of_program() {
    print(&format!(
        "{}",
        "═".repeat(TOTAL_WIDTH).color(colors::SEPARATOR)
    ));
}
