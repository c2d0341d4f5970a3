//! Status lines printed by the binary.
//!
//! Compiler output is relayed to stdout as-is, so these helpers keep to a
//! short labelled prefix that stays readable among it.

use colored::Colorize;
use std::{error::Error, fmt};

/// Message categories used by the output helpers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Error,
}

fn label(kind: MessageKind) -> &'static str {
    match kind {
        MessageKind::Info => "INFO",
        MessageKind::Success => "SUCCESS",
        MessageKind::Error => "ERROR",
    }
}

/// Formats `message` with its label; colouring follows `colored`'s global
/// switch, which honours `NO_COLOR`.
pub fn render(kind: MessageKind, message: impl fmt::Display) -> String {
    let formatted = format!("{}: {}", label(kind), message);
    match kind {
        MessageKind::Success => formatted.bright_green().to_string(),
        MessageKind::Error => formatted.bright_red().to_string(),
        MessageKind::Info => formatted,
    }
}

pub fn info(message: impl fmt::Display) {
    println!("{}", render(MessageKind::Info, message));
}

pub fn success(message: impl fmt::Display) {
    println!("{}", render(MessageKind::Success, message));
}

/// Prints `err` and every `source()` below it to stderr.
pub fn error_chain(err: &(dyn Error + 'static)) {
    eprintln!("{}", render(MessageKind::Error, err));
    let mut current = err.source();
    while let Some(cause) = current {
        eprintln!("  caused by: {cause}");
        current = cause.source();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_prefixes_label() {
        colored::control::set_override(false);
        assert_eq!(render(MessageKind::Info, "hello"), "INFO: hello");
        assert_eq!(render(MessageKind::Success, "done"), "SUCCESS: done");
        assert_eq!(render(MessageKind::Error, "boom"), "ERROR: boom");
    }
}
