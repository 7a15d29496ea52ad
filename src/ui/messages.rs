//! Status-line output: colored, icon-prefixed one-liners for the CLI.

use std::fmt;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

struct Style {
    color: &'static str,
    icon: &'static str,
}

const INFO: Style = Style {
    color: "\x1b[34m",
    icon: "ℹ️",
};
const OK: Style = Style {
    color: "\x1b[32m",
    icon: "✅",
};
const WARN: Style = Style {
    color: "\x1b[33m",
    icon: "⚠️",
};
const ERR: Style = Style {
    color: "\x1b[31m",
    icon: "❌",
};

fn line(style: &Style, msg: impl fmt::Display) -> String {
    format!("{}{}{} {}{}", style.color, BOLD, style.icon, RESET, msg)
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", line(&INFO, msg));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", line(&OK, msg));
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}", line(&WARN, msg));
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", line(&ERR, msg));
}
