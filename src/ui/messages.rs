//! User-facing notices: coloured, one line each.
//!
//! Diagnostics go through `tracing`; these are for the operator.

use std::fmt;
use std::io::IsTerminal;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Success,
    Warning,
    Error,
}

impl Level {
    fn color(&self) -> &'static str {
        match self {
            Level::Info => "\x1b[34m",
            Level::Success => "\x1b[32m",
            Level::Warning => "\x1b[33m",
            Level::Error => "\x1b[31m",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            Level::Info => "ℹ️",
            Level::Success => "✅",
            Level::Warning => "⚠️",
            Level::Error => "❌",
        }
    }
}

/// Colours are dropped when NO_COLOR is set or the stream is not a terminal.
fn use_color(stderr: bool) -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if stderr {
        std::io::stderr().is_terminal()
    } else {
        std::io::stdout().is_terminal()
    }
}

pub fn format_notice<T: fmt::Display>(level: Level, msg: T, color: bool) -> String {
    if color {
        format!("{}{}{} {}{}", level.color(), BOLD, level.icon(), RESET, msg)
    } else {
        format!("{} {}", level.icon(), msg)
    }
}

pub fn emit<T: fmt::Display>(level: Level, msg: T) {
    let to_stderr = level == Level::Error;
    let line = format_notice(level, msg, use_color(to_stderr));
    if to_stderr {
        eprintln!("{line}");
    } else {
        println!("{line}");
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    emit(Level::Info, msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    emit(Level::Success, msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    emit(Level::Warning, msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    emit(Level::Error, msg);
}

/// Section header above tables.
pub fn header<T: fmt::Display>(msg: T) {
    if use_color(false) {
        println!("{}{}== {} =={}", Level::Info.color(), BOLD, msg, RESET);
    } else {
        println!("== {} ==", msg);
    }
}
