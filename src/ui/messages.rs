//! One-line feedback printed by the commands.
//!
//! Status lines start with a bold coloured marker; timer events (start,
//! stop, notes) use their own emoji and are printed plain.

use ansi_term::{Colour, Style};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tone {
    Info,
    Success,
    Warning,
    Failure,
}

impl Tone {
    fn marker(self) -> &'static str {
        match self {
            Tone::Info => "ℹ️",
            Tone::Success => "✅",
            Tone::Warning => "⚠️",
            Tone::Failure => "❌",
        }
    }

    fn style(self) -> Style {
        let colour = match self {
            Tone::Info => Colour::Blue,
            Tone::Success => Colour::Green,
            Tone::Warning => Colour::Yellow,
            Tone::Failure => Colour::Red,
        };
        colour.bold()
    }

    fn line<T: fmt::Display>(self, msg: T) -> String {
        format!("{} {msg}", self.style().paint(self.marker()))
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", Tone::Info.line(msg));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", Tone::Success.line(msg));
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}", Tone::Warning.line(msg));
}

/// Goes to stderr, unlike the others.
pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", Tone::Failure.line(msg));
}

/// `--- TITLE ---` on its own paragraph.
pub fn header<T: fmt::Display>(msg: T) {
    let title = format!("--- {msg} ---");
    println!("\n{}", Colour::Blue.bold().paint(title));
}

pub fn event<T: fmt::Display>(icon: &str, msg: T) {
    println!("{icon}  {msg}");
}
