//! # Console color palette.
//!
//! Wraps substrings in ANSI SGR sequences. With color disabled, [`Palette::paint`]
//! returns the text untouched, so output degrades to plain text on sinks that
//! cannot show color.

use std::borrow::Cow;

/// Colors used by the notifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    /// Failures and error text.
    Red,
    /// Warnings.
    Yellow,
    /// Success and recovery.
    Green,
    /// Secondary detail.
    Gray,
    /// Emphasized detail.
    White,
}

impl Color {
    #[inline]
    fn sgr(self) -> &'static str {
        match self {
            Color::Red => "\x1b[31m",
            Color::Yellow => "\x1b[33m",
            Color::Green => "\x1b[32m",
            Color::Gray => "\x1b[90m",
            Color::White => "\x1b[37m",
        }
    }
}

const RESET: &str = "\x1b[39m";

/// Stateless painter; copy it freely.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// A palette that never emits escape sequences.
    pub fn plain() -> Self {
        Self::new(false)
    }

    /// Wraps `text` in `color`, or returns it unchanged when disabled.
    pub fn paint<'a>(&self, text: &'a str, color: Color) -> Cow<'a, str> {
        if !self.enabled || text.is_empty() {
            return Cow::Borrowed(text);
        }
        Cow::Owned(format!("{}{text}{RESET}", color.sgr()))
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(true)
    }
}
