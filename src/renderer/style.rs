//! ANSI style codes used by the terminal renderer

use std::fmt;

/// A terminal style, rendered as an SGR escape sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Reset,
    Bold,
    Italic,
    Underline,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
}

impl Style {
    /// Escape sequence for this style
    pub const fn code(self) -> &'static str {
        match self {
            Style::Reset => "\x1b[0m",
            Style::Bold => "\x1b[1m",
            Style::Italic => "\x1b[3m",
            Style::Underline => "\x1b[4m",
            Style::Red => "\x1b[31m",
            Style::Green => "\x1b[32m",
            Style::Yellow => "\x1b[33m",
            Style::Blue => "\x1b[34m",
            Style::Magenta => "\x1b[35m",
            Style::Cyan => "\x1b[36m",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Wrap `text` in the given styles, closed by a single reset
pub fn paint(styles: &[Style], text: &str) -> String {
    let mut output = String::with_capacity(text.len() + styles.len() * 5 + 4);
    for style in styles {
        output.push_str(style.code());
    }
    output.push_str(text);
    output.push_str(Style::Reset.code());
    output
}
