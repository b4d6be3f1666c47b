//! Markdown terminal formatting

use std::fmt::Display;

use crate::display::terminal::{should_color_stderr, should_use_colors};
use crate::renderer::{self, paint, Style};

/// Print markdown to stdout, styled when the terminal supports it
pub fn print_markdown(markdown: &str) {
    println!("{}", format_markdown(markdown, should_use_colors()));
}

/// Print a completion verbatim
pub fn print_raw(text: &str) {
    println!("{}", text);
}

/// Print an error to stderr with an `Error:` prefix
pub fn print_error(err: &impl Display) {
    eprintln!("{} {}", error_prefix(should_color_stderr()), err);
}

fn format_markdown(markdown: &str, colors: bool) -> String {
    if colors {
        renderer::render(markdown)
    } else {
        markdown.to_string()
    }
}

fn error_prefix(colors: bool) -> String {
    if colors {
        paint(&[Style::Red, Style::Bold], "Error:")
    } else {
        "Error:".to_string()
    }
}
