//! Terminal display module
//!
//! Handles styled terminal output with automatic TTY detection.

mod formatter;
mod terminal;

pub use formatter::{print_error, print_markdown, print_raw};
