//! Markdown to terminal renderer
//!
//! Translates a small subset of Markdown into ANSI-styled text. Every line is
//! classified on its own (headings, fence markers, list items, plain text) and
//! every style opened on a line is reset on that same line.

mod inline;
mod style;

pub use style::{paint, Style};

use std::sync::LazyLock;

use regex::Regex;

static ORDERED_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+\.) ").expect("ordered item pattern must compile"));

/// Block-level classification of a single line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Block<'a> {
    Heading { level: u8, text: &'a str },
    CodeFence(&'a str),
    Bullet(&'a str),
    OrderedItem { marker: &'a str, body: &'a str },
    Plain(&'a str),
}

/// Classify a line by its prefix. First match wins.
pub fn classify(line: &str) -> Block<'_> {
    if let Some(text) = line.strip_prefix("### ") {
        return Block::Heading { level: 3, text };
    }
    if let Some(text) = line.strip_prefix("## ") {
        return Block::Heading { level: 2, text };
    }
    if let Some(text) = line.strip_prefix("# ") {
        return Block::Heading { level: 1, text };
    }
    if line.starts_with("```") {
        return Block::CodeFence(line);
    }
    if let Some(body) = line
        .strip_prefix("- ")
        .or_else(|| line.strip_prefix("* "))
    {
        return Block::Bullet(body);
    }
    if let Some(caps) = ORDERED_ITEM.captures(line) {
        let marker = caps.get(1).map_or("", |m| m.as_str());
        let body = &line[caps.get(0).map_or(0, |m| m.end())..];
        return Block::OrderedItem { marker, body };
    }
    Block::Plain(line)
}

impl Block<'_> {
    /// Render this block to styled terminal text
    pub fn render(&self) -> String {
        match *self {
            Block::Heading { level, text } => {
                let color = match level {
                    1 => Style::Magenta,
                    2 => Style::Blue,
                    _ => Style::Yellow,
                };
                paint(&[color, Style::Bold], text)
            }
            Block::CodeFence(line) => paint(&[Style::Cyan], line),
            Block::Bullet(body) => {
                format!("{}{}", paint(&[Style::Green], "• "), inline::transform(body))
            }
            Block::OrderedItem { marker, body } => format!(
                "{}{}",
                paint(&[Style::Yellow], &format!("{} ", marker)),
                inline::transform(body)
            ),
            Block::Plain(line) => inline::transform(line),
        }
    }
}

/// Render a single line
pub fn render_line(line: &str) -> String {
    classify(line).render()
}

/// Render a complete document, line by line
pub fn render(document: &str) -> String {
    let rendered = document
        .split('\n')
        .map(render_line)
        .collect::<Vec<_>>()
        .join("\n");

    match rendered.strip_suffix('\n') {
        Some(trimmed) => trimmed.to_string(),
        None => rendered,
    }
}
