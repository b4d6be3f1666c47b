//! Inline span substitutions: bold, italic, inline code and links
//!
//! Rules run in a fixed order over the output of the previous rule. Bold has
//! to run before italic since both share the `*` and `_` delimiters.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::style::{paint, Style};

/// A delimiter pattern and the styles applied to its first capture group
struct InlineRule {
    pattern: Regex,
    styles: &'static [Style],
}

impl InlineRule {
    fn new(pattern: &str, styles: &'static [Style]) -> Self {
        Self {
            // Patterns are literals checked by the tests below.
            pattern: Regex::new(pattern).expect("inline pattern must compile"),
            styles,
        }
    }

    fn apply(&self, text: &str) -> String {
        self.pattern
            .replace_all(text, |caps: &Captures| paint(self.styles, &caps[1]))
            .into_owned()
    }
}

// Bold spans may hold lone single delimiters so that `**a *b* c**` keeps its
// inner italic. Italic spans never cross an escape code, so they cannot
// straddle a span that an earlier rule already closed with a reset. Link
// labels exclude `[` and ESC: every SGR code is `ESC [`, and a label must not
// start inside one.
static RULES: LazyLock<[InlineRule; 6]> = LazyLock::new(|| {
    [
        InlineRule::new(r"\*\*((?:[^*\n]|\*[^*\n])+?)\*\*", &[Style::Bold]),
        InlineRule::new(r"__((?:[^_\n]|_[^_\n])+?)__", &[Style::Bold]),
        InlineRule::new(r"\*([^*\n\x1b]+?)\*", &[Style::Italic]),
        InlineRule::new(r"_([^_\n\x1b]+?)_", &[Style::Italic]),
        InlineRule::new(r"`([^`\n]+?)`", &[Style::Cyan]),
        InlineRule::new(
            r"\[([^\[\]\n\x1b]+)\]\(([^)\n]+)\)",
            &[Style::Blue, Style::Underline],
        ),
    ]
});

/// Apply every inline rule to a single line of text
pub fn transform(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    RULES
        .iter()
        .fold(text.to_string(), |acc, rule| rule.apply(&acc))
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESET: &str = "\x1b[0m";
    const BOLD: &str = "\x1b[1m";
    const ITALIC: &str = "\x1b[3m";
    const UNDERLINE: &str = "\x1b[4m";
    const BLUE: &str = "\x1b[34m";
    const CYAN: &str = "\x1b[36m";

    #[test]
    fn test_rules_compile() {
        assert_eq!(RULES.len(), 6);
    }

    #[test]
    fn test_bold_asterisks() {
        assert_eq!(transform("**bold**"), format!("{BOLD}bold{RESET}"));
    }

    #[test]
    fn test_bold_underscores() {
        assert_eq!(transform("__bold__"), format!("{BOLD}bold{RESET}"));
    }

    #[test]
    fn test_italic_asterisk() {
        assert_eq!(transform("*italic*"), format!("{ITALIC}italic{RESET}"));
    }

    #[test]
    fn test_italic_underscore() {
        assert_eq!(transform("_italic_"), format!("{ITALIC}italic{RESET}"));
    }

    #[test]
    fn test_multiple_bold_spans_are_non_greedy() {
        assert_eq!(
            transform("**a** and **b**"),
            format!("{BOLD}a{RESET} and {BOLD}b{RESET}")
        );
    }

    #[test]
    fn test_inline_code_preserves_whitespace() {
        assert_eq!(transform("` a b `"), format!("{CYAN} a b {RESET}"));
    }

    #[test]
    fn test_link_drops_target() {
        assert_eq!(
            transform("see [docs](https://example.com/x) now"),
            format!("see {BLUE}{UNDERLINE}docs{RESET} now")
        );
    }

    #[test]
    fn test_italic_nested_in_bold() {
        assert_eq!(
            transform("**a *b* c**"),
            format!("{BOLD}a {ITALIC}b{RESET} c{RESET}")
        );
    }

    #[test]
    fn test_unterminated_markers_stay_literal() {
        assert_eq!(transform("*oops"), "*oops");
        assert_eq!(transform("**oops"), "**oops");
        assert_eq!(transform("`oops"), "`oops");
        assert_eq!(transform("snake_case"), "snake_case");
    }

    #[test]
    fn test_link_without_closing_paren_stays_literal() {
        assert_eq!(transform("[label](http://x"), "[label](http://x");
    }

    #[test]
    fn test_empty_delimiters_do_not_match() {
        assert_eq!(transform("****"), "****");
        assert_eq!(transform("``"), "``");
        assert_eq!(transform("[](x)"), "[](x)");
    }

    #[test]
    fn test_triple_asterisks_leave_a_dangling_delimiter() {
        assert_eq!(transform("***text***"), format!("{BOLD}*text{RESET}*"));
    }

    #[test]
    fn test_italic_does_not_cross_rendered_bold() {
        assert_eq!(
            transform("*a **b** c*"),
            format!("*a {BOLD}b{RESET} c*")
        );
    }

    #[test]
    fn test_mixed_spans_in_one_line() {
        assert_eq!(
            transform("Run `ls -la` for **all** files, see [man](man:ls)"),
            format!(
                "Run {CYAN}ls -la{RESET} for {BOLD}all{RESET} files, see {BLUE}{UNDERLINE}man{RESET}"
            )
        );
    }

    #[test]
    fn test_link_after_bold() {
        assert_eq!(
            transform("**note** [docs](http://x)"),
            format!("{BOLD}note{RESET} {BLUE}{UNDERLINE}docs{RESET}")
        );
    }

    #[test]
    fn test_link_after_italic() {
        assert_eq!(
            transform("_see_ [docs](http://x)"),
            format!("{ITALIC}see{RESET} {BLUE}{UNDERLINE}docs{RESET}")
        );
    }

    #[test]
    fn test_link_after_inline_code() {
        assert_eq!(
            transform("Run `ls` then see [docs](http://x)"),
            format!("Run {CYAN}ls{RESET} then see {BLUE}{UNDERLINE}docs{RESET}")
        );
    }

    #[test]
    fn test_link_after_literal_escape_codes() {
        assert_eq!(
            transform("\x1b[31mred\x1b[0m [docs](http://x)"),
            format!("\x1b[31mred\x1b[0m {BLUE}{UNDERLINE}docs{RESET}")
        );
    }

    #[test]
    fn test_literal_escape_codes_pass_through() {
        let text = "\x1b[31mred\x1b[0m and [not a link]";
        assert_eq!(transform(text), text);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(transform(""), "");
    }
}
