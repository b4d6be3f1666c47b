//! TTY detection and color support logic

use std::io::IsTerminal;

/// Color preference forced by the environment, if any
fn env_preference() -> Option<bool> {
    // NO_COLOR takes precedence (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return Some(false);
    }

    // CLICOLOR_FORCE enables colors even when piped
    if let Ok(val) = std::env::var("CLICOLOR_FORCE") {
        if val != "0" {
            return Some(true);
        }
    }

    if let Ok(val) = std::env::var("CLICOLOR") {
        if val == "0" {
            return Some(false);
        }
    }

    None
}

/// Determine if stdout output should be styled
pub fn should_use_colors() -> bool {
    env_preference().unwrap_or_else(|| std::io::stdout().is_terminal())
}

/// Same rules as [`should_use_colors`], checked against stderr
pub fn should_color_stderr() -> bool {
    env_preference().unwrap_or_else(|| std::io::stderr().is_terminal())
}
