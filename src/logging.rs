//! Diagnostic logging on stderr
//!
//! Stdout carries only the completion, so every event goes to stderr.

use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive, e.g. `llm=debug`
pub const LOG_ENV: &str = "LLM_LOG";

/// Install the global subscriber. Safe to call more than once.
pub fn init(verbose: bool) {
    let filter = build_filter(verbose);

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .try_init();
}

/// `LLM_LOG` wins, then `--verbose`, then warnings only
fn build_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| default_filter(verbose))
}

fn default_filter(verbose: bool) -> EnvFilter {
    EnvFilter::new(if verbose { "debug" } else { "warn" })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_default_filter_levels() {
        assert_eq!(default_filter(false).to_string(), "warn");
        assert_eq!(default_filter(true).to_string(), "debug");
    }

    #[test]
    #[serial]
    fn test_env_filter_overrides_verbose() {
        std::env::set_var(LOG_ENV, "llm=trace");
        assert_eq!(build_filter(false).to_string(), "llm=trace");
        std::env::remove_var(LOG_ENV);
    }

    #[test]
    #[serial]
    fn test_init_twice_does_not_panic() {
        init(false);
        init(true);
    }
}
