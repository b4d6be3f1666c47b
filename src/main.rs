mod config;
mod display;
mod error;
mod logging;
mod prompt;
mod provider;
mod renderer;

use clap::{ArgAction, Parser};
use std::path::PathBuf;

use crate::error::{LlmError, Result};
use crate::prompt::{Mode, SystemContext};
use crate::provider::Provider;

const SETUP_HELP: &str = "\
EXAMPLES:
    llm search for foo in directory
    llm list files by size
    llm --code write a python function to diff a file
    llm --explain explain the cp command

SETUP:
    Set one of the following environment variables:
    export ANTHROPIC_API_KEY=your_claude_api_key
    export OPENAI_API_KEY=your_openai_api_key
    export OLLAMA_MODEL=your_ollama_model_name

    The first available provider is used.
    Priority order: Claude > OpenAI > Ollama";

#[derive(Parser)]
#[command(name = "llm", version = concat!("version ", env!("CARGO_PKG_VERSION")))]
#[command(about = "Multi-API command suggester", long_about = None)]
#[command(after_help = SETUP_HELP, arg_required_else_help = true)]
#[command(disable_version_flag = true)]
struct Cli {
    /// Description of what you want to do
    #[arg(required_unless_present = "init_config", trailing_var_arg = true)]
    query: Vec<String>,

    /// Code generation mode
    #[arg(short, long, conflicts_with = "explain")]
    code: bool,

    /// Explanation mode
    #[arg(short = 'x', long)]
    explain: bool,

    /// Use this provider instead of auto-detecting one
    #[arg(short, long, value_enum)]
    provider: Option<Provider>,

    /// Path to config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write a default config file and exit
    #[arg(long)]
    init_config: bool,

    /// Log debug details to stderr
    #[arg(long)]
    verbose: bool,

    /// Show version information
    #[arg(short = 'v', long, action = ArgAction::Version)]
    version: Option<bool>,
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = if cli.init_config {
        init_config(cli.config)
    } else {
        run(cli)
    };

    if let Err(e) = result {
        display::print_error(&e);
        if e.is_credential_error() {
            eprintln!("Set one of the following environment variables:");
            eprintln!("  export {}=your_claude_api_key", provider::ANTHROPIC_API_KEY);
            eprintln!("  export {}=your_openai_api_key", provider::OPENAI_API_KEY);
            eprintln!("  export {}=your_ollama_model_name", provider::OLLAMA_MODEL);
        }
        std::process::exit(1);
    }
}

/// Ask the selected provider and print its answer
fn run(cli: Cli) -> Result<()> {
    let config = config::resolve(cli.config.as_deref())?;

    let selection = provider::select(
        cli.provider,
        |name| std::env::var(name).ok(),
        || provider::password_store(&config.pass.key_name),
    )?;
    tracing::debug!(?selection, "selected provider");

    let mode = Mode::from_flags(cli.code, cli.explain);
    let query = cli.query.join(" ");
    let prompt = prompt::build(mode, &SystemContext::detect(), &query);

    let client = provider::client_for(selection, &config)?;
    tracing::debug!(provider = client.provider().label(), ?mode, "requesting completion");
    let answer = client.complete(&prompt)?;

    if mode.renders_markdown() {
        display::print_markdown(&answer);
    } else {
        display::print_raw(&answer);
    }
    Ok(())
}

/// Write a default configuration file, refusing to overwrite
fn init_config(path: Option<PathBuf>) -> Result<()> {
    let config_path = path
        .or_else(config::default_path)
        .ok_or_else(|| LlmError::Config("Cannot determine a config directory".to_string()))?;

    if config_path.exists() {
        eprintln!(
            "Configuration file already exists at: {}",
            config_path.display()
        );
        eprintln!("Remove it first if you want to reinitialize.");
        return Ok(());
    }

    config::save(&config::Config::default(), &config_path)?;

    println!("Configuration file created: {}", config_path.display());
    Ok(())
}
