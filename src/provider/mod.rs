//! Completion providers
//!
//! Picks one of Claude, OpenAI or Ollama from the environment and issues a
//! single blocking completion request against it.

mod claude;
mod ollama;
mod openai;

pub use claude::ClaudeClient;
pub use ollama::OllamaClient;
pub use openai::OpenAiClient;

use std::fmt;
use std::process::Command;
use std::time::Duration;

use clap::ValueEnum;
use reqwest::blocking::{Client, Request};
use reqwest::StatusCode;
use serde::Deserialize;

use crate::config::Config;
use crate::error::{LlmError, Result};

pub const ANTHROPIC_API_KEY: &str = "ANTHROPIC_API_KEY";
pub const OPENAI_API_KEY: &str = "OPENAI_API_KEY";
pub const OLLAMA_MODEL: &str = "OLLAMA_MODEL";

const HTTP_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const HTTP_REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Supported completion backends, in auto-detection priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Provider {
    Claude,
    #[value(name = "openai")]
    OpenAi,
    Ollama,
}

impl Provider {
    pub fn label(self) -> &'static str {
        match self {
            Provider::Claude => "Claude",
            Provider::OpenAi => "OpenAI",
            Provider::Ollama => "Ollama",
        }
    }
}

/// The chosen provider and its credential (an API key, or the Ollama model)
#[derive(Clone, PartialEq, Eq)]
pub struct Selection {
    pub provider: Provider,
    pub credential: String,
}

impl fmt::Debug for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let credential = match self.provider {
            Provider::Ollama => self.credential.as_str(),
            _ => "<redacted>",
        };
        f.debug_struct("Selection")
            .field("provider", &self.provider)
            .field("credential", &credential)
            .finish()
    }
}

/// Choose a provider.
///
/// Without `forced`, sources are tried in order: `ANTHROPIC_API_KEY`, the
/// password store, `OPENAI_API_KEY`, `OLLAMA_MODEL`. With `forced`, only that
/// provider's sources are consulted.
pub fn select<E, P>(forced: Option<Provider>, env: E, pass: P) -> Result<Selection>
where
    E: Fn(&str) -> Option<String>,
    P: FnOnce() -> Option<String>,
{
    let var = |name: &str| env(name).filter(|value| !value.is_empty());
    let found = |provider, credential| Selection {
        provider,
        credential,
    };

    match forced {
        Some(Provider::Claude) => var(ANTHROPIC_API_KEY)
            .or_else(pass)
            .map(|key| found(Provider::Claude, key))
            .ok_or(LlmError::MissingCredential(Provider::Claude.label())),
        Some(Provider::OpenAi) => var(OPENAI_API_KEY)
            .map(|key| found(Provider::OpenAi, key))
            .ok_or(LlmError::MissingCredential(Provider::OpenAi.label())),
        Some(Provider::Ollama) => var(OLLAMA_MODEL)
            .map(|model| found(Provider::Ollama, model))
            .ok_or(LlmError::MissingCredential(Provider::Ollama.label())),
        None => {
            if let Some(key) = var(ANTHROPIC_API_KEY) {
                return Ok(found(Provider::Claude, key));
            }
            if let Some(key) = pass() {
                return Ok(found(Provider::Claude, key));
            }
            if let Some(key) = var(OPENAI_API_KEY) {
                return Ok(found(Provider::OpenAi, key));
            }
            if let Some(model) = var(OLLAMA_MODEL) {
                return Ok(found(Provider::Ollama, model));
            }
            Err(LlmError::NoProvider)
        }
    }
}

/// Look up an entry with `pass show`, returning its trimmed contents
pub fn password_store(key_name: &str) -> Option<String> {
    match Command::new("pass").args(["show", key_name]).output() {
        Ok(output) if output.status.success() => {
            let key = String::from_utf8_lossy(&output.stdout).trim().to_string();
            (!key.is_empty()).then_some(key)
        }
        Ok(output) => {
            tracing::warn!(key_name, status = %output.status, "pass lookup failed");
            None
        }
        Err(e) => {
            tracing::debug!(error = %e, "pass is not available");
            None
        }
    }
}

/// A provider that turns a prompt into a plain-text completion
pub trait CompletionClient {
    fn provider(&self) -> Provider;

    fn complete(&self, prompt: &str) -> Result<String>;
}

/// Build the client for a selection
pub fn client_for(selection: Selection, config: &Config) -> Result<Box<dyn CompletionClient>> {
    let http = build_http_client()?;
    let client: Box<dyn CompletionClient> = match selection.provider {
        Provider::Claude => Box::new(ClaudeClient::new(
            http,
            config.claude.clone(),
            selection.credential,
        )),
        Provider::OpenAi => Box::new(OpenAiClient::new(
            http,
            config.openai.clone(),
            selection.credential,
        )),
        Provider::Ollama => Box::new(OllamaClient::new(
            http,
            config.ollama.clone(),
            selection.credential,
        )),
    };
    Ok(client)
}

fn build_http_client() -> Result<Client> {
    Ok(Client::builder()
        .connect_timeout(HTTP_CONNECT_TIMEOUT)
        .timeout(HTTP_REQUEST_TIMEOUT)
        .build()?)
}

/// Execute a request and return the body of a 200 response
fn send(client: &Client, request: Request) -> Result<String> {
    tracing::debug!(method = %request.method(), url = %request.url(), "sending request");

    let response = client.execute(request)?;
    let status = response.status();
    let body = response.text()?;

    tracing::debug!(status = status.as_u16(), bytes = body.len(), "received response");

    if status != StatusCode::OK {
        return Err(LlmError::Status {
            status: status.as_u16(),
            body,
        });
    }
    Ok(body)
}

/// Error object some providers embed in the response body
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

fn decode<'a, T: Deserialize<'a>>(body: &'a str) -> Result<T> {
    serde_json::from_str(body).map_err(|e| LlmError::Parse(e.to_string()))
}

fn non_empty(text: &str) -> Result<String> {
    let text = text.trim();
    if text.is_empty() {
        return Err(LlmError::EmptyResponse);
    }
    Ok(text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_of(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    fn no_pass() -> Option<String> {
        None
    }

    #[test]
    fn test_anthropic_key_wins() {
        let env = env_of(&[
            (ANTHROPIC_API_KEY, "sk-ant"),
            (OPENAI_API_KEY, "sk-openai"),
            (OLLAMA_MODEL, "llama3"),
        ]);
        let selection = select(None, env, no_pass).unwrap();
        assert_eq!(selection.provider, Provider::Claude);
        assert_eq!(selection.credential, "sk-ant");
    }

    #[test]
    fn test_pass_before_openai() {
        let env = env_of(&[(OPENAI_API_KEY, "sk-openai")]);
        let selection = select(None, env, || Some("from-pass".to_string())).unwrap();
        assert_eq!(selection.provider, Provider::Claude);
        assert_eq!(selection.credential, "from-pass");
    }

    #[test]
    fn test_pass_not_consulted_when_env_key_present() {
        let env = env_of(&[(ANTHROPIC_API_KEY, "sk-ant")]);
        let selection = select(None, env, || panic!("pass should not run")).unwrap();
        assert_eq!(selection.credential, "sk-ant");
    }

    #[test]
    fn test_openai_then_ollama() {
        let env = env_of(&[(OPENAI_API_KEY, "sk-openai"), (OLLAMA_MODEL, "llama3")]);
        let selection = select(None, env, no_pass).unwrap();
        assert_eq!(selection.provider, Provider::OpenAi);

        let env = env_of(&[(OLLAMA_MODEL, "llama3")]);
        let selection = select(None, env, no_pass).unwrap();
        assert_eq!(selection.provider, Provider::Ollama);
        assert_eq!(selection.credential, "llama3");
    }

    #[test]
    fn test_empty_variables_are_ignored() {
        let env = env_of(&[(ANTHROPIC_API_KEY, ""), (OPENAI_API_KEY, "sk-openai")]);
        let selection = select(None, env, no_pass).unwrap();
        assert_eq!(selection.provider, Provider::OpenAi);
    }

    #[test]
    fn test_nothing_configured() {
        let result = select(None, env_of(&[]), no_pass);
        assert!(matches!(result, Err(LlmError::NoProvider)));
    }

    #[test]
    fn test_forced_provider_uses_only_its_source() {
        let env = env_of(&[(ANTHROPIC_API_KEY, "sk-ant"), (OLLAMA_MODEL, "llama3")]);
        let selection = select(Some(Provider::Ollama), env, no_pass).unwrap();
        assert_eq!(selection.provider, Provider::Ollama);

        let env = env_of(&[(ANTHROPIC_API_KEY, "sk-ant")]);
        let result = select(Some(Provider::OpenAi), env, no_pass);
        assert!(matches!(result, Err(LlmError::MissingCredential("OpenAI"))));
    }

    #[test]
    fn test_forced_claude_falls_back_to_pass() {
        let selection =
            select(Some(Provider::Claude), env_of(&[]), || Some("k".to_string())).unwrap();
        assert_eq!(selection.credential, "k");
    }

    #[test]
    fn test_selection_debug_redacts_keys() {
        let selection = Selection {
            provider: Provider::OpenAi,
            credential: "sk-secret".to_string(),
        };
        let debug = format!("{:?}", selection);
        assert!(!debug.contains("sk-secret"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn test_non_empty_trims() {
        assert_eq!(non_empty("  ls -la\n").unwrap(), "ls -la");
        assert!(matches!(non_empty(" \n "), Err(LlmError::EmptyResponse)));
    }

    #[test]
    fn test_client_for_each_provider() {
        let config = Config::default();
        for provider in [Provider::Claude, Provider::OpenAi, Provider::Ollama] {
            let selection = Selection {
                provider,
                credential: "x".to_string(),
            };
            let client = client_for(selection, &config).unwrap();
            assert_eq!(client.provider(), provider);
        }
    }
}
