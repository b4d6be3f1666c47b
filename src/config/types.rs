use serde::{Deserialize, Serialize};

/// llm configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Anthropic Messages API settings
    pub claude: ClaudeSettings,

    /// OpenAI Chat Completions API settings
    pub openai: OpenAiSettings,

    /// Local Ollama server settings
    pub ollama: OllamaSettings,

    /// Password-store fallback for the Anthropic key
    pub pass: PassSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClaudeSettings {
    pub url: String,
    pub model: String,
    pub max_tokens: u32,
    pub anthropic_version: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpenAiSettings {
    pub url: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OllamaSettings {
    /// Generate endpoint; the model comes from `OLLAMA_MODEL`
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PassSettings {
    /// Entry name passed to `pass show`
    pub key_name: String,
}

impl Default for ClaudeSettings {
    fn default() -> Self {
        Self {
            url: "https://api.anthropic.com/v1/messages".to_string(),
            model: "claude-sonnet-4-20250514".to_string(),
            max_tokens: 1000,
            anthropic_version: "2023-06-01".to_string(),
        }
    }
}

impl Default for OpenAiSettings {
    fn default() -> Self {
        Self {
            url: "https://api.openai.com/v1/chat/completions".to_string(),
            model: "gpt-4o-mini".to_string(),
            max_tokens: 1000,
            temperature: 0.1,
        }
    }
}

impl Default for OllamaSettings {
    fn default() -> Self {
        Self {
            url: "http://localhost:11434/api/generate".to_string(),
        }
    }
}

impl Default for PassSettings {
    fn default() -> Self {
        Self {
            key_name: "anthropic.com".to_string(),
        }
    }
}
