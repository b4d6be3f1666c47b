use thiserror::Error;

/// llm error types
#[derive(Error, Debug)]
pub enum LlmError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("no API key or Ollama model found")]
    NoProvider,

    #[error("{0} credential not found")]
    MissingCredential(&'static str),

    #[error("failed to make request: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API request failed with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("API error: {0}")]
    Api(String),

    #[error("failed to parse response: {0}")]
    Parse(String),

    #[error("no {0} in response")]
    NoContent(&'static str),

    #[error("empty response from API")]
    EmptyResponse,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

impl LlmError {
    /// Whether the user should be shown the credential setup hint
    pub fn is_credential_error(&self) -> bool {
        matches!(self, LlmError::NoProvider | LlmError::MissingCredential(_))
    }
}

/// Result type for llm operations
pub type Result<T> = std::result::Result<T, LlmError>;
