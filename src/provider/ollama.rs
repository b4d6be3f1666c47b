//! Ollama generate endpoint client

use reqwest::blocking::{Client, Request};
use serde::{Deserialize, Serialize};

use super::{decode, non_empty, send, CompletionClient, Provider};
use crate::config::OllamaSettings;
use crate::error::{LlmError, Result};

#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

// Ollama reports errors as a bare string rather than an object.
#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    response: String,
    error: Option<String>,
}

pub struct OllamaClient {
    http: Client,
    settings: OllamaSettings,
    model: String,
}

impl OllamaClient {
    pub fn new(http: Client, settings: OllamaSettings, model: String) -> Self {
        Self {
            http,
            settings,
            model,
        }
    }

    fn request(&self, prompt: &str) -> Result<Request> {
        let body = GenerateRequest {
            model: &self.model,
            prompt,
            stream: false,
        };

        Ok(self.http.post(&self.settings.url).json(&body).build()?)
    }
}

fn parse_response(body: &str) -> Result<String> {
    let response: GenerateResponse = decode(body)?;

    if let Some(error) = response.error {
        return Err(LlmError::Api(error));
    }
    non_empty(&response.response)
}

impl CompletionClient for OllamaClient {
    fn provider(&self) -> Provider {
        Provider::Ollama
    }

    fn complete(&self, prompt: &str) -> Result<String> {
        let request = self.request(prompt)?;
        let body = send(&self.http, request)?;
        parse_response(&body)
    }
}
