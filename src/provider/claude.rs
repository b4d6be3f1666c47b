//! Anthropic Messages API client

use reqwest::blocking::{Client, Request};
use serde::{Deserialize, Serialize};

use super::{decode, non_empty, send, ApiErrorBody, CompletionClient, Provider};
use crate::config::ClaudeSettings;
use crate::error::{LlmError, Result};

#[derive(Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: Vec<Message<'a>>,
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
    error: Option<ApiErrorBody>,
}

#[derive(Deserialize)]
struct ContentBlock {
    #[serde(default)]
    text: String,
}

pub struct ClaudeClient {
    http: Client,
    settings: ClaudeSettings,
    api_key: String,
}

impl ClaudeClient {
    pub fn new(http: Client, settings: ClaudeSettings, api_key: String) -> Self {
        Self {
            http,
            settings,
            api_key,
        }
    }

    fn request(&self, prompt: &str) -> Result<Request> {
        let body = MessagesRequest {
            model: &self.settings.model,
            max_tokens: self.settings.max_tokens,
            messages: vec![Message {
                role: "user",
                content: prompt,
            }],
        };

        Ok(self
            .http
            .post(&self.settings.url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", &self.settings.anthropic_version)
            .json(&body)
            .build()?)
    }
}

fn parse_response(body: &str) -> Result<String> {
    let response: MessagesResponse = decode(body)?;

    if let Some(error) = response.error {
        return Err(LlmError::Api(error.message));
    }

    let block = response
        .content
        .first()
        .ok_or(LlmError::NoContent("content"))?;
    non_empty(&block.text)
}

impl CompletionClient for ClaudeClient {
    fn provider(&self) -> Provider {
        Provider::Claude
    }

    fn complete(&self, prompt: &str) -> Result<String> {
        let request = self.request(prompt)?;
        let body = send(&self.http, request)?;
        parse_response(&body)
    }
}
