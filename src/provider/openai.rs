//! OpenAI Chat Completions client

use reqwest::blocking::{Client, Request};
use serde::{Deserialize, Serialize};

use super::{decode, non_empty, send, ApiErrorBody, CompletionClient, Provider};
use crate::config::OpenAiSettings;
use crate::error::{LlmError, Result};

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
    error: Option<ApiErrorBody>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

pub struct OpenAiClient {
    http: Client,
    settings: OpenAiSettings,
    api_key: String,
}

impl OpenAiClient {
    pub fn new(http: Client, settings: OpenAiSettings, api_key: String) -> Self {
        Self {
            http,
            settings,
            api_key,
        }
    }

    fn request(&self, prompt: &str) -> Result<Request> {
        let body = ChatCompletionRequest {
            model: &self.settings.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            max_tokens: self.settings.max_tokens,
            temperature: self.settings.temperature,
        };

        Ok(self
            .http
            .post(&self.settings.url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .build()?)
    }
}

fn parse_response(body: &str) -> Result<String> {
    let response: ChatCompletionResponse = decode(body)?;

    if let Some(error) = response.error {
        return Err(LlmError::Api(error.message));
    }

    let choice = response
        .choices
        .first()
        .ok_or(LlmError::NoContent("choices"))?;
    non_empty(choice.message.content.as_deref().unwrap_or_default())
}

impl CompletionClient for OpenAiClient {
    fn provider(&self) -> Provider {
        Provider::OpenAi
    }

    fn complete(&self, prompt: &str) -> Result<String> {
        let request = self.request(prompt)?;
        let body = send(&self.http, request)?;
        parse_response(&body)
    }
}
