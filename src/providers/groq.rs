use std::time::Duration;

use async_trait::async_trait;
use log::error;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::errors::ProviderError;
use crate::providers::Rewriter;

/// Environment variable consulted when no API key is configured.
pub const API_KEY_ENV: &str = "GROQ_API_KEY";

/// Groq client for the OpenAI-compatible chat completions API
#[derive(Debug)]
pub struct Groq {
    /// HTTP client for API requests
    client: Client,
    /// API key for bearer authentication
    api_key: String,
    /// API endpoint URL (optional, defaults to the public API)
    endpoint: String,
    /// Model name to use for rewriting
    model: String,
    /// Sampling temperature
    temperature: f32,
}

/// Chat completion request
#[derive(Debug, Serialize)]
struct ChatRequest {
    /// The messages for the conversation
    messages: Vec<ChatMessage>,
    /// The model to use
    model: String,
    /// Temperature for generation
    temperature: f32,
}

/// Chat message format
#[derive(Debug, Serialize, Deserialize)]
struct ChatMessage {
    /// Role of the message sender (user, assistant)
    role: String,
    /// Content of the message
    content: String,
}

/// Chat completion response
#[derive(Debug, Deserialize)]
struct ChatResponse {
    /// Completion choices, first one carries the content
    choices: Vec<ChatChoice>,
}

/// Individual completion choice
#[derive(Debug, Deserialize)]
struct ChatChoice {
    /// The generated message
    message: ChatMessage,
}

impl Groq {
    /// Default public endpoint.
    const DEFAULT_ENDPOINT: &'static str = "https://api.groq.com/openai/v1";

    /// Create a new Groq client.
    ///
    /// An empty `api_key` falls back to the `GROQ_API_KEY` environment
    /// variable; an empty `endpoint` falls back to the public API.
    pub fn new(
        api_key: impl Into<String>,
        endpoint: impl Into<String>,
        model: impl Into<String>,
        temperature: f32,
        timeout_secs: u64,
    ) -> Self {
        let mut api_key = api_key.into();
        if api_key.is_empty() {
            api_key = std::env::var(API_KEY_ENV).unwrap_or_default();
        }

        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(timeout_secs))
                .build()
                .unwrap_or_default(),
            api_key,
            endpoint: endpoint.into(),
            model: model.into(),
            temperature,
        }
    }

    /// Assemble the full rewrite prompt sent to the model.
    ///
    /// The trailing directive keeps responses in the inline dialect the
    /// tokenizer understands instead of full markdown.
    fn build_prompt(text: &str, instructions: &str) -> String {
        format!(
            "Improve this slide content:\n{}\n\nInstructions: {}\n\n\
             Return well-structured content with clear headings, concise bullet points \
             (max 5 per slide), and no markdown. Use bold/italic via formatting, not symbols.",
            text, instructions
        )
    }

    fn api_url(&self) -> String {
        let base = if self.endpoint.is_empty() {
            Self::DEFAULT_ENDPOINT
        } else {
            self.endpoint.trim_end_matches('/')
        };
        format!("{}/chat/completions", base)
    }

    /// Complete a chat request against the Groq API.
    async fn complete(&self, request: ChatRequest) -> Result<ChatResponse, ProviderError> {
        let response = self
            .client
            .post(self.api_url())
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            error!("Groq API error ({}): {}", status, error_text);
            return Err(ProviderError::ApiError {
                status_code: status.as_u16(),
                message: error_text,
            });
        }

        response
            .json::<ChatResponse>()
            .await
            .map_err(|e| ProviderError::ParseError(e.to_string()))
    }
}

#[async_trait]
impl Rewriter for Groq {
    async fn rewrite(&self, text: &str, instructions: &str) -> Result<String, ProviderError> {
        if self.api_key.is_empty() {
            return Err(ProviderError::AuthenticationError(format!(
                "API key not provided. Please set {} in environment variables.",
                API_KEY_ENV
            )));
        }

        let request = ChatRequest {
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: Self::build_prompt(text, instructions),
            }],
            model: self.model.clone(),
            temperature: self.temperature,
        };

        let response = self.complete(request).await?;
        response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| ProviderError::ParseError("Response contained no choices".to_string()))
    }
}
