use std::future::Future;
use std::time::Duration;

use reqwest::ClientBuilder;
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<Message>,
}

#[derive(Debug, Deserialize)]
pub struct CompletionResponse {
    pub choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
pub struct CompletionChoice {
    pub message: CompletionMessage,
}

#[derive(Debug, Deserialize)]
pub struct CompletionMessage {
    pub content: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum OpenAiError {
    #[error("HTTP error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("completion response contained no text content")]
    EmptyCompletion,
}

/// Produces a summary of a transcript in the requested language.
pub trait Summarizer: Send + Sync + 'static {
    type Error: std::error::Error + Send + Sync + 'static;

    fn summarize(
        &self,
        transcript: &str,
        language: &str,
    ) -> impl Future<Output = Result<String, Self::Error>> + Send;
}

#[derive(Clone)]
pub struct OpenAiClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl OpenAiClient {
    pub const SUMMARIZER_MODEL: &'static str = "gpt-4o";

    const SYSTEM_PROMPT: &'static str = "You are a helpful study guide creator.";

    pub fn new(api_key: impl Into<String>) -> Self {
        let client = ClientBuilder::new()
            .timeout(Duration::from_secs(120))
            .connect_timeout(Duration::from_secs(5))
            .build()
            .expect("Failed to build HTTP client");

        OpenAiClient {
            client,
            api_key: api_key.into(),
            base_url: "https://api.openai.com/v1".into(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    async fn send_completion_request(
        &self,
        body: &ChatRequest,
    ) -> Result<CompletionResponse, OpenAiError> {
        let resp = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(body)
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to reach completion API"))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(OpenAiError::Api { status, message });
        }

        Ok(resp.json::<CompletionResponse>().await?)
    }
}

impl Summarizer for OpenAiClient {
    type Error = OpenAiError;

    #[tracing::instrument(skip(self, transcript))]
    async fn summarize(&self, transcript: &str, language: &str) -> Result<String, OpenAiError> {
        let body = ChatRequest {
            model: Self::SUMMARIZER_MODEL.into(),
            messages: vec![
                Message {
                    role: "system".into(),
                    content: Self::SYSTEM_PROMPT.into(),
                },
                Message {
                    role: "user".into(),
                    content: build_user_prompt(transcript, language),
                },
            ],
        };

        let response = self.send_completion_request(&body).await?;
        extract_summary(response)
    }
}

fn build_user_prompt(transcript: &str, language: &str) -> String {
    format!("Summarize this video in {language}:\n{transcript}")
}

/// Only the first candidate's text is used; further choices are ignored.
fn extract_summary(response: CompletionResponse) -> Result<String, OpenAiError> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or(OpenAiError::EmptyCompletion)
}
