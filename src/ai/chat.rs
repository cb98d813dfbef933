//! Chat-completion backed report generator.

use std::sync::Arc;

use async_trait::async_trait;
use log::debug;
use tokio_util::sync::CancellationToken;

use crate::config::{AiConfig, MAX_ERROR_BODY_LENGTH};
use crate::error_handling::AiGenerationError;
use crate::initialization::init_ai_client;
use crate::plan::Plan;
use crate::report::Report;

use super::prompt::build_messages;
use super::shape::shape_report;
use super::types::{ChatRequest, ChatResponse, ResponseFormat};
use super::ReportGenerator;

/// Asks an OpenAI-compatible chat-completion endpoint for a report.
#[derive(Debug, Clone)]
pub struct ChatCompletionGenerator {
    client: Arc<reqwest::Client>,
    config: AiConfig,
}

impl ChatCompletionGenerator {
    pub fn new(client: Arc<reqwest::Client>, config: AiConfig) -> Self {
        Self { client, config }
    }

    /// Builds a generator with its own HTTP client.
    ///
    /// # Errors
    ///
    /// Returns a `reqwest::Error` if the client cannot be built.
    pub fn from_config(config: AiConfig, user_agent: &str) -> Result<Self, reqwest::Error> {
        let client = init_ai_client(&config, user_agent)?;
        Ok(Self::new(client, config))
    }

    async fn request(&self, url: &str, plan: Plan) -> Result<Report, AiGenerationError> {
        let body = ChatRequest {
            model: &self.config.model,
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
            messages: build_messages(url, plan),
            response_format: ResponseFormat::json_object(),
        };

        let response = self
            .client
            .post(&self.config.api_url)
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(AiGenerationError::Status {
                status: status.as_u16(),
                body: text.chars().take(MAX_ERROR_BODY_LENGTH).collect(),
            });
        }

        let parsed: ChatResponse = response.json().await?;
        let content = parsed
            .first_content()
            .ok_or(AiGenerationError::EmptyContent)?;
        debug!("AI response for {url}: {} bytes", content.len());

        let value: serde_json::Value = serde_json::from_str(content)?;
        shape_report(value, url)
    }
}

#[async_trait]
impl ReportGenerator for ChatCompletionGenerator {
    async fn generate(
        &self,
        url: &str,
        plan: Plan,
        cancel: &CancellationToken,
    ) -> Result<Report, AiGenerationError> {
        if self.config.api_key.trim().is_empty() {
            return Err(AiGenerationError::NotConfigured);
        }
        tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(AiGenerationError::Cancelled),
            result = self.request(url, plan) => result,
        }
    }
}
