use crate::config::constants::{models, urls};
use crate::config::{ConfigError, GroqConfig};
use crate::llm::error_display;
use crate::llm::provider::{FinishReason, LLMError, LLMProvider, LLMRequest, LLMResponse, Usage};
use async_trait::async_trait;
use reqwest::{Client as HttpClient, StatusCode};
use serde_json::{Value, json};
use tracing::{debug, warn};

const PROVIDER_LABEL: &str = "Groq";

pub struct GroqProvider {
    api_key: String,
    http_client: HttpClient,
    base_url: String,
}

impl GroqProvider {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, urls::GROQ_API_BASE.to_string())
    }

    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            api_key,
            http_client: HttpClient::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Build a provider from the `groq` section, rejecting an unset key
    pub fn from_config(config: &GroqConfig) -> Result<Self, ConfigError> {
        let api_key = config.require_api_key()?.to_string();
        config.require_model()?;
        if !models::groq::SUPPORTED_MODELS.contains(&config.model.as_str()) {
            debug!(model = %config.model, "model not in the known Groq list; sending as-is");
        }
        Ok(Self::with_base_url(api_key, config.base_url.clone()))
    }

    fn convert_to_openai_format(&self, request: &LLMRequest) -> Value {
        let mut messages = Vec::with_capacity(request.messages.len() + 1);

        if let Some(system_prompt) = &request.system_prompt {
            messages.push(json!({
                "role": crate::config::constants::message_roles::SYSTEM,
                "content": system_prompt
            }));
        }

        for msg in &request.messages {
            messages.push(json!({
                "role": msg.role.as_openai_str(),
                "content": msg.content
            }));
        }

        let mut body = json!({
            "model": request.model,
            "messages": messages,
            "stream": false
        });

        if let Some(max_tokens) = request.max_tokens {
            body["max_tokens"] = json!(max_tokens);
        }

        if let Some(temperature) = request.temperature {
            body["temperature"] = json!(temperature);
        }

        body
    }

    fn parse_openai_response(&self, response_json: Value) -> Result<LLMResponse, LLMError> {
        let choices = response_json
            .get("choices")
            .and_then(|c| c.as_array())
            .ok_or_else(|| {
                LLMError::Provider("Invalid response format: missing choices".to_string())
            })?;

        let choice = choices
            .first()
            .ok_or_else(|| LLMError::Provider("No choices in response".to_string()))?;

        let message = choice.get("message").ok_or_else(|| {
            LLMError::Provider("Invalid response format: missing message".to_string())
        })?;

        let content = message
            .get("content")
            .and_then(|c| c.as_str())
            .map(|s| s.to_string());

        let finish_reason = choice
            .get("finish_reason")
            .and_then(|fr| fr.as_str())
            .map(|fr| match fr {
                "stop" => FinishReason::Stop,
                "length" => FinishReason::Length,
                "content_filter" => FinishReason::ContentFilter,
                other => FinishReason::Error(other.to_string()),
            })
            .unwrap_or(FinishReason::Stop);

        let usage = response_json.get("usage").map(|u| Usage {
            prompt_tokens: token_count(u, "prompt_tokens"),
            completion_tokens: token_count(u, "completion_tokens"),
            total_tokens: token_count(u, "total_tokens"),
        });

        Ok(LLMResponse {
            content,
            usage,
            finish_reason,
        })
    }
}

fn token_count(usage: &Value, field: &str) -> u32 {
    usage
        .get(field)
        .and_then(|v| v.as_u64())
        .map(|v| v.min(u64::from(u32::MAX)) as u32)
        .unwrap_or(0)
}

fn classify_http_error(status: StatusCode, body: &str) -> LLMError {
    let detail = error_display::format_llm_error(PROVIDER_LABEL, &format!("HTTP {status}: {body}"));
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => LLMError::Authentication(detail),
        StatusCode::TOO_MANY_REQUESTS => LLMError::RateLimit,
        _ => LLMError::Provider(detail),
    }
}

#[async_trait]
impl LLMProvider for GroqProvider {
    fn name(&self) -> &str {
        "groq"
    }

    async fn generate(&self, request: LLMRequest) -> Result<LLMResponse, LLMError> {
        self.validate_request(&request)?;
        let body = self.convert_to_openai_format(&request);
        let url = format!("{}/chat/completions", self.base_url);
        debug!(%url, model = %request.model, "sending chat completion request");

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                let formatted_error =
                    error_display::format_llm_error(PROVIDER_LABEL, &format!("Network error: {e}"));
                LLMError::Network(formatted_error)
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            warn!(%status, "chat completion request rejected");
            return Err(classify_http_error(status, &error_text));
        }

        let response_json: Value = response.json().await.map_err(|e| {
            let formatted_error = error_display::format_llm_error(
                PROVIDER_LABEL,
                &format!("Failed to parse response: {e}"),
            );
            LLMError::Provider(formatted_error)
        })?;

        let parsed = self.parse_openai_response(response_json)?;
        if let Some(usage) = &parsed.usage {
            debug!(
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                "chat completion finished"
            );
        }
        Ok(parsed)
    }
}
