//! OpenAI Chat Completions client
//!
//! Works against any OpenAI-compatible endpoint; the base URL comes from config.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::AiConfig;
use crate::error::{AppError, AppResult};

/// Client for the chat completions API
#[derive(Clone)]
pub struct OpenAiClient {
    http_client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    temperature: f64,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

impl OpenAiClient {
    /// Build a client from AI settings; fails when no key is configured
    pub fn from_config(config: &AiConfig) -> AppResult<Self> {
        let api_key = config
            .openai_api_key
            .clone()
            .filter(|_| config.is_configured())
            .ok_or_else(|| AppError::Configuration("OpenAI API key not configured".to_string()))?;

        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::Configuration(format!("HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send one system+user exchange and return the first choice's text
    pub async fn chat_completion(
        &self,
        system: &str,
        user: &str,
        temperature: f64,
        max_tokens: u32,
    ) -> AppResult<String> {
        let request = ChatCompletionRequest {
            model: &self.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
            temperature,
            max_tokens,
        };

        let response = self
            .http_client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| AppError::ExternalService(format!("OpenAI request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalService(format!(
                "OpenAI API error: {} - {}",
                status, body
            )));
        }

        let data: ChatCompletionResponse = response.json().await.map_err(|e| {
            AppError::ExternalService(format!("Failed to parse OpenAI response: {}", e))
        })?;

        data.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or_else(|| AppError::ExternalService("OpenAI returned no content".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config(base_url: String) -> AiConfig {
        AiConfig {
            openai_api_key: Some("sk-test-key".to_string()),
            model: "gpt-4o-mini".to_string(),
            base_url,
            timeout_secs: 5,
        }
    }

    #[test]
    fn test_placeholder_key_is_rejected() {
        let mut cfg = config("http://localhost".to_string());
        cfg.openai_api_key = Some("sk-xxxx".to_string());
        assert!(matches!(
            OpenAiClient::from_config(&cfg),
            Err(AppError::Configuration(_))
        ));
    }

    #[tokio::test]
    async fn test_chat_completion_returns_first_choice() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(header("authorization", "Bearer sk-test-key"))
            .and(body_partial_json(serde_json::json!({
                "model": "gpt-4o-mini",
                "temperature": 0.85,
                "max_tokens": 1500
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "choices": [
                    {"message": {"role": "assistant", "content": "Dia ensolarado."}},
                    {"message": {"role": "assistant", "content": "ignored"}}
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = OpenAiClient::from_config(&config(format!("{}/", server.uri()))).unwrap();
        let text = client
            .chat_completion("Você é um meteorologista.", "Como está o tempo?", 0.85, 1500)
            .await
            .unwrap();
        assert_eq!(text, "Dia ensolarado.");
    }

    #[tokio::test]
    async fn test_empty_choices_is_external_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"choices": []})),
            )
            .mount(&server)
            .await;

        let client = OpenAiClient::from_config(&config(server.uri())).unwrap();
        let err = client.chat_completion("s", "u", 0.7, 800).await.unwrap_err();
        assert!(matches!(err, AppError::ExternalService(_)));
    }

    #[tokio::test]
    async fn test_non_success_status_is_external_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(429).set_body_string("rate limited"))
            .mount(&server)
            .await;

        let client = OpenAiClient::from_config(&config(server.uri())).unwrap();
        let err = client.chat_completion("s", "u", 0.7, 800).await.unwrap_err();
        assert!(matches!(err, AppError::ExternalService(msg) if msg.contains("429")));
    }
}
