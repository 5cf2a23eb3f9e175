use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use crate::domain::{
    analysis::ports::VisionClient,
    common::{LlmConfig, entities::app_errors::CoreError},
};

/// Client for an OpenAI-compatible vision chat-completions endpoint.
#[derive(Debug, Clone)]
pub struct ArkVisionClient {
    api_key: String,
    model: String,
    base_url: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<Message>,
}

#[derive(Debug, Serialize)]
struct Message {
    role: &'static str,
    content: MessageContent,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum MessageContent {
    Text(String),
    Parts(Vec<ContentPart>),
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentPart {
    Text { text: String },
    ImageUrl { image_url: ImageUrl },
}

#[derive(Debug, Serialize)]
struct ImageUrl {
    url: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: AssistantMessage,
}

#[derive(Debug, Deserialize)]
struct AssistantMessage {
    content: String,
}

impl ArkVisionClient {
    pub fn new(config: LlmConfig) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            api_key: config.api_key,
            model: config.model,
            base_url: config.base_url,
            client,
        })
    }

    async fn call_chat_completions(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<String, CoreError> {
        // An absent credential or model id fails closed, before any network
        // call is attempted.
        if self.api_key.is_empty() || self.model.is_empty() {
            return Err(CoreError::Unauthorized);
        }

        let url = format!("{}/chat/completions", self.base_url.trim_end_matches('/'));

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(classify_transport_error)?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            tracing::error!(%status, "vision endpoint rejected the credential or model id");
            return Err(CoreError::Unauthorized);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(%status, %body, "vision endpoint returned an error");
            return Err(CoreError::ExternalServiceError(format!(
                "vision endpoint returned {status}"
            )));
        }

        let completion: ChatCompletionResponse = response.json().await.map_err(|e| {
            tracing::error!("failed to decode completion envelope: {e}");
            CoreError::ExternalServiceError(format!("failed to decode completion envelope: {e}"))
        })?;

        completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| CoreError::ExternalServiceError("no completion in reply".to_string()))
    }
}

impl VisionClient for ArkVisionClient {
    async fn complete_with_image(
        &self,
        system_prompt: String,
        user_prompt: String,
        image_data_uri: String,
    ) -> Result<String, CoreError> {
        let request = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![
                Message {
                    role: "system",
                    content: MessageContent::Text(system_prompt),
                },
                Message {
                    role: "user",
                    content: MessageContent::Parts(vec![
                        ContentPart::Text { text: user_prompt },
                        ContentPart::ImageUrl {
                            image_url: ImageUrl {
                                url: image_data_uri,
                            },
                        },
                    ]),
                },
            ],
        };

        self.call_chat_completions(request).await
    }
}

fn classify_transport_error(err: reqwest::Error) -> CoreError {
    if err.is_timeout() {
        CoreError::Timeout
    } else {
        CoreError::Unreachable(err.to_string())
    }
}
