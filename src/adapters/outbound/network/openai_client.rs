use crate::ports::outbound::{CompletionClient, CompletionRequest};
use crate::shared::error::ConverterError;
use crate::shared::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormat>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: MessageContent<'a>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum MessageContent<'a> {
    Text(&'a str),
    Parts(Vec<ContentPart<'a>>),
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentPart<'a> {
    Text { text: &'a str },
    ImageUrl { image_url: ImageUrl },
}

#[derive(Debug, Serialize)]
struct ImageUrl {
    url: String,
    detail: &'static str,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// OpenAiClient adapter for OpenAI-compatible chat-completion endpoints
///
/// This adapter implements the CompletionClient port. Each call is a single
/// POST to `<base_url>/chat/completions`; failures are returned to the
/// caller unchanged, without retry.
pub struct OpenAiClient {
    client: reqwest::Client,
    endpoint: String,
    model: String,
    api_key: String,
}

impl OpenAiClient {
    pub fn new(base_url: &str, model: &str, api_key: String, timeout: Duration) -> Result<Self> {
        let user_agent = format!("hw2sw/{}", env!("CARGO_PKG_VERSION"));
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            endpoint: format!("{}/chat/completions", base_url.trim_end_matches('/')),
            model: model.to_string(),
            api_key,
        })
    }

    /// Builds a client whose key is read from the environment variable `key_env`.
    pub fn from_env(base_url: &str, model: &str, key_env: &str, timeout: Duration) -> Result<Self> {
        let api_key = std::env::var(key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| ConverterError::LlmRequest {
                details: format!("environment variable {} is not set", key_env),
                hint: format!(
                    "Export {}=<your key>, or point api_key_env in hw2sw.config.yml at another variable",
                    key_env
                ),
            })?;
        Self::new(base_url, model, api_key, timeout)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn build_body<'a>(&'a self, request: &'a CompletionRequest) -> ChatRequest<'a> {
        let mut messages = Vec::with_capacity(2);
        if let Some(system) = request.system.as_deref() {
            messages.push(ChatMessage {
                role: "system",
                content: MessageContent::Text(system),
            });
        }

        let user_content = match request.image.as_ref() {
            Some(image) => MessageContent::Parts(vec![
                ContentPart::Text {
                    text: &request.prompt,
                },
                ContentPart::ImageUrl {
                    image_url: ImageUrl {
                        url: image.data_url(),
                        detail: "high",
                    },
                },
            ]),
            None => MessageContent::Text(&request.prompt),
        };
        messages.push(ChatMessage {
            role: "user",
            content: user_content,
        });

        ChatRequest {
            model: &self.model,
            messages,
            max_tokens: request.max_tokens,
            temperature: request.temperature,
            response_format: request.json_mode.then_some(ResponseFormat {
                kind: "json_object",
            }),
        }
    }

    fn hint_for(status: reqwest::StatusCode) -> String {
        match status.as_u16() {
            401 | 403 => "Check that the API key is valid for this endpoint".to_string(),
            404 => "Check api_base_url and the model name in hw2sw.config.yml".to_string(),
            429 => "The service is rate limiting or out of quota; try again later".to_string(),
            _ => "Check network connectivity and the service status".to_string(),
        }
    }

    fn extract_content(response: ChatResponse) -> Result<String> {
        let content = response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or_else(|| ConverterError::LlmResponse {
                details: "no completion content in response".to_string(),
            })?;
        Ok(content)
    }
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    async fn complete(&self, request: CompletionRequest) -> Result<String> {
        let body = self.build_body(&request);
        tracing::debug!(
            endpoint = %self.endpoint,
            model = %self.model,
            json_mode = request.json_mode,
            with_image = request.image.is_some(),
            "sending completion request"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| ConverterError::LlmRequest {
                details: e.to_string(),
                hint: "Check network connectivity and api_base_url".to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorEnvelope>(&text)
                .map(|envelope| envelope.error.message)
                .unwrap_or(text);
            return Err(ConverterError::LlmRequest {
                details: format!("service returned status {}: {}", status, message.trim()),
                hint: Self::hint_for(status),
            }
            .into());
        }

        let parsed: ChatResponse = response.json().await.map_err(|e| ConverterError::LlmResponse {
            details: e.to_string(),
        })?;
        Self::extract_content(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::ImageAttachment;

    fn client() -> OpenAiClient {
        OpenAiClient::new(
            "https://api.example.test/v1/",
            "gpt-4o",
            "sk-test".to_string(),
            Duration::from_secs(5),
        )
        .unwrap()
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        assert_eq!(client().endpoint(), "https://api.example.test/v1/chat/completions");
    }

    #[test]
    fn test_body_with_image_and_json_mode() {
        let client = client();
        let request = CompletionRequest::new("analyze", 4000, 0.7)
            .with_image(ImageAttachment::new("image/jpeg", "QUJD"))
            .json();
        let body = serde_json::to_value(client.build_body(&request)).unwrap();

        assert_eq!(body["model"], "gpt-4o");
        assert_eq!(body["max_tokens"], 4000);
        assert_eq!(body["response_format"]["type"], "json_object");
        let parts = body["messages"][0]["content"].as_array().unwrap();
        assert_eq!(parts[0]["type"], "text");
        assert_eq!(parts[0]["text"], "analyze");
        assert_eq!(parts[1]["type"], "image_url");
        assert_eq!(parts[1]["image_url"]["url"], "data:image/jpeg;base64,QUJD");
        assert_eq!(parts[1]["image_url"]["detail"], "high");
    }

    #[test]
    fn test_png_attachment_keeps_its_media_type() {
        let client = client();
        let png = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
        let request = CompletionRequest::new("analyze", 100, 0.0)
            .with_image(ImageAttachment::from_bytes(&png));
        let body = serde_json::to_value(client.build_body(&request)).unwrap();

        let url = body["messages"][0]["content"][1]["image_url"]["url"].as_str().unwrap();
        assert_eq!(url, "data:image/png;base64,iVBORw0KGgo=");
    }

    #[test]
    fn test_body_with_system_message() {
        let client = client();
        let request = CompletionRequest::new("generate", 2000, 0.7).with_system("expert");
        let body = serde_json::to_value(client.build_body(&request)).unwrap();

        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][0]["content"], "expert");
        assert_eq!(body["messages"][1]["role"], "user");
        assert_eq!(body["messages"][1]["content"], "generate");
        assert!(body.get("response_format").is_none());
    }

    #[test]
    fn test_extract_content() {
        let response: ChatResponse =
            serde_json::from_str(r#"{"choices":[{"message":{"content":"hello"}}]}"#).unwrap();
        assert_eq!(OpenAiClient::extract_content(response).unwrap(), "hello");
    }

    #[test]
    fn test_extract_content_empty_is_error() {
        let response: ChatResponse = serde_json::from_str(r#"{"choices":[]}"#).unwrap();
        let err = OpenAiClient::extract_content(response).unwrap_err();
        assert!(err.to_string().contains("no completion content"));

        let response: ChatResponse =
            serde_json::from_str(r#"{"choices":[{"message":{"content":"  "}}]}"#).unwrap();
        assert!(OpenAiClient::extract_content(response).is_err());
    }

    #[test]
    fn test_from_env_missing_key() {
        let result = OpenAiClient::from_env(
            "https://api.example.test/v1",
            "gpt-4o",
            "HW2SW_TEST_KEY_THAT_IS_NEVER_SET",
            Duration::from_secs(5),
        );
        let err = format!("{}", result.err().unwrap());
        assert!(err.contains("HW2SW_TEST_KEY_THAT_IS_NEVER_SET"));
        assert!(err.contains("💡 Hint:"));
    }

    #[test]
    fn test_hint_for_status() {
        assert!(OpenAiClient::hint_for(reqwest::StatusCode::UNAUTHORIZED).contains("API key"));
        assert!(OpenAiClient::hint_for(reqwest::StatusCode::TOO_MANY_REQUESTS).contains("rate"));
    }
}
