use async_trait::async_trait;
use hw2sw::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock CompletionClient for testing
///
/// Answers with the reply of the first rule whose needle occurs in the
/// prompt, falling back to `default_reply`. Every request is recorded.
#[derive(Default, Clone)]
pub struct MockCompletionClient {
    pub rules: Vec<(String, std::result::Result<String, String>)>,
    pub default_reply: Option<String>,
    pub requests: Arc<Mutex<Vec<CompletionRequest>>>,
}

impl MockCompletionClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replying(reply: &str) -> Self {
        Self {
            default_reply: Some(reply.to_string()),
            ..Self::default()
        }
    }

    pub fn with_reply(mut self, needle: &str, reply: &str) -> Self {
        self.rules.push((needle.to_string(), Ok(reply.to_string())));
        self
    }

    pub fn with_failure(mut self, needle: &str, message: &str) -> Self {
        self.rules.push((needle.to_string(), Err(message.to_string())));
        self
    }

    pub fn recorded(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionClient for MockCompletionClient {
    async fn complete(&self, request: CompletionRequest) -> Result<String> {
        self.requests.lock().unwrap().push(request.clone());

        let rule = self
            .rules
            .iter()
            .find(|(needle, _)| request.prompt.contains(needle.as_str()));
        match rule {
            Some((_, Ok(reply))) => Ok(reply.clone()),
            Some((_, Err(message))) => Err(ConverterError::LlmRequest {
                details: message.clone(),
                hint: "mock failure".to_string(),
            }
            .into()),
            None => match &self.default_reply {
                Some(reply) => Ok(reply.clone()),
                None => anyhow::bail!("Mock completion client has no reply"),
            },
        }
    }
}
