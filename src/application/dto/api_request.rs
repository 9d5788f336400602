use super::{DEFAULT_API_MAX_TOKENS, DEFAULT_TEMPERATURE};
use crate::architecture_generation::domain::ProgrammingLanguage;
use std::path::PathBuf;

/// ApiRequest - request DTO for API stub generation
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    /// Architecture document written by `analyze` or `assemble -f json`
    pub architecture_path: PathBuf,
    pub module_id: String,
    /// Target languages; stubs come back in this order
    pub languages: Vec<ProgrammingLanguage>,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl ApiRequest {
    pub fn new(
        architecture_path: PathBuf,
        module_id: String,
        languages: Vec<ProgrammingLanguage>,
    ) -> Self {
        Self {
            architecture_path,
            module_id,
            languages,
            max_tokens: DEFAULT_API_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
        }
    }

    pub fn with_sampling(mut self, max_tokens: u32, temperature: f32) -> Self {
        self.max_tokens = max_tokens;
        self.temperature = temperature;
        self
    }
}
