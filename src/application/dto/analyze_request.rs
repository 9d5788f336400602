use super::{DEFAULT_ANALYSIS_MAX_TOKENS, DEFAULT_TEMPERATURE};
use std::path::PathBuf;

/// AnalyzeRequest - request DTO for the diagram analysis use case
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzeRequest {
    /// Path to the hardware block diagram image (JPEG)
    pub image_path: PathBuf,
    /// Free-text system requirements sent along with the image
    pub requirements: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl AnalyzeRequest {
    pub fn new(image_path: PathBuf, requirements: String) -> Self {
        Self {
            image_path,
            requirements,
            max_tokens: DEFAULT_ANALYSIS_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
        }
    }

    pub fn with_sampling(mut self, max_tokens: u32, temperature: f32) -> Self {
        self.max_tokens = max_tokens;
        self.temperature = temperature;
        self
    }
}

/// AssembleRequest - request DTO for assembling a saved analysis payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssembleRequest {
    /// Path to an analysis JSON document (`hardwareComponents`, `requirements`, ...)
    pub input_path: PathBuf,
}

impl AssembleRequest {
    pub fn new(input_path: PathBuf) -> Self {
        Self { input_path }
    }
}
