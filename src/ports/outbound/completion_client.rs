use crate::shared::Result;
use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Media type assumed when the leading bytes match no known format.
const FALLBACK_MEDIA_TYPE: &str = "image/jpeg";

/// Media type of an image, read from its leading magic bytes.
pub fn image_media_type(bytes: &[u8]) -> &'static str {
    match bytes {
        [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, ..] => "image/png",
        [0xFF, 0xD8, 0xFF, ..] => "image/jpeg",
        [b'G', b'I', b'F', b'8', b'7' | b'9', b'a', ..] => "image/gif",
        [b'R', b'I', b'F', b'F', _, _, _, _, b'W', b'E', b'B', b'P', ..] => "image/webp",
        [b'B', b'M', ..] => "image/bmp",
        _ => FALLBACK_MEDIA_TYPE,
    }
}

/// Image attached to a prompt, sent inline as a data URL.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageAttachment {
    pub media_type: &'static str,
    pub base64: String,
}

impl ImageAttachment {
    pub fn new(media_type: &'static str, base64: impl Into<String>) -> Self {
        Self {
            media_type,
            base64: base64.into(),
        }
    }

    /// Encodes raw image bytes, detecting the media type from their content.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self::new(image_media_type(bytes), STANDARD.encode(bytes))
    }

    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.media_type, self.base64)
    }
}

/// One request to a hosted chat-completion model.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    /// Optional system message sent before the prompt
    pub system: Option<String>,
    /// User prompt text
    pub prompt: String,
    /// Optional image attached to the prompt
    pub image: Option<ImageAttachment>,
    /// Ask the model for a single JSON object
    pub json_mode: bool,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl CompletionRequest {
    pub fn new(prompt: impl Into<String>, max_tokens: u32, temperature: f32) -> Self {
        Self {
            system: None,
            prompt: prompt.into(),
            image: None,
            json_mode: false,
            max_tokens,
            temperature,
        }
    }

    pub fn with_system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }

    pub fn with_image(mut self, image: ImageAttachment) -> Self {
        self.image = Some(image);
        self
    }

    pub fn json(mut self) -> Self {
        self.json_mode = true;
        self
    }
}

/// CompletionClient port for the LLM collaborator
///
/// Implementations send a single request and return the text of the first
/// choice. Failures are surfaced as-is; callers do not retry.
///
/// # Async Support
/// Implementations must be `Send + Sync` so that several completions
/// (one per target language) can be in flight at once.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Sends the request and returns the completion text
    ///
    /// # Errors
    /// Returns an error if:
    /// - The network request fails or times out
    /// - The service answers with a non-success status
    /// - The response carries no choice or empty content
    async fn complete(&self, request: CompletionRequest) -> Result<String>;
}
