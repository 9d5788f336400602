/// Prompt construction and completion parsing for the LLM collaborators
mod analysis_prompt;
mod api_prompt;
mod response_parser;

pub use analysis_prompt::analysis_prompt;
pub use api_prompt::{api_prompt, ApiContext, LanguageStyle, API_SYSTEM_PROMPT};
pub use response_parser::{parse_analysis, split_api_response, USAGE_EXAMPLE_MARKER};
