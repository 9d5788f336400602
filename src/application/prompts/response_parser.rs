use crate::architecture_generation::domain::AnalysisResult;
use crate::shared::error::ConverterError;
use crate::shared::Result;

/// Heading separating an API stub from its usage example.
pub const USAGE_EXAMPLE_MARKER: &str = "### USAGE EXAMPLE";

/// Strips a surrounding Markdown code fence, if any.
fn strip_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // drop the info string (```json)
    let body = rest.split_once('\n').map_or("", |(_, body)| body);
    body.strip_suffix("```").unwrap_or(body).trim()
}

/// Parses the analysis completion into an [`AnalysisResult`].
///
/// Accepts bare JSON, JSON wrapped in a code fence, or JSON surrounded by
/// prose (the outermost `{ ... }` is used).
pub fn parse_analysis(text: &str) -> Result<AnalysisResult> {
    let body = strip_fence(text);
    let candidate = if body.starts_with('{') {
        body
    } else {
        match (body.find('{'), body.rfind('}')) {
            (Some(start), Some(end)) if start < end => &body[start..=end],
            _ => body,
        }
    };

    serde_json::from_str(candidate).map_err(|e| {
        ConverterError::LlmResponse {
            details: format!("analysis is not valid JSON: {}", e),
        }
        .into()
    })
}

/// Splits an API completion into the stub and the optional usage example.
///
/// Only the first marker splits; an empty example becomes `None`.
pub fn split_api_response(text: &str) -> (String, Option<String>) {
    match text.split_once(USAGE_EXAMPLE_MARKER) {
        Some((api, example)) => {
            let example = example.trim();
            (
                api.trim().to_string(),
                (!example.is_empty()).then(|| example.to_string()),
            )
        }
        None => (text.trim().to_string(), None),
    }
}
