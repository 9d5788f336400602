use crate::architecture_generation::domain::GeneratedApi;
use serde::Serialize;

/// ApiResponse - generated stubs, one per requested language
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse {
    pub apis: Vec<GeneratedApi>,
}

impl ApiResponse {
    pub fn new(apis: Vec<GeneratedApi>) -> Self {
        Self { apis }
    }

    /// Plain-text rendering: one block per stub, usage example last.
    pub fn to_text(&self) -> String {
        let mut output = String::new();
        for api in &self.apis {
            output.push_str(&format!(
                "===== {} ({}) : {} =====\n\n",
                api.module_name, api.module_id, api.language
            ));
            output.push_str(api.content.trim_end());
            output.push('\n');
            if let Some(examples) = &api.examples {
                output.push_str("\n### USAGE EXAMPLE\n");
                output.push_str(examples.trim_end());
                output.push('\n');
            }
            output.push('\n');
        }
        output
    }
}
