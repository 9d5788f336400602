use crate::application::dto::ArchitectureResponse;
use crate::ports::outbound::ArchitectureFormatter;
use crate::shared::Result;

/// MermaidFormatter adapter writing the assembled diagram as Mermaid text
///
/// A `%%` comment line carrying the run metadata is placed right after the
/// `graph` header; renderers ignore it.
pub struct MermaidFormatter;

impl MermaidFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MermaidFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ArchitectureFormatter for MermaidFormatter {
    fn format(&self, response: &ArchitectureResponse) -> Result<String> {
        let metadata = &response.metadata;
        let stamp = format!(
            "  %% {} {} | {} | {}\n",
            metadata.tool_name(),
            metadata.tool_version(),
            metadata.timestamp(),
            metadata.run_id()
        );

        let diagram = &response.architecture.diagram;
        let mut output = String::with_capacity(diagram.len() + stamp.len());
        match diagram.split_once('\n') {
            Some((header, body)) => {
                output.push_str(header);
                output.push('\n');
                output.push_str(&stamp);
                output.push_str(body);
            }
            None => {
                output.push_str(diagram);
                output.push('\n');
                output.push_str(&stamp);
            }
        }
        Ok(output)
    }
}
