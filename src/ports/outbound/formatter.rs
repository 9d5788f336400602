use crate::application::dto::ArchitectureResponse;
use crate::shared::Result;

/// ArchitectureFormatter port for formatting an assembled architecture
///
/// This port abstracts the output format (Mermaid text, JSON document).
pub trait ArchitectureFormatter {
    /// Formats the architecture produced by an analyze or assemble run
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, response: &ArchitectureResponse) -> Result<String>;
}
