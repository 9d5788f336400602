use crate::adapters::outbound::formatters::{JsonFormatter, MermaidFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::ArchitectureFormatter;

/// Factory for creating architecture formatters
///
/// This factory belongs in the application layer as it selects the
/// infrastructure adapter that matches the requested output format.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified output format
    ///
    /// # Examples
    /// ```
    /// use hw2sw::application::dto::OutputFormat;
    /// use hw2sw::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Mermaid);
    /// ```
    pub fn create(format: OutputFormat) -> Box<dyn ArchitectureFormatter> {
        match format {
            OutputFormat::Mermaid => Box::new(MermaidFormatter::new()),
            OutputFormat::Json => Box::new(JsonFormatter::new()),
        }
    }

    /// Returns the progress message for the specified output format
    ///
    /// # Examples
    /// ```
    /// use hw2sw::application::dto::OutputFormat;
    /// use hw2sw::application::factories::FormatterFactory;
    ///
    /// let message = FormatterFactory::progress_message(OutputFormat::Json);
    /// assert_eq!(message, "📝 Writing architecture document (JSON)...");
    /// ```
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Mermaid => "📝 Writing Mermaid diagram...",
            OutputFormat::Json => "📝 Writing architecture document (JSON)...",
        }
    }
}
