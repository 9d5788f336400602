/// Formatter adapters for the supported architecture output formats
mod json_formatter;
mod mermaid_formatter;

pub use json_formatter::JsonFormatter;
pub use mermaid_formatter::MermaidFormatter;
