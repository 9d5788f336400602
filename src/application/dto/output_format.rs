/// Output format for analyze and assemble runs
///
/// This enum belongs in the application layer as both the CLI (inbound side)
/// and the formatters (outbound adapters) need to understand it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Mermaid flowchart text (default)
    #[default]
    Mermaid,
    /// Full architecture document as JSON
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mermaid" | "mmd" => Ok(OutputFormat::Mermaid),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!(
                "Invalid format: {}. Please specify 'mermaid' or 'json'",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Mermaid => write!(f, "mermaid"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Output format for requirement comparisons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DiffFormat {
    /// Human-readable change summary (default)
    #[default]
    Summary,
    /// Diff, summary and highlighted diagram as JSON
    Json,
    /// Only the highlighted diagram; needs an architecture document
    Mermaid,
}

impl std::str::FromStr for DiffFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "summary" | "text" => Ok(DiffFormat::Summary),
            "json" => Ok(DiffFormat::Json),
            "mermaid" | "mmd" => Ok(DiffFormat::Mermaid),
            _ => Err(format!(
                "Invalid format: {}. Please specify 'summary', 'json' or 'mermaid'",
                s
            )),
        }
    }
}

impl std::fmt::Display for DiffFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DiffFormat::Summary => write!(f, "summary"),
            DiffFormat::Json => write!(f, "json"),
            DiffFormat::Mermaid => write!(f, "mermaid"),
        }
    }
}
