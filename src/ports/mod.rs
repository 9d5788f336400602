/// Ports module defining interfaces for hexagonal architecture
///
/// Outbound ports (driven ports) are the infrastructure interfaces the
/// application core talks through: LLM completions, file input, output
/// formatting and presentation, progress reporting.
pub mod outbound;
