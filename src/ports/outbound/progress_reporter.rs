/// ProgressReporter port for reporting progress during operations
///
/// Progress goes to stderr so it never mixes with the diagram or document
/// written to stdout.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Signals that the caller is blocked on a slow operation (an LLM call)
    /// until the next `report_completion` or `report_error`
    fn report_waiting(&self, message: &str);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
