use crate::shared::Result;

/// OutputPresenter port for presenting final output
///
/// This port abstracts the output destination (stdout, file)
/// where formatted diagrams, documents and reports are written.
pub trait OutputPresenter {
    /// Presents the formatted content to the output destination
    ///
    /// # Errors
    /// Returns an error if:
    /// - Writing to the output destination fails
    /// - The destination is a symbolic link
    /// - The parent directory does not exist
    fn present(&self, content: &str) -> Result<()>;
}
