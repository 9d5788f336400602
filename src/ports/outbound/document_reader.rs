use crate::shared::Result;
use std::path::Path;

/// DocumentReader port for reading input documents
///
/// This port abstracts the file system operations needed to load analysis
/// payloads, requirement lists, architecture documents and diagram images.
pub trait DocumentReader {
    /// Reads a UTF-8 text document
    ///
    /// # Arguments
    /// * `path` - Path to the document
    ///
    /// # Errors
    /// Returns an error if the file does not exist, is not a regular file,
    /// is too large, or cannot be read
    fn read_text(&self, path: &Path) -> Result<String>;

    /// Reads a binary document such as a diagram image
    ///
    /// # Errors
    /// Same conditions as [`DocumentReader::read_text`]
    fn read_bytes(&self, path: &Path) -> Result<Vec<u8>>;
}
