use crate::ports::outbound::DocumentReader;
use crate::shared::error::ConverterError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum input size (20 MB); diagram photos are the largest inputs
const MAX_FILE_SIZE: u64 = 20 * 1024 * 1024;

/// FileSystemReader adapter for reading input documents from disk
///
/// This adapter implements the DocumentReader port. Every read goes through
/// the same security checks before any bytes are loaded.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }

    /// Security checks before reading:
    /// - Reject symbolic links
    /// - Validate the path is a regular file
    /// - Check file size limits
    fn check_path(&self, path: &Path) -> Result<()> {
        let metadata = fs::symlink_metadata(path).map_err(|e| ConverterError::FileReadError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

        if metadata.is_symlink() {
            return Err(ConverterError::SecurityError {
                path: path.to_path_buf(),
                reason: "symbolic links are not allowed as input".to_string(),
            }
            .into());
        }

        if !metadata.is_file() {
            return Err(ConverterError::FileReadError {
                path: path.to_path_buf(),
                details: "not a regular file".to_string(),
            }
            .into());
        }

        let file_size = metadata.len();
        if file_size > MAX_FILE_SIZE {
            return Err(ConverterError::SecurityError {
                path: path.to_path_buf(),
                reason: format!(
                    "file is too large ({} bytes). Maximum allowed size is {} bytes.",
                    file_size, MAX_FILE_SIZE
                ),
            }
            .into());
        }

        Ok(())
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentReader for FileSystemReader {
    fn read_text(&self, path: &Path) -> Result<String> {
        self.check_path(path)?;
        tracing::debug!(path = %path.display(), "reading text document");
        fs::read_to_string(path).map_err(|e| {
            ConverterError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }

    fn read_bytes(&self, path: &Path) -> Result<Vec<u8>> {
        self.check_path(path)?;
        tracing::debug!(path = %path.display(), "reading binary document");
        fs::read(path).map_err(|e| {
            ConverterError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}
