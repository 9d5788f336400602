use crate::ports::outbound::OutputPresenter;
use crate::shared::error::ConverterError;
use crate::shared::Result;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

/// FileSystemWriter adapter writing a diagram or document to `-o FILE`
pub struct FileSystemWriter {
    output_path: PathBuf,
}

impl FileSystemWriter {
    pub fn new(output_path: PathBuf) -> Self {
        Self { output_path }
    }

    fn write_error(&self, details: impl Into<String>) -> ConverterError {
        ConverterError::FileWriteError {
            path: self.output_path.clone(),
            details: details.into(),
        }
    }

    /// The target may be new or a regular file; its directory must exist.
    fn check_target(&self) -> Result<()> {
        let parent = self
            .output_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty());
        if let Some(dir) = parent {
            if !dir.is_dir() {
                return Err(self
                    .write_error(format!("Parent directory does not exist: {}", dir.display()))
                    .into());
            }
        }

        match fs::symlink_metadata(&self.output_path) {
            Ok(meta) if meta.file_type().is_symlink() => Err(ConverterError::SecurityError {
                path: self.output_path.clone(),
                reason: "writing to symbolic links is not allowed".to_string(),
            }
            .into()),
            Ok(meta) if meta.is_dir() => Err(self.write_error("path is a directory").into()),
            _ => Ok(()),
        }
    }
}

impl OutputPresenter for FileSystemWriter {
    fn present(&self, content: &str) -> Result<()> {
        self.check_target()?;
        fs::write(&self.output_path, content).map_err(|e| self.write_error(e.to_string()))?;

        tracing::info!(path = %self.output_path.display(), bytes = content.len(), "output written");
        Ok(())
    }
}

/// StdoutPresenter adapter; the default when no output file is given
#[derive(Default)]
pub struct StdoutPresenter;

impl StdoutPresenter {
    pub fn new() -> Self {
        Self
    }
}

impl OutputPresenter for StdoutPresenter {
    fn present(&self, content: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(content.as_bytes())
            .and_then(|_| stdout.flush())
            .map_err(|e| anyhow::anyhow!("Failed to write to stdout: {}", e))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_writes_diagram_to_file() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("architecture.mmd");

        FileSystemWriter::new(output_path.clone())
            .present("graph LR\n")
            .unwrap();

        assert_eq!(fs::read_to_string(&output_path).unwrap(), "graph LR\n");
    }

    #[test]
    fn test_overwrites_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("diff.json");
        fs::write(&output_path, "stale").unwrap();

        FileSystemWriter::new(output_path.clone()).present("{}\n").unwrap();

        assert_eq!(fs::read_to_string(&output_path).unwrap(), "{}\n");
    }

    #[test]
    fn test_missing_parent_directory() {
        let writer = FileSystemWriter::new(PathBuf::from("/nonexistent/directory/architecture.json"));
        let err = writer.present("{}").unwrap_err();

        assert!(err.to_string().contains("Parent directory does not exist"));
    }

    #[test]
    fn test_refuses_directory_target() {
        let temp_dir = TempDir::new().unwrap();
        let err = FileSystemWriter::new(temp_dir.path().to_path_buf())
            .present("graph LR\n")
            .unwrap_err();

        assert!(err.to_string().contains("path is a directory"));
    }

    #[cfg(unix)]
    #[test]
    fn test_refuses_symlink_target() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("target.txt");
        let link = temp_dir.path().join("link.txt");
        fs::write(&target, "original").unwrap();
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let err = FileSystemWriter::new(link).present("overwrite").unwrap_err();

        assert!(matches!(
            err.downcast_ref::<ConverterError>(),
            Some(ConverterError::SecurityError { .. })
        ));
        assert_eq!(fs::read_to_string(&target).unwrap(), "original");
    }

    #[test]
    fn test_stdout_presenter() {
        assert!(StdoutPresenter::new().present("graph LR\n").is_ok());
    }
}
