use hw2sw::prelude::*;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Mock DocumentReader serving in-memory files
#[derive(Default)]
pub struct MockDocumentReader {
    pub files: HashMap<PathBuf, Vec<u8>>,
}

impl MockDocumentReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: &str, content: impl Into<Vec<u8>>) -> Self {
        self.files.insert(PathBuf::from(path), content.into());
        self
    }

    fn lookup(&self, path: &Path) -> Result<&Vec<u8>> {
        self.files.get(path).ok_or_else(|| {
            ConverterError::FileReadError {
                path: path.to_path_buf(),
                details: "not found in mock".to_string(),
            }
            .into()
        })
    }
}

impl DocumentReader for MockDocumentReader {
    fn read_text(&self, path: &Path) -> Result<String> {
        Ok(String::from_utf8_lossy(self.lookup(path)?).into_owned())
    }

    fn read_bytes(&self, path: &Path) -> Result<Vec<u8>> {
        Ok(self.lookup(path)?.clone())
    }
}
