use std::path::PathBuf;

/// CompareRequest - request DTO for the requirement comparison use case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompareRequest {
    /// Previous requirement list (JSON array)
    pub old_path: PathBuf,
    /// Current requirement list; when absent the old list is the base for `edits_path`
    pub new_path: Option<PathBuf>,
    /// Partial edits (JSON array) applied on top of the current list
    pub edits_path: Option<PathBuf>,
    /// Architecture document whose diagram gets the impacted nodes highlighted
    pub architecture_path: Option<PathBuf>,
}

impl CompareRequest {
    pub fn new(old_path: PathBuf, new_path: Option<PathBuf>) -> Self {
        Self {
            old_path,
            new_path,
            edits_path: None,
            architecture_path: None,
        }
    }

    pub fn with_edits(mut self, edits_path: Option<PathBuf>) -> Self {
        self.edits_path = edits_path;
        self
    }

    pub fn with_architecture(mut self, architecture_path: Option<PathBuf>) -> Self {
        self.architecture_path = architecture_path;
        self
    }
}
