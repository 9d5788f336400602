use crate::architecture_generation::domain::{DiffResult, Requirement};
use serde::Serialize;

/// CompareResponse - result of comparing two requirement revisions
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompareResponse {
    pub diff: DiffResult,
    pub summary: String,
    /// The current requirement list after edits were applied
    pub requirements: Vec<Requirement>,
    /// Diagram with impacted nodes flagged, when an architecture was supplied
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlighted_diagram: Option<String>,
    /// Impacted ids that match no module of the supplied architecture
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub unknown_modules: Vec<String>,
}

impl CompareResponse {
    pub fn has_changes(&self) -> bool {
        self.diff.has_changes()
    }
}
