use super::Requirement;
use serde::{Deserialize, Serialize};

/// Outcome of comparing two requirement lists.
///
/// `modified` holds the new revision of each changed requirement.
/// `impacted_modules` lists each module id once, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffResult {
    pub added: Vec<Requirement>,
    pub modified: Vec<Requirement>,
    pub removed: Vec<Requirement>,
    pub impacted_modules: Vec<String>,
}

impl DiffResult {
    pub fn has_changes(&self) -> bool {
        !(self.added.is_empty() && self.modified.is_empty() && self.removed.is_empty())
    }

    pub fn added_ids(&self) -> Vec<&str> {
        self.added.iter().map(|r| r.id.as_str()).collect()
    }

    pub fn modified_ids(&self) -> Vec<&str> {
        self.modified.iter().map(|r| r.id.as_str()).collect()
    }

    pub fn removed_ids(&self) -> Vec<&str> {
        self.removed.iter().map(|r| r.id.as_str()).collect()
    }
}
