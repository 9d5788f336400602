use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequirementCategory {
    Functional,
    Performance,
    Interface,
    Safety,
    Security,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// A generated, versionable requirement statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Requirement {
    pub id: String,
    pub category: RequirementCategory,
    pub description: String,
    pub testable: bool,
    pub priority: Priority,
    #[serde(default)]
    pub related_modules: Vec<String>,
    /// Starts at 1 and grows by one on every edit.
    #[serde(default = "initial_version")]
    pub version: u32,
}

fn initial_version() -> u32 {
    1
}

impl Requirement {
    pub fn new(
        id: impl Into<String>,
        category: RequirementCategory,
        description: impl Into<String>,
        priority: Priority,
    ) -> Self {
        Self {
            id: id.into(),
            category,
            description: description.into(),
            testable: true,
            priority,
            related_modules: Vec::new(),
            version: initial_version(),
        }
    }

    pub fn with_related_modules<I, S>(mut self, modules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.related_modules = modules.into_iter().map(Into::into).collect();
        self
    }

    /// Compares everything a reviewer cares about: description, category,
    /// priority, testability, and related modules as a set. `id` and
    /// `version` are ignored.
    pub fn same_content(&self, other: &Requirement) -> bool {
        self.description == other.description
            && self.category == other.category
            && self.priority == other.priority
            && self.testable == other.testable
            && self.related_module_set() == other.related_module_set()
    }

    fn related_module_set(&self) -> HashSet<&str> {
        self.related_modules.iter().map(String::as_str).collect()
    }

    /// Returns the edited requirement with `version` bumped by one.
    /// Fields left as `None` in the edit keep their current value.
    pub fn apply_edit(&self, edit: &RequirementEdit) -> Requirement {
        Requirement {
            id: self.id.clone(),
            category: edit.category.unwrap_or(self.category),
            description: edit
                .description
                .clone()
                .unwrap_or_else(|| self.description.clone()),
            testable: edit.testable.unwrap_or(self.testable),
            priority: edit.priority.unwrap_or(self.priority),
            related_modules: edit
                .related_modules
                .clone()
                .unwrap_or_else(|| self.related_modules.clone()),
            version: self.version.saturating_add(1),
        }
    }
}

/// Partial update of a requirement, keyed by `id`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequirementEdit {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<RequirementCategory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub testable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_modules: Option<Vec<String>>,
}

/// Applies edits to a requirement list. Edits naming an unknown id are
/// skipped; each matching edit bumps that requirement's version once.
pub fn apply_edits(requirements: &[Requirement], edits: &[RequirementEdit]) -> Vec<Requirement> {
    let mut updated = requirements.to_vec();
    for edit in edits {
        if let Some(slot) = updated.iter_mut().find(|r| r.id == edit.id) {
            *slot = slot.apply_edit(edit);
        } else {
            tracing::debug!(id = %edit.id, "edit targets unknown requirement, skipped");
        }
    }
    updated
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boot_fast() -> Requirement {
        Requirement::new(
            "R1",
            RequirementCategory::Functional,
            "boot fast",
            Priority::High,
        )
        .with_related_modules(["app_main"])
    }

    #[test]
    fn test_deserialize_wire_format() {
        let req: Requirement = serde_json::from_str(
            r#"{"id":"REQ_001","category":"safety","description":"watchdog","testable":false,
                "priority":"low","relatedModules":["kernel_io"],"version":3}"#,
        )
        .unwrap();
        assert_eq!(req.category, RequirementCategory::Safety);
        assert_eq!(req.priority, Priority::Low);
        assert!(!req.testable);
        assert_eq!(req.related_modules, vec!["kernel_io".to_string()]);
        assert_eq!(req.version, 3);
    }

    #[test]
    fn test_missing_version_defaults_to_one() {
        let req: Requirement = serde_json::from_str(
            r#"{"id":"R","category":"functional","description":"d","testable":true,"priority":"high"}"#,
        )
        .unwrap();
        assert_eq!(req.version, 1);
    }

    #[test]
    fn test_same_content_ignores_module_order_and_version() {
        let a = boot_fast().with_related_modules(["a", "b"]);
        let mut b = boot_fast().with_related_modules(["b", "a"]);
        b.version = 7;
        assert!(a.same_content(&b));
    }

    #[test]
    fn test_same_content_detects_each_field() {
        let base = boot_fast();

        let mut changed = base.clone();
        changed.description.push('!');
        assert!(!base.same_content(&changed));

        let mut changed = base.clone();
        changed.priority = Priority::Low;
        assert!(!base.same_content(&changed));

        let mut changed = base.clone();
        changed.testable = false;
        assert!(!base.same_content(&changed));

        let mut changed = base.clone();
        changed.category = RequirementCategory::Security;
        assert!(!base.same_content(&changed));

        let changed = base.clone().with_related_modules(["svc_comm"]);
        assert!(!base.same_content(&changed));
    }

    #[test]
    fn test_apply_edit_merges_and_bumps_version() {
        let edit = RequirementEdit {
            id: "R1".to_string(),
            description: Some("boot fast (modified)".to_string()),
            ..Default::default()
        };
        let edited = boot_fast().apply_edit(&edit);
        assert_eq!(edited.description, "boot fast (modified)");
        assert_eq!(edited.priority, Priority::High);
        assert_eq!(edited.related_modules, vec!["app_main".to_string()]);
        assert_eq!(edited.version, 2);
    }

    #[test]
    fn test_apply_edits_skips_unknown_ids() {
        let reqs = vec![boot_fast()];
        let edits = vec![
            RequirementEdit {
                id: "R9".to_string(),
                testable: Some(false),
                ..Default::default()
            },
            RequirementEdit {
                id: "R1".to_string(),
                priority: Some(Priority::Medium),
                ..Default::default()
            },
        ];
        let updated = apply_edits(&reqs, &edits);
        assert_eq!(updated.len(), 1);
        assert_eq!(updated[0].priority, Priority::Medium);
        assert_eq!(updated[0].version, 2);
    }
}
