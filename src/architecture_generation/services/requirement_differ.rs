use crate::architecture_generation::domain::{DiffResult, Requirement};
use std::collections::{HashMap, HashSet};

/// Ordered, de-duplicated set of impacted module ids.
#[derive(Default)]
struct ImpactSet {
    order: Vec<String>,
    seen: HashSet<String>,
}

impl ImpactSet {
    fn extend(&mut self, modules: &[String]) {
        for module in modules {
            if self.seen.insert(module.clone()) {
                self.order.push(module.clone());
            }
        }
    }
}

/// RequirementDiffer service comparing two revisions of a requirement list.
///
/// Requirements are matched by `id`. Lists are expected to hold unique ids;
/// with duplicates, lookups see the last record for an id.
pub struct RequirementDiffer;

impl RequirementDiffer {
    /// Computes added/modified/removed requirements and the modules they touch.
    ///
    /// `impacted_modules` is emitted in first-seen order: walking `old`
    /// (removed and modified entries, old modules before new ones), then
    /// walking `new` for added entries.
    pub fn diff(old: &[Requirement], new: &[Requirement]) -> DiffResult {
        let old_by_id: HashMap<&str, &Requirement> = old.iter().map(|r| (r.id.as_str(), r)).collect();
        let new_by_id: HashMap<&str, &Requirement> = new.iter().map(|r| (r.id.as_str(), r)).collect();

        let mut result = DiffResult::default();
        let mut impacted = ImpactSet::default();

        for old_req in old {
            match new_by_id.get(old_req.id.as_str()) {
                None => {
                    impacted.extend(&old_req.related_modules);
                    result.removed.push(old_req.clone());
                }
                Some(new_req) if !old_req.same_content(new_req) => {
                    impacted.extend(&old_req.related_modules);
                    impacted.extend(&new_req.related_modules);
                    result.modified.push((*new_req).clone());
                }
                Some(_) => {}
            }
        }

        for new_req in new {
            if !old_by_id.contains_key(new_req.id.as_str()) {
                impacted.extend(&new_req.related_modules);
                result.added.push(new_req.clone());
            }
        }

        result.impacted_modules = impacted.order;

        tracing::debug!(
            added = result.added.len(),
            modified = result.modified.len(),
            removed = result.removed.len(),
            impacted = result.impacted_modules.len(),
            "requirement diff computed"
        );

        result
    }

    /// Human-readable report of a diff. Empty sections are left out; an
    /// empty diff renders as an empty string.
    pub fn summarize(diff: &DiffResult) -> String {
        let mut lines: Vec<String> = Vec::new();

        let sections = [
            ("Added", '+', &diff.added),
            ("Modified", '~', &diff.modified),
            ("Removed", '-', &diff.removed),
        ];
        for (title, marker, requirements) in sections {
            if requirements.is_empty() {
                continue;
            }
            lines.push(format!("**{} Requirements ({}):**", title, requirements.len()));
            for req in requirements.iter() {
                lines.push(format!("{} {}: {}", marker, req.id, req.description));
            }
            lines.push(String::new());
        }

        if !diff.impacted_modules.is_empty() {
            lines.push(format!(
                "**Impacted Modules ({}):**",
                diff.impacted_modules.len()
            ));
            for module in &diff.impacted_modules {
                lines.push(format!("• {}", module));
            }
        }

        lines.join("\n")
    }
}
