use super::input::load_json;
use crate::application::dto::{ArchitectureResponse, CompareRequest, CompareResponse};
use crate::architecture_generation::domain::{apply_edits, DiffResult, Requirement, RequirementEdit};
use crate::architecture_generation::services::{
    diagram_id, AnalysisValidator, DiagramBuilder, MermaidWriter, RequirementDiffer,
};
use crate::ports::outbound::{DocumentReader, ProgressReporter};
use crate::shared::error::ConverterError;
use crate::shared::Result;
use std::collections::HashSet;

/// CompareRequirementsUseCase - diff two requirement revisions
///
/// The current revision is either read directly, or derived by applying a
/// list of edits to it (or to the old revision when no current list is given).
pub struct CompareRequirementsUseCase<DR, PR> {
    document_reader: DR,
    progress_reporter: PR,
}

impl<DR, PR> CompareRequirementsUseCase<DR, PR>
where
    DR: DocumentReader,
    PR: ProgressReporter,
{
    pub fn new(document_reader: DR, progress_reporter: PR) -> Self {
        Self {
            document_reader,
            progress_reporter,
        }
    }

    pub fn execute(&self, request: CompareRequest) -> Result<CompareResponse> {
        let old: Vec<Requirement> =
            load_json(&self.document_reader, &request.old_path, "requirement list")?;
        AnalysisValidator::validate_requirements("old", &old)?;

        let new = self.current_revision(&request, &old)?;
        AnalysisValidator::validate_requirements("new", &new)?;

        let diff = RequirementDiffer::diff(&old, &new);
        let summary = RequirementDiffer::summarize(&diff);
        self.progress_reporter.report(&format!(
            "🔎 {} added, {} modified, {} removed, {} module(s) impacted",
            diff.added.len(),
            diff.modified.len(),
            diff.removed.len(),
            diff.impacted_modules.len()
        ));

        let (highlighted_diagram, unknown_modules) = match &request.architecture_path {
            Some(path) => {
                let document: ArchitectureResponse =
                    load_json(&self.document_reader, path, "architecture document")?;
                let (diagram, unknown) = self.highlight(&document, &diff);
                (Some(diagram), unknown)
            }
            None => (None, Vec::new()),
        };

        Ok(CompareResponse {
            diff,
            summary,
            requirements: new,
            highlighted_diagram,
            unknown_modules,
        })
    }

    fn current_revision(&self, request: &CompareRequest, old: &[Requirement]) -> Result<Vec<Requirement>> {
        let base: Vec<Requirement> = match (&request.new_path, &request.edits_path) {
            (Some(path), _) => load_json(&self.document_reader, path, "requirement list")?,
            (None, Some(_)) => old.to_vec(),
            (None, None) => {
                return Err(ConverterError::MissingInput {
                    fields: "new requirement list or edits".to_string(),
                }
                .into())
            }
        };

        let Some(edits_path) = &request.edits_path else {
            return Ok(base);
        };
        let edits: Vec<RequirementEdit> =
            load_json(&self.document_reader, edits_path, "requirement edits")?;
        self.progress_reporter
            .report(&format!("✏️  Applying {} edit(s)", edits.len()));
        Ok(apply_edits(&base, &edits))
    }

    /// Flags impacted nodes shown in the document's diagram. Returns the
    /// highlighted text and the impacted ids that are not modules at all.
    fn highlight(&self, document: &ArchitectureResponse, diff: &DiffResult) -> (String, Vec<String>) {
        let module_ids: HashSet<&str> = document.architecture.module_ids().into_iter().collect();
        let shown = DiagramBuilder::build(
            &document.architecture.modules,
            &document.analysis.hardware_components,
        );

        let mut flagged = Vec::new();
        let mut unknown = Vec::new();
        for module in &diff.impacted_modules {
            if !module_ids.contains(module.as_str()) {
                unknown.push(module.clone());
            } else if shown.node(&diagram_id(module)).is_some() {
                flagged.push(module.clone());
            } else {
                tracing::debug!(module = %module, "impacted module is collapsed in the diagram");
            }
        }

        if !unknown.is_empty() {
            self.progress_reporter.report(&format!(
                "⚠️  Impacted ids with no matching module: {}",
                unknown.join(", ")
            ));
        }

        (MermaidWriter::highlight(&document.architecture.diagram, &flagged), unknown)
    }
}
