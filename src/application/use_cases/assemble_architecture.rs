use super::input::load_json;
use crate::application::dto::{ArchitectureResponse, AssembleRequest};
use crate::architecture_generation::domain::AnalysisResult;
use crate::architecture_generation::services::{
    AnalysisValidator, ArchitectureAssembler, MetadataGenerator,
};
use crate::ports::outbound::{DocumentReader, ProgressReporter};
use crate::shared::Result;

/// AssembleArchitectureUseCase - offline path from a saved analysis payload
///
/// No LLM call is made; the payload is validated, assembled and stamped.
pub struct AssembleArchitectureUseCase<DR, PR> {
    document_reader: DR,
    progress_reporter: PR,
}

impl<DR, PR> AssembleArchitectureUseCase<DR, PR>
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

    pub fn execute(&self, request: AssembleRequest) -> Result<ArchitectureResponse> {
        self.progress_reporter.report(&format!(
            "📖 Loading analysis from: {}",
            request.input_path.display()
        ));

        let analysis: AnalysisResult =
            load_json(&self.document_reader, &request.input_path, "analysis result")?;

        build_architecture(analysis, &self.progress_reporter)
    }
}

/// Validates an analysis, assembles its architecture and stamps the result.
/// Shared by the online (analyze) and offline (assemble) paths.
pub(crate) fn build_architecture<PR: ProgressReporter>(
    analysis: AnalysisResult,
    progress_reporter: &PR,
) -> Result<ArchitectureResponse> {
    AnalysisValidator::validate(&analysis)?;

    progress_reporter.report(&format!(
        "✅ Detected {} hardware component(s) and {} requirement(s)",
        analysis.hardware_components.len(),
        analysis.requirements.len()
    ));

    let unmapped = ArchitectureAssembler::unmapped_hardware(&analysis.hardware_components);
    if !unmapped.is_empty() {
        let names: Vec<String> = unmapped
            .iter()
            .map(|hw| format!("{} ({})", hw.id, hw.type_name()))
            .collect();
        progress_reporter.report(&format!("ℹ️  No driver generated for: {}", names.join(", ")));
    }

    let architecture = ArchitectureAssembler::assemble(&analysis.hardware_components);
    let metadata = MetadataGenerator::generate_default_metadata();

    progress_reporter.report_completion(&format!(
        "🏗️  Assembled {} software module(s)",
        architecture.modules.len()
    ));

    Ok(ArchitectureResponse::new(analysis, architecture, metadata))
}
