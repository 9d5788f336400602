use super::assemble_architecture::build_architecture;
use crate::application::dto::{AnalyzeRequest, ArchitectureResponse};
use crate::application::prompts::{analysis_prompt, parse_analysis};
use crate::ports::outbound::{
    CompletionClient, CompletionRequest, DocumentReader, ImageAttachment, ProgressReporter,
};
use crate::shared::error::ConverterError;
use crate::shared::Result;

/// AnalyzeDiagramUseCase - diagram image and requirements text to architecture
///
/// # Type Parameters
/// * `DR` - DocumentReader implementation (image input)
/// * `CC` - CompletionClient implementation (LLM analysis)
/// * `PR` - ProgressReporter implementation
pub struct AnalyzeDiagramUseCase<DR, CC, PR> {
    document_reader: DR,
    completion_client: CC,
    progress_reporter: PR,
}

impl<DR, CC, PR> AnalyzeDiagramUseCase<DR, CC, PR>
where
    DR: DocumentReader,
    CC: CompletionClient,
    PR: ProgressReporter,
{
    pub fn new(document_reader: DR, completion_client: CC, progress_reporter: PR) -> Self {
        Self {
            document_reader,
            completion_client,
            progress_reporter,
        }
    }

    /// Executes the analysis
    ///
    /// # Errors
    /// Returns an error if:
    /// - The image is empty or the requirements text is blank
    /// - The completion fails or is not a valid analysis payload
    /// - The analysis fails validation (empty or duplicate ids, version 0)
    pub async fn execute(&self, request: AnalyzeRequest) -> Result<ArchitectureResponse> {
        let image = self.document_reader.read_bytes(&request.image_path)?;

        let mut missing = Vec::new();
        if image.is_empty() {
            missing.push("image");
        }
        if request.requirements.trim().is_empty() {
            missing.push("requirements");
        }
        if !missing.is_empty() {
            return Err(ConverterError::MissingInput {
                fields: missing.join(", "),
            }
            .into());
        }

        let completion_request = CompletionRequest::new(
            analysis_prompt(&request.requirements),
            request.max_tokens,
            request.temperature,
        )
        .with_image(ImageAttachment::from_bytes(&image))
        .json();

        self.progress_reporter.report(&format!(
            "🔍 Analyzing hardware diagram: {} ({} bytes)",
            request.image_path.display(),
            image.len()
        ));
        self.progress_reporter
            .report_waiting("Waiting for the model to read the diagram...");

        let completion = match self.completion_client.complete(completion_request).await {
            Ok(text) => text,
            Err(e) => {
                self.progress_reporter.report_error("❌ Diagram analysis failed");
                return Err(e);
            }
        };
        self.progress_reporter.report_completion("✅ Analysis received");

        let analysis = parse_analysis(&completion)?;
        build_architecture(analysis, &self.progress_reporter)
    }
}
