use super::input::load_json;
use crate::application::dto::{ApiRequest, ApiResponse, ArchitectureResponse};
use crate::application::prompts::{api_prompt, split_api_response, ApiContext, API_SYSTEM_PROMPT};
use crate::architecture_generation::domain::{GeneratedApi, ProgrammingLanguage, SoftwareModule};
use crate::ports::outbound::{CompletionClient, CompletionRequest, DocumentReader, ProgressReporter};
use crate::shared::error::ConverterError;
use crate::shared::Result;
use chrono::Utc;
use futures::stream::{self, StreamExt};

/// Upper bound on completions in flight at once
pub const MAX_CONCURRENT_REQUESTS: usize = 4;

/// GenerateApiUseCase - API stubs for one module of an architecture document
///
/// One completion per requested language, run concurrently. Stubs are
/// returned in request order; if any language fails, the first failure in
/// request order is returned.
pub struct GenerateApiUseCase<DR, CC, PR> {
    document_reader: DR,
    completion_client: CC,
    progress_reporter: PR,
}

impl<DR, CC, PR> GenerateApiUseCase<DR, CC, PR>
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

    pub async fn execute(&self, request: ApiRequest) -> Result<ApiResponse> {
        let document: ArchitectureResponse = load_json(
            &self.document_reader,
            &request.architecture_path,
            "architecture document",
        )?;

        let module = document
            .architecture
            .module(&request.module_id)
            .ok_or_else(|| ConverterError::ModuleNotFound {
                module_id: request.module_id.clone(),
                available: document.architecture.module_ids().join(", "),
            })?;

        let languages = unique_languages(&request.languages);
        if languages.is_empty() {
            return Err(ConverterError::MissingInput {
                fields: "language".to_string(),
            }
            .into());
        }

        let context = Self::context_for(&document, module);
        self.progress_reporter.report(&format!(
            "🧩 Generating {} API stub(s) for {} ({})",
            languages.len(),
            module.name,
            module.id
        ));
        self.progress_reporter
            .report_waiting("Waiting for the model to write the API...");

        let context = &context;
        let mut results: Vec<(usize, Result<GeneratedApi>)> = stream::iter(languages.into_iter().enumerate())
            .map(|(index, language)| {
                let completion_request = CompletionRequest::new(
                    api_prompt(module, language, context),
                    request.max_tokens,
                    request.temperature,
                )
                .with_system(API_SYSTEM_PROMPT);
                async move {
                    let generated = self.generate_one(module, language, completion_request).await;
                    (index, generated)
                }
            })
            .buffer_unordered(MAX_CONCURRENT_REQUESTS)
            .collect()
            .await;
        results.sort_by_key(|(index, _)| *index);

        let apis: Result<Vec<GeneratedApi>> = results.into_iter().map(|(_, api)| api).collect();
        match apis {
            Ok(apis) => {
                self.progress_reporter
                    .report_completion(&format!("✅ Generated {} API stub(s)", apis.len()));
                Ok(ApiResponse::new(apis))
            }
            Err(e) => {
                self.progress_reporter.report_error("❌ API generation failed");
                Err(e)
            }
        }
    }

    async fn generate_one(
        &self,
        module: &SoftwareModule,
        language: ProgrammingLanguage,
        request: CompletionRequest,
    ) -> Result<GeneratedApi> {
        let completion = self.completion_client.complete(request).await?;
        let (content, examples) = split_api_response(&completion);
        tracing::debug!(module = %module.id, %language, has_example = examples.is_some(), "API stub received");

        Ok(GeneratedApi {
            module_id: module.id.clone(),
            module_name: module.name.clone(),
            language,
            content,
            examples,
            timestamp: Utc::now(),
        })
    }

    /// Requirements naming the module, and the names of modules wired to it.
    fn context_for(document: &ArchitectureResponse, module: &SoftwareModule) -> ApiContext {
        ApiContext {
            requirements: document
                .analysis
                .requirements
                .iter()
                .filter(|r| r.related_modules.iter().any(|m| m == &module.id))
                .map(|r| format!("{}: {}", r.id, r.description))
                .collect(),
            connected_modules: document
                .architecture
                .connected_modules(&module.id)
                .into_iter()
                .map(|m| m.name.clone())
                .collect(),
        }
    }
}

/// Keeps the first occurrence of each language.
fn unique_languages(languages: &[ProgrammingLanguage]) -> Vec<ProgrammingLanguage> {
    let mut unique = Vec::with_capacity(languages.len());
    for language in languages {
        if !unique.contains(language) {
            unique.push(*language);
        }
    }
    unique
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_languages_keeps_first_occurrence() {
        let languages = [
            ProgrammingLanguage::C,
            ProgrammingLanguage::Python,
            ProgrammingLanguage::C,
            ProgrammingLanguage::Java,
        ];
        assert_eq!(
            unique_languages(&languages),
            vec![ProgrammingLanguage::C, ProgrammingLanguage::Python, ProgrammingLanguage::Java]
        );
    }
}
