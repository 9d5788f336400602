use crate::architecture_generation::domain::{
    AnalysisResult, ArchitectureMetadata, SoftwareArchitecture,
};
use serde::{Deserialize, Serialize};

/// ArchitectureResponse - result of an analyze or assemble run
///
/// Serialized as-is by the JSON formatter; the same document is read back by
/// `diff --architecture` and `generate-api`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchitectureResponse {
    pub metadata: ArchitectureMetadata,
    pub analysis: AnalysisResult,
    pub architecture: SoftwareArchitecture,
}

impl ArchitectureResponse {
    pub fn new(
        analysis: AnalysisResult,
        architecture: SoftwareArchitecture,
        metadata: ArchitectureMetadata,
    ) -> Self {
        Self {
            metadata,
            analysis,
            architecture,
        }
    }
}
